use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields};

pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return quote! { compile_error!("Enumerable cannot be derived for generic enums"); };
    }

    let Data::Enum(data) = &input.data else {
        return quote! { compile_error!("Enumerable can only be derived for enums"); };
    };

    let mut entries = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return quote! { compile_error!("Enumerable requires unit variants (no fields)"); };
        }
        let ident = &variant.ident;
        let name_str = ident.to_string();
        entries.push(quote! {
            ::ordo_core::Member::new(#name_str, #name::#ident, #name::#ident as i64)
        });
    }

    // An uninhabited enum has no values to convert; `as` would not parse.
    let numeric_body = if data.variants.is_empty() {
        quote! { match self {} }
    } else {
        quote! { self as i64 }
    };

    quote! {
        impl ::ordo_core::Enumerable for #name {
            const MEMBERS: &'static [::ordo_core::Member<Self>] = &[
                #(#entries),*
            ];

            fn numeric(self) -> i64 {
                #numeric_body
            }
        }
    }
}
