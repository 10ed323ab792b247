#![allow(unreachable_pub)]

//! # Macros
//!
//! Procedural macros for enumerable domains. This crate generates the
//! registration table that `ordo-core` consumes, replacing the per-type
//! boilerplate of hand-written `Enumerable` implementations.
//!
//! ## Usage
//! Add the crate next to `ordo-core` (or use the `ordo` facade, which
//! re-exports the macro under the trait's name):
//! ```toml
//! [dependencies]
//! ordo-core = { path = "../crates/shared/core" }
//! ordo-derive = { path = "../infra/derive" }
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro generating an `ordo_core::Enumerable` implementation for
/// a unit-only enum.
///
/// The generated table lists every variant in declaration order with its
/// identifier and numeric value (explicit discriminants included), so
/// ordinal, name, and numeric lookups need no per-type code.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum**.
/// 2. Every variant must be a unit variant (no fields).
/// 3. The enum must not be generic.
/// 4. The enum must satisfy the trait's supertraits
///    (`Copy + Eq + Hash + Debug + Send + Sync`); derive them as usual.
///
/// # Example
///
/// ```rust,ignore
/// use ordo_derive::Enumerable;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enumerable)]
/// enum Foo {
///     None = 0,
///     First = 1,
///     Second = 2,
///     Fifty = 5,
/// }
/// ```
#[proc_macro_derive(Enumerable)]
pub fn derive_enumerable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    macros::enumerable::expand_derive(input).into()
}
