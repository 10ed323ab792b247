//! Facade crate for enumerable-domain introspection.
//! Re-exports the core primitives and the derive macro, and offers free
//! functions over a domain's metadata.
//! Keep this crate thin: it composes `ordo-core`, it does not implement
//! the metadata or set machinery itself.
//!
//! ## Usage
//! ```rust
//! use ordo::Enumerable;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Enumerable)]
//! enum Suit {
//!     Clubs,
//!     Diamonds,
//!     Hearts,
//!     Spades,
//! }
//!
//! assert_eq!(ordo::name(Suit::Hearts).unwrap(), "Hearts");
//! assert_eq!(ordo::ordinal(Suit::Spades).unwrap(), 3);
//! assert_eq!(ordo::succ(Suit::Clubs).unwrap(), Suit::Diamonds);
//! ```

use std::any::type_name;

pub use ordo_core::{DomainMeta, EnumError, EnumSet, Enumerable, Iter, Member, Result};
pub use ordo_derive::Enumerable;

/// Declared identifier of `value`.
///
/// # Errors
/// [`EnumError::Configuration`] if the domain's registration table is
/// malformed; [`EnumError::KeyNotFound`] if `value` is missing from it.
pub fn name<T: Enumerable>(value: T) -> Result<&'static str> {
    DomainMeta::<T>::get()?.name_of(value)
}

/// Declaration-order position of `value`.
///
/// # Errors
/// As [`name`].
pub fn ordinal<T: Enumerable>(value: T) -> Result<usize> {
    DomainMeta::<T>::get()?.ordinal_of(value)
}

/// Underlying numeric representation of `value`.
#[must_use]
pub fn numeric_value<T: Enumerable>(value: T) -> i64 {
    value.numeric()
}

/// Value declared immediately before `value`.
///
/// # Errors
/// As [`name`], plus [`EnumError::OrdinalOutOfRange`] (conceptual
/// ordinal `-1`) when `value` is the first declared member.
pub fn pred<T: Enumerable>(value: T) -> Result<T> {
    let meta = DomainMeta::<T>::get()?;
    let ordinal = meta.ordinal_of(value)?;
    match ordinal.checked_sub(1) {
        Some(prev) => meta.value_at(prev),
        None => Err(EnumError::OrdinalOutOfRange {
            type_name: type_name::<T>(),
            ordinal: -1,
            len: meta.len(),
        }),
    }
}

/// Value declared immediately after `value`.
///
/// # Errors
/// As [`name`], plus [`EnumError::OrdinalOutOfRange`] when `value` is the
/// last declared member.
pub fn succ<T: Enumerable>(value: T) -> Result<T> {
    let meta = DomainMeta::<T>::get()?;
    let ordinal = meta.ordinal_of(value)?;
    meta.value_at(ordinal + 1)
}

/// Number of declared members of `T`.
///
/// # Errors
/// [`EnumError::Configuration`] if the domain's registration table is
/// malformed.
pub fn len<T: Enumerable>() -> Result<usize> {
    Ok(DomainMeta::<T>::get()?.len())
}
