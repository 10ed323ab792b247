//! # Ordo core
//!
//! Typed introspection over enumerable value domains and an immutable,
//! `u32`-backed set type over such domains.
//!
//! A domain registers its members through the [`Enumerable`] trait
//! (normally via `#[derive(Enumerable)]` from `ordo-derive`); the
//! process-wide metadata registry then resolves declaration-order
//! ordinals, declared names, and numeric values without per-type
//! boilerplate. [`EnumSet`] builds set algebra on top of those ordinals.
//!
//! ## Usage
//! ```rust
//! use ordo_core::{DomainMeta, EnumSet, Enumerable, Member};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum Signal { Green, Amber, Red }
//!
//! impl Enumerable for Signal {
//!     const MEMBERS: &'static [Member<Self>] = &[
//!         Member::new("Green", Self::Green, 0),
//!         Member::new("Amber", Self::Amber, 1),
//!         Member::new("Red", Self::Red, 2),
//!     ];
//!
//!     fn numeric(self) -> i64 {
//!         self as i64
//!     }
//! }
//!
//! let meta = DomainMeta::<Signal>::get().unwrap();
//! assert_eq!(meta.name_of(Signal::Amber).unwrap(), "Amber");
//!
//! let set = EnumSet::empty().unwrap().include(Signal::Red).unwrap();
//! assert!(set.contains(Signal::Red));
//! ```

mod error;
pub mod meta;
pub mod set;

pub use crate::error::{EnumError, Result};
pub use crate::meta::{DomainMeta, Enumerable, Member};
pub use crate::set::{EnumSet, Iter};
