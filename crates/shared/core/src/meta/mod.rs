//! Enumerable domain metadata: registration tables and the per-type cache.
//!
//! A domain declares its members once, in declaration order, through
//! [`Enumerable::MEMBERS`]. The first lookup against a domain builds a
//! [`DomainMeta`] through the process-wide registry (exactly once, even
//! under concurrent first access) and every later lookup reads the same
//! `'static` instance without locking.

mod registry;

use std::any::type_name;
use std::fmt::Debug;
use std::hash::Hash;

use fxhash::{FxHashMap, FxHashSet};

use crate::error::{EnumError, Result};

/// One declared member of an enumerable domain.
///
/// The entry's position in [`Enumerable::MEMBERS`] is the member's
/// ordinal, so a table is a complete ordinal/name/value mapping.
#[derive(Debug, Clone, Copy)]
pub struct Member<T: 'static> {
    name: &'static str,
    value: T,
    numeric: i64,
}

impl<T: Copy> Member<T> {
    /// Builds a table entry. Intended for generated code; hand-written
    /// tables are validated when the domain's metadata is first built.
    #[must_use]
    pub const fn new(name: &'static str, value: T, numeric: i64) -> Self {
        Self { name, value, numeric }
    }

    /// The declared identifier.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The declared value.
    #[must_use]
    pub const fn value(&self) -> T {
        self.value
    }

    /// The underlying numeric representation, captured at declaration.
    #[must_use]
    pub const fn numeric(&self) -> i64 {
        self.numeric
    }
}

/// A value domain with a compile-time registration table.
///
/// Normally implemented with `#[derive(Enumerable)]` from `ordo-derive`,
/// which emits the table for a unit-only enum. Manual implementations are
/// legal; the registry rejects malformed tables (duplicate names,
/// duplicate values, numeric drift) with [`EnumError::Configuration`] on
/// first use.
pub trait Enumerable: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Declared members, in declaration order.
    const MEMBERS: &'static [Member<Self>];

    /// The underlying numeric representation of `self`.
    fn numeric(self) -> i64;
}

/// Process-scoped metadata for one enumerable domain: the
/// declaration-order member table plus a value-to-ordinal index.
///
/// Built at most once per domain (see [`DomainMeta::get`]) and read-only
/// afterwards; lives for the rest of the process.
#[derive(Debug)]
pub struct DomainMeta<T: Enumerable> {
    members: &'static [Member<T>],
    index: FxHashMap<T, usize>,
}

impl<T: Enumerable> DomainMeta<T> {
    /// Resolves the metadata for `T`, building it on first access.
    ///
    /// The build happens exactly once per domain even when several
    /// threads race on first access; all callers observe the same
    /// `'static` instance.
    ///
    /// # Errors
    /// [`EnumError::Configuration`] if the registration table carries a
    /// duplicate name, a duplicate value, or a numeric column that
    /// disagrees with [`Enumerable::numeric`].
    pub fn get() -> Result<&'static Self> {
        registry::resolve::<T>()
    }

    pub(crate) fn build() -> Result<Self> {
        let members = T::MEMBERS;
        let mut index =
            FxHashMap::with_capacity_and_hasher(members.len(), fxhash::FxBuildHasher::default());
        let mut names = FxHashSet::default();

        for (ordinal, member) in members.iter().enumerate() {
            if member.numeric != member.value.numeric() {
                return Err(Self::configuration(format!(
                    "member `{}` declares numeric {} but converts to {}",
                    member.name,
                    member.numeric,
                    member.value.numeric()
                )));
            }
            if !names.insert(member.name) {
                return Err(Self::configuration(format!(
                    "duplicate member name `{}`",
                    member.name
                )));
            }
            if index.insert(member.value, ordinal).is_some() {
                return Err(Self::configuration(format!(
                    "duplicate member value `{:?}`",
                    member.value
                )));
            }
        }

        Ok(Self { members, index })
    }

    fn configuration(reason: String) -> EnumError {
        EnumError::Configuration { type_name: type_name::<T>(), reason: reason.into() }
    }

    /// Number of declared members.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the domain declares no members.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Declaration-order position of `value`.
    ///
    /// # Errors
    /// [`EnumError::KeyNotFound`] if the value is missing from the
    /// registration table.
    pub fn ordinal_of(&self, value: T) -> Result<usize> {
        self.index.get(&value).copied().ok_or_else(|| EnumError::KeyNotFound {
            type_name: type_name::<T>(),
            value: format!("{value:?}"),
        })
    }

    /// Declared identifier of `value`.
    ///
    /// # Errors
    /// [`EnumError::KeyNotFound`] if the value is missing from the
    /// registration table.
    pub fn name_of(&self, value: T) -> Result<&'static str> {
        Ok(self.members[self.ordinal_of(value)?].name)
    }

    /// Underlying numeric representation of `value`.
    #[must_use]
    pub fn numeric_value_of(&self, value: T) -> i64 {
        value.numeric()
    }

    /// All declared values in ordinal order. Finite and restartable:
    /// every call yields a fresh, independent iterator.
    pub fn values(&self) -> impl Iterator<Item = T> + '_ {
        self.members.iter().map(Member::value)
    }

    /// Declared identifier at `ordinal`.
    ///
    /// # Errors
    /// [`EnumError::OrdinalOutOfRange`] outside `[0, len)`.
    pub fn name_at(&self, ordinal: usize) -> Result<&'static str> {
        self.member_at(ordinal).map(Member::name)
    }

    /// Declared value at `ordinal`.
    ///
    /// # Errors
    /// [`EnumError::OrdinalOutOfRange`] outside `[0, len)`.
    pub fn value_at(&self, ordinal: usize) -> Result<T> {
        self.member_at(ordinal).map(Member::value)
    }

    /// The raw registration table, in declaration order.
    #[must_use]
    pub const fn members(&self) -> &'static [Member<T>] {
        self.members
    }

    fn member_at(&self, ordinal: usize) -> Result<&Member<T>> {
        self.members.get(ordinal).ok_or_else(|| EnumError::OrdinalOutOfRange {
            type_name: type_name::<T>(),
            // Saturate rather than wrap: a wrapped ordinal could collide
            // with the conceptual `-1` reported at the lower boundary.
            ordinal: i64::try_from(ordinal).unwrap_or(i64::MAX),
            len: self.members.len(),
        })
    }
}
