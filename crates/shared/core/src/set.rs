//! Immutable bitset over a bounded enumerable domain.

use std::any::type_name;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::error::{EnumError, Result};
use crate::meta::{DomainMeta, Enumerable};

/// An immutable set of values from a bounded enumerable domain, stored as
/// one bit per ordinal in a `u32`.
///
/// Sets are plain `Copy` values: every algebra operation returns a new
/// set and no instance is ever altered in place, so sets are freely
/// shareable and comparable across threads. Cardinality is the
/// population count of the bit field, equality and hashing are defined
/// over the bit field alone, and iteration yields contained values in
/// ascending ordinal order.
///
/// Domains wider than [`EnumSet::CAPACITY`] members are rejected when the
/// first set for that domain is constructed.
pub struct EnumSet<T: Enumerable> {
    meta: &'static DomainMeta<T>,
    bits: u32,
}

impl<T: Enumerable> EnumSet<T> {
    /// Number of ordinals a set's bit field can index.
    pub const CAPACITY: usize = u32::BITS as usize;

    /// Resolves the domain's metadata and enforces the capacity cap.
    /// Every constructor funnels through here, so an oversized domain
    /// fails at instantiation rather than in later algebra; a set that
    /// exists proves its domain passed the check.
    fn domain() -> Result<&'static DomainMeta<T>> {
        let meta = DomainMeta::<T>::get()?;
        if meta.len() > Self::CAPACITY {
            return Err(EnumError::CapacityExceeded {
                type_name: type_name::<T>(),
                len: meta.len(),
                cap: Self::CAPACITY,
            });
        }
        Ok(meta)
    }

    /// The empty set.
    ///
    /// # Errors
    /// [`EnumError::CapacityExceeded`] if the domain declares more than
    /// [`EnumSet::CAPACITY`] members; [`EnumError::Configuration`] if its
    /// registration table is malformed.
    pub fn empty() -> Result<Self> {
        Ok(Self { meta: Self::domain()?, bits: 0 })
    }

    /// The set containing exactly `value`.
    ///
    /// # Errors
    /// As [`EnumSet::empty`], plus [`EnumError::KeyNotFound`] if `value`
    /// is missing from the registration table.
    pub fn from_value(value: T) -> Result<Self> {
        Self::empty()?.include(value)
    }

    /// The set of every listed value. Duplicates are harmless.
    ///
    /// # Errors
    /// As [`EnumSet::from_value`].
    pub fn from_values(values: &[T]) -> Result<Self> {
        Self::empty()?.include_all(values)
    }

    /// The set of every value whose ordinal lies in
    /// `[ordinal(min), ordinal(max)]` inclusive.
    ///
    /// When `min` is declared after `max` the range is empty and so is
    /// the returned set; callers relying on Pascal-style subrange
    /// construction depend on this.
    ///
    /// # Errors
    /// As [`EnumSet::from_value`].
    pub fn from_range(min: T, max: T) -> Result<Self> {
        let meta = Self::domain()?;
        let lower = meta.ordinal_of(min)?;
        let upper = meta.ordinal_of(max)?;
        let mut bits = 0u32;
        for ordinal in lower..=upper {
            bits |= 1 << ordinal;
        }
        Ok(Self { meta, bits })
    }

    /// A copy of this set with `value` included.
    ///
    /// # Errors
    /// [`EnumError::KeyNotFound`] if `value` is missing from the
    /// registration table.
    pub fn include(self, value: T) -> Result<Self> {
        let ordinal = self.meta.ordinal_of(value)?;
        Ok(Self { bits: self.bits | (1 << ordinal), ..self })
    }

    /// A copy of this set with every listed value included.
    ///
    /// # Errors
    /// As [`EnumSet::include`].
    pub fn include_all(self, values: &[T]) -> Result<Self> {
        let mut bits = self.bits;
        for &value in values {
            bits |= 1 << self.meta.ordinal_of(value)?;
        }
        Ok(Self { bits, ..self })
    }

    /// The union of the two sets' bit fields.
    #[must_use]
    pub fn union(self, other: Self) -> Self {
        Self { bits: self.bits | other.bits, ..self }
    }

    /// A copy of this set with `value` excluded.
    ///
    /// # Errors
    /// As [`EnumSet::include`].
    pub fn exclude(self, value: T) -> Result<Self> {
        let ordinal = self.meta.ordinal_of(value)?;
        Ok(Self { bits: self.bits & !(1 << ordinal), ..self })
    }

    /// A copy of this set with every listed value excluded.
    ///
    /// # Errors
    /// As [`EnumSet::include`].
    pub fn exclude_all(self, values: &[T]) -> Result<Self> {
        let mut bits = self.bits;
        for &value in values {
            bits &= !(1 << self.meta.ordinal_of(value)?);
        }
        Ok(Self { bits, ..self })
    }

    /// Every value of this set that is not in `other`.
    #[must_use]
    pub fn difference(self, other: Self) -> Self {
        Self { bits: self.bits & !other.bits, ..self }
    }

    /// Whether the bit at `value`'s ordinal is set. A value missing from
    /// a hand-written registration table is never contained.
    #[must_use]
    pub fn contains(self, value: T) -> bool {
        self.meta.ordinal_of(value).is_ok_and(|ordinal| self.bits & (1 << ordinal) != 0)
    }

    /// Whether no bit is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Number of contained values: the population count of the bit field.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// The raw bit field, one bit per ordinal.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Contained values in ascending ordinal order. Each call starts an
    /// independent, restartable iteration.
    #[must_use]
    pub const fn iter(self) -> Iter<T> {
        Iter { set: self, ordinal: 0 }
    }
}

impl<T: Enumerable> Clone for EnumSet<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Enumerable> Copy for EnumSet<T> {}

impl<T: Enumerable> PartialEq for EnumSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T: Enumerable> Eq for EnumSet<T> {}

impl<T: Enumerable> Hash for EnumSet<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<T: Enumerable> fmt::Debug for EnumSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnumSet<{}> {self}", type_name::<T>())
    }
}

/// Renders `[]` for the empty set, otherwise the contained members'
/// declared names in ascending ordinal order: `[None, Second]`.
impl<T: Enumerable> fmt::Display for EnumSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut first = true;
        for (ordinal, member) in self.meta.members().iter().enumerate() {
            if self.bits & (1 << ordinal) == 0 {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            f.write_str(member.name())?;
        }
        f.write_str("]")
    }
}

impl<T: Enumerable> IntoIterator for EnumSet<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

impl<T: Enumerable> IntoIterator for &EnumSet<T> {
    type Item = T;
    type IntoIter = Iter<T>;

    fn into_iter(self) -> Iter<T> {
        self.iter()
    }
}

/// Ascending-ordinal iterator over a set's contained values.
///
/// Bounded by the domain's member count, so it always terminates.
#[derive(Debug, Clone)]
pub struct Iter<T: Enumerable> {
    set: EnumSet<T>,
    ordinal: usize,
}

impl<T: Enumerable> Iterator for Iter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let members = self.set.meta.members();
        while self.ordinal < members.len() {
            let ordinal = self.ordinal;
            self.ordinal += 1;
            if self.set.bits & (1 << ordinal) != 0 {
                return Some(members[ordinal].value());
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining =
            self.set.bits.checked_shr(self.ordinal as u32).unwrap_or(0).count_ones() as usize;
        (remaining, Some(remaining))
    }
}

impl<T: Enumerable> ExactSizeIterator for Iter<T> {}

impl<T: Enumerable> FusedIterator for Iter<T> {}
