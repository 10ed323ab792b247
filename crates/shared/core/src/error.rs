use std::borrow::Cow;

/// Errors surfaced by metadata lookups and set construction.
///
/// Every operation in this workspace is deterministic and side-effect
/// free, so none of these conditions is retryable; they surface
/// synchronously to the immediate caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumError {
    /// The registration table for a domain is not a legal value domain.
    #[error("invalid enumerable domain `{type_name}`: {reason}")]
    Configuration {
        type_name: &'static str,
        reason: Cow<'static, str>,
    },

    /// A domain declares more members than a set's bit field can index.
    #[error("`{type_name}` declares {len} members, exceeding the {cap}-member set capacity")]
    CapacityExceeded {
        type_name: &'static str,
        len: usize,
        cap: usize,
    },

    /// A value handle has no entry in its domain's registration table.
    /// Unreachable for derived tables; signals an incomplete hand-written
    /// implementation.
    #[error("no metadata entry for value `{value}` of `{type_name}`")]
    KeyNotFound {
        type_name: &'static str,
        value: String,
    },

    /// An ordinal fell outside the domain's declared range. Carried as
    /// `i64` so boundary traversal can report the conceptual ordinal `-1`.
    #[error("ordinal {ordinal} out of range for `{type_name}` ({len} members)")]
    OrdinalOutOfRange {
        type_name: &'static str,
        ordinal: i64,
        len: usize,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EnumError>;
