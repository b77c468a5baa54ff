//! Typed failures of the type table.
//!
//! Everything else in the crate is reported through `anyhow`; these stay typed
//! so callers can tell a configuration mismatch apart from an I/O failure.

use thiserror::Error;

/// A header label whose slug has no entry in the type table.
///
/// Fatal for the whole run: the table and the input disagree on the schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown division type '{slug}' (header '{label}'); add it to the type table"
)]
pub struct UnknownTypeError {
    /// Header text as read from the input.
    pub label: String,
    /// Normalized form used for the lookup.
    pub slug: String,
}

/// Rejected type table entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeTableError {
    #[error("type table entry '{key}' normalizes to an empty slug")]
    EmptyKey { key: String },

    #[error("type table entries '{first}' and '{second}' normalize to the same slug '{slug}'")]
    DuplicateKey {
        first: String,
        second: String,
        slug: String,
    },

    #[error("type code '{code}' for '{slug}' must be two ASCII uppercase letters or digits")]
    InvalidCode { slug: String, code: String },

    #[error("type code '{code}' is assigned to both '{first}' and '{second}'")]
    DuplicateCode {
        code: String,
        first: String,
        second: String,
    },
}
