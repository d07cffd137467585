//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that can occur when configuring views or building clauses.
///
/// Recomputing a view never fails: malformed sort fields and unknown filter
/// values degrade to a neutral comparison or an empty result instead.
#[derive(Debug, Error)]
pub enum SeekerError {
    /// A view setting violates its contract (e.g. a page size of zero).
    #[error("invalid view setting '{field}': {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// A date bound could not be parsed.
    #[error("invalid date '{input}', expected YYYY-MM-DD")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl SeekerError {
    /// Create a configuration error.
    pub fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
