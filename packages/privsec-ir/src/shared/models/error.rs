//! Program facts errors
//!
//! Failures surfaced while querying the oracle. All of them are per-method:
//! callers log and skip the method instead of aborting the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FactsError {
    /// Method has no retrievable body (abstract, native, phantom)
    #[error("no body available for {method}")]
    MissingBody { method: String },

    /// Body exists but its statement trace cannot be iterated
    #[error("malformed body for {method}: {reason}")]
    Malformed { method: String, reason: String },

    #[error("cannot read fact dump {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Fact dump could not be decoded
    #[error("fact dump decoding failed: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FactsError {
    pub fn missing_body(method: impl Into<String>) -> Self {
        FactsError::MissingBody {
            method: method.into(),
        }
    }
}

pub type FactsResult<T> = std::result::Result<T, FactsError>;
