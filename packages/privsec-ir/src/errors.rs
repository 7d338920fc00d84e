//! Error types for privsec-ir
//!
//! Per-method failures are logged and skipped where they happen; only the
//! conditions below stop a whole analysis run.

use thiserror::Error;

use crate::config::ConfigError;
use crate::shared::models::FactsError;

/// Main error type for analyzer runs
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The event API is not present in the analyzed program
    #[error("entry point {name} not found; not a PrivacyStreams-Events app")]
    EntryPointMissing { name: String },

    /// Oracle failure outside per-method processing
    #[error("Program facts error: {0}")]
    Facts(#[from] FactsError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Report export
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AnalyzerError {
    pub fn entry_point_missing(name: impl Into<String>) -> Self {
        AnalyzerError::EntryPointMissing { name: name.into() }
    }
}

/// Result type alias for analyzer operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;
