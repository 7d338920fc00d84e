//! Shared module - Common types and utilities
//!
//! Program facts model, the oracle port and the target API constants used
//! across all features.

pub mod constants;
pub mod models;
pub mod ports;

// Re-exports for convenience
pub use models::*;
pub use ports::ProgramFacts;
