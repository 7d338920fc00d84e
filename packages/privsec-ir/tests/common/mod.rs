//! Common test utilities for privsec-ir
//!
//! This module provides method-body builders and PrivacyStreams-Events app
//! fixtures for integration and end-to-end tests.

#![allow(dead_code)]

mod builders;
mod fixtures;

// Re-export all utilities
pub use builders::*;
pub use fixtures::*;
