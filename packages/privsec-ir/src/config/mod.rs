//! Configuration system
//!
//! `AnalyzerConfig` carries the names of the target event API, the resolver
//! bounds and the graph population switches.
//!
//! # Examples
//!
//! ```rust,ignore
//! use privsec_ir::config::AnalyzerConfig;
//!
//! // Defaults: PrivacyStreams-Events API, depth 64, index-ordered arrays
//! let config = AnalyzerConfig::default();
//!
//! // YAML override
//! let config = AnalyzerConfig::from_yaml("analyzer.yaml")?;
//! ```

pub mod analyzer_config;
pub mod error;
pub mod io;
pub mod validation;

// Re-exports
pub use analyzer_config::{
    AnalyzerConfig, ArrayOrder, EventBuilderType, GraphConfig, ResolverConfig, TargetApiConfig,
};
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigExportV1;
pub use validation::Validatable;
