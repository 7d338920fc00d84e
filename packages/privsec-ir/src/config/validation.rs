//! Configuration validation
//!
//! Range checks and non-empty checks for every configuration section.

use super::analyzer_config::{AnalyzerConfig, GraphConfig, ResolverConfig, TargetApiConfig};
use super::error::{ConfigError, ConfigResult};
use crate::shared::constants::resolution::{MAX_DEPTH, MIN_DEPTH};

/// Trait for validatable configuration objects
///
/// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
pub trait Validatable {
    fn validate(&self) -> ConfigResult<()>;

    /// Configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

fn require_non_empty(section: &str, field: &str, value: &str) -> ConfigResult<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::validation(
            section,
            format!("'{}' must not be empty", field),
        ));
    }
    Ok(())
}

impl Validatable for TargetApiConfig {
    fn validate(&self) -> ConfigResult<()> {
        let section = self.config_name();
        require_non_empty(section, "package_prefix", &self.package_prefix)?;
        require_non_empty(section, "entry_point_class", &self.entry_point_class)?;
        require_non_empty(section, "listener_signature", &self.listener_signature)?;
        require_non_empty(section, "stream_type", &self.stream_type)?;
        require_non_empty(section, "stream_marker", &self.stream_marker)?;
        require_non_empty(section, "opening_setter", &self.opening_setter)?;

        if self.event_builders.is_empty() {
            return Err(ConfigError::validation(
                section,
                "at least one event builder type is required",
            ));
        }
        for (i, builder) in self.event_builders.iter().enumerate() {
            if self.event_builders[..i]
                .iter()
                .any(|b| b.type_name == builder.type_name)
            {
                return Err(ConfigError::validation(
                    section,
                    format!("duplicate event builder type '{}'", builder.type_name),
                ));
            }
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "target"
    }
}

impl Validatable for ResolverConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(MIN_DEPTH..=MAX_DEPTH).contains(&self.max_depth) {
            return Err(ConfigError::range_with_hint(
                "resolver.max_depth",
                self.max_depth,
                MIN_DEPTH,
                MAX_DEPTH,
                "Definition chains need at least one step; very deep bounds only delay cycle detection",
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "resolver"
    }
}

impl Validatable for GraphConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "graph"
    }
}

impl Validatable for AnalyzerConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.target.validate()?;
        self.resolver.validate()?;
        self.graph.validate()
    }

    fn config_name(&self) -> &'static str {
        "analyzer"
    }
}
