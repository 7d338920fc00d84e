//! Configuration I/O (YAML loading/export)
//!
//! Schema v1:
//!
//! ```yaml
//! version: 1
//! resolver:
//!   max_depth: 32
//!   array_order: use_site
//! graph:
//!   parallel: false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::analyzer_config::{AnalyzerConfig, GraphConfig, ResolverConfig, TargetApiConfig};
use super::error::{ConfigError, ConfigResult};
use super::validation::Validatable;

pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    #[serde(default)]
    pub version: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetApiConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolver: Option<ResolverConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<GraphConfig>,
}

impl AnalyzerConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(yaml)?;
        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = AnalyzerConfig {
            target: export.target.unwrap_or_default(),
            resolver: export.resolver.unwrap_or_default(),
            graph: export.graph.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Export as a complete v1 document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            target: Some(self.target.clone()),
            resolver: Some(self.resolver.clone()),
            graph: Some(self.graph.clone()),
        };
        Ok(serde_yaml::to_string(&export)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ArrayOrder;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = AnalyzerConfig::default();
        config.resolver.max_depth = 12;

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert!(yaml.contains("max_depth: 12"));

        let back = AnalyzerConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
version: 1
resolver:
  array_order: use_site
"#;
        let config = AnalyzerConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.resolver.array_order, ArrayOrder::UseSite);
        assert_eq!(config.resolver.max_depth, ResolverConfig::default().max_depth);
        assert_eq!(config.target, TargetApiConfig::default());
    }

    #[test]
    fn test_yaml_loading_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "version: 1").unwrap();
        writeln!(file, "graph:").unwrap();
        writeln!(file, "  parallel: false").unwrap();

        let config = AnalyzerConfig::from_yaml(file.path()).unwrap();
        assert!(!config.graph.parallel);
        assert!(config.graph.include_structure);
    }

    #[test]
    fn test_missing_version() {
        let err = AnalyzerConfig::from_yaml_str("graph:\n  parallel: true\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingVersion));
    }

    #[test]
    fn test_unsupported_version() {
        let err = AnalyzerConfig::from_yaml_str("version: 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedVersion { found: 2, .. }));
    }

    #[test]
    fn test_unknown_section_rejected() {
        let err = AnalyzerConfig::from_yaml_str("version: 1\nstorage:\n  max_depth: 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_invalid_range_rejected_on_load() {
        let err =
            AnalyzerConfig::from_yaml_str("version: 1\nresolver:\n  max_depth: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Range { .. }));
    }
}
