//! Analyzer configuration sections
//!
//! Every section deserializes with `#[serde(default)]`, so a YAML file only
//! needs the fields it changes.

use serde::{Deserialize, Serialize};

use crate::features::event_automaton::domain::EventKind;
use crate::shared::constants::{resolution, target_api};
use crate::shared::models::TypeRef;

/// Complete analyzer configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub target: TargetApiConfig,
    pub resolver: ResolverConfig,
    pub graph: GraphConfig,
}

/// Builder type → event kind entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBuilderType {
    pub type_name: String,
    pub kind: EventKind,
}

impl EventBuilderType {
    pub fn new(type_name: &str, kind: EventKind) -> Self {
        Self {
            type_name: type_name.to_string(),
            kind,
        }
    }
}

/// Names of the event API surface inside analyzed apps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetApiConfig {
    /// Package of the bundled event library (fingerprinted)
    pub package_prefix: String,

    /// Fully qualified entry-point class
    pub entry_point_class: String,

    /// Signature of the listener registration method
    pub listener_signature: String,

    /// Short name of the fluent-stream supertype
    pub stream_type: String,

    /// Chains continue through declaring types containing this marker
    pub stream_marker: String,

    /// Static type of built-in field functions
    pub function_type: String,

    /// Setter opening a new event record
    pub opening_setter: String,

    /// Collection method accumulating list literals
    pub list_accumulator: String,

    /// Text used for non-literal vararg elements
    pub vararg_placeholder: String,

    /// Builder type → event kind table
    pub event_builders: Vec<EventBuilderType>,
}

impl Default for TargetApiConfig {
    fn default() -> Self {
        Self {
            package_prefix: target_api::PACKAGE.to_string(),
            entry_point_class: target_api::ENTRY_POINT_CLASS.to_string(),
            listener_signature: target_api::LISTENER_API.to_string(),
            stream_type: target_api::STREAM_TYPE.to_string(),
            stream_marker: target_api::STREAM_MARKER.to_string(),
            function_type: target_api::FUNCTION_TYPE.to_string(),
            opening_setter: target_api::OPENING_SETTER.to_string(),
            list_accumulator: target_api::LIST_ACCUMULATOR.to_string(),
            vararg_placeholder: target_api::VARARG_PLACEHOLDER.to_string(),
            event_builders: vec![
                EventBuilderType::new(target_api::AUDIO_BUILDER, EventKind::Audio),
                EventBuilderType::new(target_api::GEOLOCATION_BUILDER, EventKind::Geolocation),
                EventBuilderType::new(target_api::CONTACT_BUILDER, EventKind::Contact),
                EventBuilderType::new(target_api::MESSAGE_BUILDER, EventKind::Message),
                EventBuilderType::new(target_api::IMAGE_BUILDER, EventKind::Image),
            ],
        }
    }
}

impl TargetApiConfig {
    /// Short name of the entry-point class (`UQI`)
    pub fn entry_point_short_name(&self) -> &str {
        self.entry_point_class
            .rsplit('.')
            .next()
            .unwrap_or(&self.entry_point_class)
    }

    /// Event kind produced by a builder of the given static type
    pub fn event_kind_for(&self, ty: &TypeRef) -> Option<EventKind> {
        self.event_builders
            .iter()
            .find(|b| b.type_name == ty.name())
            .map(|b| b.kind)
    }
}

/// Order of elements recovered from an array literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayOrder {
    /// Order in which the oracle reports the element stores
    UseSite,
    /// Constant store indices decide the slot; the rest keep use-site order
    Index,
}

impl Default for ArrayOrder {
    fn default() -> Self {
        ArrayOrder::Index
    }
}

/// Value resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Definition-chain recursion bound (1..=256)
    pub max_depth: usize,

    pub array_order: ArrayOrder,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            max_depth: resolution::DEFAULT_MAX_DEPTH,
            array_order: ArrayOrder::default(),
        }
    }
}

impl ResolverConfig {
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn array_order(mut self, order: ArrayOrder) -> Self {
        self.array_order = order;
        self
    }
}

/// Attribute graph population settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Also record packages, classes, fields, types and constants
    pub include_structure: bool,

    /// Populate methods in parallel (requires the `parallel` feature)
    pub parallel: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            include_structure: true,
            parallel: true,
        }
    }
}
