/*
 * PrivSec IR - Privacy Event Description Engine
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Program facts model, oracle port, target API constants
 * - features/    : Vertical slices (value resolution → chains → graph → event automaton)
 * - config/      : AnalyzerConfig (YAML v1)
 * - usecases/    : PrivacyAnalyzer driver and report
 *
 * The bytecode front end (binary loading, IR, def/use) lives outside this
 * crate behind the `ProgramFacts` trait.
 */

#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and the oracle port
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

/// Usecase layer (PrivacyAnalyzer)
pub mod usecases;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::AnalyzerConfig;
pub use errors::{AnalyzerError, Result};
pub use features::attribute_graph::{AttributeGraph, GraphSnapshot, NodeType};
pub use features::event_automaton::{fold_tokens, EventDescription, EventRecord, Token};
pub use features::pipeline_chain::{ChainBuilder, PipelineChain};
pub use features::program_facts::InMemoryFacts;
pub use features::value_resolution::{CallNode, ResolvedValue, ValueResolver};
pub use shared::ProgramFacts;
pub use usecases::{AnalysisOutcome, AnalysisReport, PrivacyAnalyzer};
