//! Analysis report
//!
//! Serializable result of one analyzer run, plus a plain-text console layout.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::errors::Result;
use crate::features::event_automaton::domain::{BuiltinFunctionUse, EventDescription, Token};
use crate::features::pipeline_chain::domain::PipelineChain;

/// Everything recovered from one method calling the listener API
#[derive(Debug, Clone, Default, Serialize)]
pub struct MethodAnalysis {
    pub method: String,
    pub tokens: Vec<Token>,
    pub descriptions: Vec<EventDescription>,
    pub builtins: Vec<BuiltinFunctionUse>,
    pub chains: Vec<PipelineChain>,
}

/// Attribute graph counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub nodes: usize,
    pub edges: usize,
    pub methods_visited: usize,
    pub methods_skipped: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisReport {
    /// Signatures of the methods registering event listeners
    pub pending_methods: Vec<String>,
    pub methods: Vec<MethodAnalysis>,
    /// Library API signatures invoked anywhere in the application
    pub api_used: BTreeSet<String>,
    /// Event library method signature → fingerprint
    pub fingerprints: BTreeMap<String, String>,
    pub graph: GraphSummary,
}

impl AnalysisReport {
    /// Rendered descriptions in closing order
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.methods
            .iter()
            .flat_map(|m| m.descriptions.iter().map(|d| d.text.as_str()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for method in &self.methods {
            for chain in &method.chains {
                out.push_str(&chain.describe(&method.method));
                out.push('\n');
            }
            for builtin in &method.builtins {
                out.push_str(&builtin.summary());
                out.push('\n');
            }
            for description in &method.descriptions {
                out.push_str("*** The privacy description ***\n");
                out.push_str(&description.text);
                out.push('\n');
            }
        }
        out
    }
}
