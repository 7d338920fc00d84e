//! Privacy Analyzer - Usecase Layer
//!
//! Drives one analysis run over a `ProgramFacts` oracle:
//!
//! ```text
//! application classes
//!   ├─ discovery      listener-calling methods, library API set, fingerprints
//!   ├─ graph          AttributeGraph population (parallel across methods)
//!   └─ per pending method
//!        ├─ TraceScanner → tokens → fold → descriptions
//!        └─ ChainBuilder on entry-point calls
//! ```
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use privsec_ir::features::program_facts::InMemoryFacts;
//! use privsec_ir::usecases::PrivacyAnalyzer;
//!
//! let facts = InMemoryFacts::from_json_file("facts.json")?;
//! let outcome = PrivacyAnalyzer::new(facts, AnalyzerConfig::default())?.run()?;
//! for text in outcome.report.descriptions() {
//!     println!("{}", text);
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};
use tracing::{info, warn};

use super::fingerprint::fingerprint_or_unknown;
use super::report::{AnalysisReport, GraphSummary, MethodAnalysis};
use crate::config::{AnalyzerConfig, Validatable};
use crate::errors::{AnalyzerError, Result};
use crate::features::attribute_graph::{AttributeGraph, GraphPopulator};
use crate::features::event_automaton::{fold_tokens, TraceScanner};
use crate::features::pipeline_chain::ChainBuilder;
use crate::shared::models::{ClassInfo, MethodBody, MethodRef};
use crate::shared::ports::ProgramFacts;

/// Facts gathered before per-method analysis
#[derive(Debug, Clone, Default)]
pub struct Discovery {
    /// Methods registering an event listener, ordered by signature
    pub pending: Vec<MethodRef>,
    pub api_used: BTreeSet<String>,
    pub fingerprints: BTreeMap<String, String>,
}

/// Report plus the populated graph
pub struct AnalysisOutcome {
    pub report: AnalysisReport,
    pub graph: AttributeGraph,
}

pub struct PrivacyAnalyzer<F: ProgramFacts> {
    facts: F,
    config: AnalyzerConfig,
}

impl<F: ProgramFacts> PrivacyAnalyzer<F> {
    pub fn new(facts: F, config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { facts, config })
    }

    pub fn with_defaults(facts: F) -> Self {
        Self {
            facts,
            config: AnalyzerConfig::default(),
        }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn run(&self) -> Result<AnalysisOutcome> {
        info!("Start analyzing PrivacyStreams-Events usage");
        self.check_entry_point()?;

        let classes = self.facts.application_classes();
        let discovery = self.discover(&classes);

        let graph = AttributeGraph::new();
        let stats = GraphPopulator::new(&graph, &self.facts, &self.config).populate(&classes);

        let mut methods = Vec::with_capacity(discovery.pending.len());
        for method in &discovery.pending {
            match self.facts.body_of(method) {
                Ok(body) => methods.push(self.describe_method(&body)),
                Err(e) => warn!("Skipping pending method {}: {}", method.signature, e),
            }
        }

        let report = AnalysisReport {
            pending_methods: discovery
                .pending
                .iter()
                .map(|m| m.signature.clone())
                .collect(),
            methods,
            api_used: discovery.api_used,
            fingerprints: discovery.fingerprints,
            graph: GraphSummary {
                nodes: graph.node_count(),
                edges: graph.edge_count(),
                methods_visited: stats.methods_visited,
                methods_skipped: stats.methods_skipped,
            },
        };

        info!(
            "Finished analyzing: {} pending methods, {} descriptions",
            report.pending_methods.len(),
            report.descriptions().count()
        );
        Ok(AnalysisOutcome { report, graph })
    }

    /// Entry class and listener registration must both be known to the oracle
    fn check_entry_point(&self) -> Result<()> {
        let target = &self.config.target;
        let entry = self
            .facts
            .find_class(&target.entry_point_class)
            .ok_or_else(|| AnalyzerError::entry_point_missing(&target.entry_point_class))?;
        if entry.find_method(&target.listener_signature).is_none() {
            return Err(AnalyzerError::entry_point_missing(&target.listener_signature));
        }
        Ok(())
    }

    pub fn discover(&self, classes: &[ClassInfo]) -> Discovery {
        let target = &self.config.target;
        let mut pending: BTreeMap<String, MethodRef> = BTreeMap::new();
        let mut discovery = Discovery::default();

        for class in classes {
            if class.package().starts_with(&target.package_prefix) {
                for method in &class.methods {
                    discovery.fingerprints.insert(
                        method.signature.clone(),
                        fingerprint_or_unknown(&self.facts, method),
                    );
                }
            }

            for method in &class.methods {
                let body = match self.facts.body_of(method) {
                    Ok(body) => body,
                    Err(e) => {
                        warn!("Skipping {} in discovery: {}", method.signature, e);
                        continue;
                    }
                };
                for stmt in body.statements() {
                    let Some(invoke) = stmt.invoke_expr() else {
                        continue;
                    };
                    if invoke.method.signature == target.listener_signature {
                        pending.insert(method.signature.clone(), method.clone());
                    }
                    if !invoke.method.is_application
                        && !self
                            .facts
                            .is_application_type(invoke.method.declaring_type.name())
                    {
                        discovery.api_used.insert(invoke.method.signature.clone());
                    }
                }
            }
        }

        discovery.pending = pending.into_values().collect();
        discovery
    }

    /// Tokens, descriptions, built-ins and chains of one method
    pub fn describe_method(&self, body: &MethodBody) -> MethodAnalysis {
        let scan = TraceScanner::new(body, &self.config).scan();
        let descriptions = fold_tokens(&scan.tokens);

        let builder = ChainBuilder::new(body, &self.config);
        let chains = body
            .statements()
            .iter()
            .filter_map(|stmt| {
                let invoke = stmt.invoke_expr()?;
                (invoke.method.declaring_type.name() == self.config.target.entry_point_class)
                    .then(|| builder.build_chain(invoke, stmt.id))
            })
            .collect();

        MethodAnalysis {
            method: body.method.signature.clone(),
            tokens: scan.tokens,
            descriptions,
            builtins: scan.builtins,
            chains,
        }
    }
}
