//! Usecase Layer - analyzer runs over a program facts oracle

pub mod analyzer;
pub mod fingerprint;
pub mod report;

// Re-export main API
pub use analyzer::{AnalysisOutcome, Discovery, PrivacyAnalyzer};
pub use fingerprint::{fingerprint_or_unknown, method_fingerprint};
pub use report::{AnalysisReport, GraphSummary, MethodAnalysis};
