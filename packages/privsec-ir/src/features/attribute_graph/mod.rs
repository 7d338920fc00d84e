//! Attribute Graph
//!
//! Deduplicated node/edge store recording which library APIs every analyzed
//! method calls, plus the package/class/member structure around them.
//!
//! ## Architecture
//! - Domain: `NodeKey`, `Node`, `Edge`, `GraphSnapshot`
//! - Infrastructure: `AttributeGraph` (concurrent store), node constructors,
//!   `GraphPopulator` (per-method population over the oracle)

pub mod domain;
pub mod infrastructure;

pub use domain::{Edge, EdgeType, GraphSnapshot, Node, NodeId, NodeKey, NodeType, Origin};
pub use infrastructure::{AttributeGraph, GraphPopulator, PopulationStats};
