//! Pipeline Chain
//!
//! Follows the result of a stream call forward through its use-sites and
//! builds the tree of chained calls (`uqi.getData(..).limit(..).forEach(..)`).

pub mod domain;
pub mod infrastructure;

pub use domain::{ChainChild, PipelineChain};
pub use infrastructure::ChainBuilder;
