//! Attribute graph infrastructure

pub mod nodes;
pub mod population;
pub mod store;

pub use population::{GraphPopulator, PopulationStats};
pub use store::AttributeGraph;
