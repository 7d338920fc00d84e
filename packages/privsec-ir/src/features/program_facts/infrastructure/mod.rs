//! Program facts infrastructure

pub mod in_memory;

pub use in_memory::{FactsDump, InMemoryFacts};
