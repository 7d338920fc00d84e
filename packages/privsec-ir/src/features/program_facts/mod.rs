//! Program Facts
//!
//! In-memory implementation of the `ProgramFacts` oracle port, loadable from
//! JSON fact dumps produced by an external bytecode front end.

pub mod infrastructure;

pub use infrastructure::{FactsDump, InMemoryFacts};
