//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/         - Value types (no oracle access)
//! - infrastructure/ - Algorithms over the `ProgramFacts` port
//!
//! Data flow: program_facts → value_resolution → {pipeline_chain,
//! attribute_graph, event_automaton}

pub mod attribute_graph;
pub mod event_automaton;
pub mod pipeline_chain;
pub mod program_facts;
pub mod value_resolution;
