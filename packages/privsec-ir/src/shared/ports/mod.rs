//! Ports (oracle interfaces)

pub mod program_facts;

pub use program_facts::ProgramFacts;
