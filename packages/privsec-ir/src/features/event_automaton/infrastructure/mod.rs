//! Event automaton infrastructure

pub mod fold;
pub mod render;
pub mod scanner;

pub use fold::{fold_tokens, AutomatonState};
pub use render::render_record;
pub use scanner::{ScanOutput, TraceScanner};
