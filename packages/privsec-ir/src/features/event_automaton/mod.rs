//! Event Automaton
//!
//! Scans a method's statement trace for event-builder setter calls, folds the
//! resulting token stream into `EventRecord`s and renders one sentence per
//! closed record.
//!
//! ## Architecture
//! - Domain: `EventKind`, `SetterKind`, `Token`, `EventRecord`, built-in functions
//! - Infrastructure: `TraceScanner` (tokens), `AutomatonState` (fold), render table

pub mod domain;
pub mod infrastructure;

pub use domain::{
    BuiltinFunction, BuiltinFunctionUse, EventDescription, EventKind, EventRecord, SetterKind,
    Token, TokenKey,
};
pub use infrastructure::{fold_tokens, render_record, AutomatonState, ScanOutput, TraceScanner};
