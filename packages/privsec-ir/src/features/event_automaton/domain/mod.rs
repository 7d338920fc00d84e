//! Event automaton domain

mod builtin;
mod record;
mod token;

pub use builtin::{BuiltinFunction, BuiltinFunctionUse};
pub use record::{EventDescription, EventRecord};
pub use token::{is_setter_shaped, EventKind, SetterKind, Token, TokenKey};
