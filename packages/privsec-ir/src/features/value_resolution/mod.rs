//! Value Resolution
//!
//! Turns use-site operands into semantic values by following reaching
//! definitions, and rebuilds invocation sites as `CallNode`s.
//!
//! ## Architecture
//! - Domain: `ResolvedValue`, `Receiver`, `CallNode`
//! - Infrastructure: `ValueResolver` (resolver + call reconstructor)

pub mod domain;
pub mod infrastructure;

pub use domain::{serialize_args, CallNode, Receiver, ResolvedValue};
pub use infrastructure::ValueResolver;
