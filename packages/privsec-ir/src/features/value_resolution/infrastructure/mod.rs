//! Value resolution infrastructure

pub mod resolver;

pub use resolver::ValueResolver;
