//! Pipeline chain infrastructure

pub mod builder;

pub use builder::ChainBuilder;
