//! Shared models

pub mod def_use;
mod error;
pub mod program;

pub use def_use::{DefUseIndex, MethodBody, UseSite};
pub use error::{FactsError, FactsResult};
pub use program::{
    ClassInfo, Constant, Expr, FieldRef, InvokeExpr, InvokeKind, Local, LocalId, MethodRef, Place,
    Statement, StmtId, StmtKind, TypeRef, Value,
};
