//! Program facts oracle port
//!
//! The static-analysis engine that loads the target binary, builds the IR and
//! computes reaching definitions lives outside this crate. The core only asks
//! it the questions below.

use std::sync::Arc;

use crate::shared::models::{ClassInfo, FactsResult, MethodBody, MethodRef};

pub trait ProgramFacts: Send + Sync {
    /// Classes that belong to the analyzed application
    fn application_classes(&self) -> Vec<ClassInfo>;

    /// Any class known to the oracle (application or library)
    fn find_class(&self, name: &str) -> Option<ClassInfo>;

    /// Statements and def/use index of a method
    fn body_of(&self, method: &MethodRef) -> FactsResult<Arc<MethodBody>>;

    fn is_application_type(&self, type_name: &str) -> bool;
}
