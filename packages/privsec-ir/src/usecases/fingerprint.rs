//! Method fingerprints
//!
//! SHA-256 over the sorted set of library field signatures, library call
//! signatures and constants a method body touches. Two builds of the event
//! library compile to the same fingerprints when their bodies agree.

use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use tracing::warn;

use crate::shared::constants::rendering::UNKNOWN_FINGERPRINT;
use crate::shared::models::{MethodBody, MethodRef, Value};
use crate::shared::ports::ProgramFacts;

/// Hex digest of `[item, item, ...]` (sorted, deduplicated)
pub fn method_fingerprint(body: &MethodBody, facts: &dyn ProgramFacts) -> String {
    let mut items: BTreeSet<String> = BTreeSet::new();

    for stmt in body.statements() {
        for field in stmt.field_refs() {
            if !facts.is_application_type(field.declaring_type.name()) {
                items.insert(field.signature());
            }
        }
        for invoke in stmt.invocations() {
            if !invoke.method.is_application
                && !facts.is_application_type(invoke.method.declaring_type.name())
            {
                items.insert(invoke.method.signature.clone());
            }
        }
        for value in stmt.values() {
            if let Value::Constant(c) = value {
                items.insert(c.to_string());
            }
        }
    }

    let listing = format!(
        "[{}]",
        items.into_iter().collect::<Vec<_>>().join(", ")
    );
    let mut hasher = Sha256::new();
    hasher.update(listing.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Fingerprint, or `<UNKNOWN>` when the body cannot be read
pub fn fingerprint_or_unknown(facts: &dyn ProgramFacts, method: &MethodRef) -> String {
    match facts.body_of(method) {
        Ok(body) => method_fingerprint(&body, facts),
        Err(e) => {
            warn!("Cannot fingerprint {}: {}", method.signature, e);
            UNKNOWN_FINGERPRINT.to_string()
        }
    }
}
