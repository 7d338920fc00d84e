//! Value resolution domain
//!
//! `ResolvedValue` and `CallNode` are immutable value trees: a resolver builds
//! them from one snapshot of oracle facts and nothing mutates them afterwards.

use serde::Serialize;
use std::fmt;

use crate::shared::constants::graph::API_ARG_SEPARATOR;
use crate::shared::models::{Constant, MethodRef};

/// Semantic value recovered for a use-site operand
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ResolvedValue {
    Literal(Constant),
    Nested(Box<CallNode>),
    ArrayLiteral(Vec<ResolvedValue>),
    /// Ambiguous or unrecognized data flow; keeps the operand's raw text
    Opaque(String),
}

impl ResolvedValue {
    pub fn is_opaque(&self) -> bool {
        matches!(self, ResolvedValue::Opaque(_))
    }

    pub fn as_literal(&self) -> Option<&Constant> {
        match self {
            ResolvedValue::Literal(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_call(&self) -> Option<&CallNode> {
        match self {
            ResolvedValue::Nested(call) => Some(call),
            _ => None,
        }
    }

    /// Literal texts carried by this value (flattening array literals)
    pub fn literal_texts(&self) -> Vec<String> {
        match self {
            ResolvedValue::Literal(c) => vec![c.to_string()],
            ResolvedValue::ArrayLiteral(items) => {
                items.iter().flat_map(ResolvedValue::literal_texts).collect()
            }
            ResolvedValue::Nested(_) | ResolvedValue::Opaque(_) => Vec::new(),
        }
    }
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedValue::Literal(c) => write!(f, "{}", c),
            ResolvedValue::Nested(call) => write!(f, "{}", call),
            ResolvedValue::ArrayLiteral(items) => {
                let items: Vec<String> = items.iter().map(|i| i.to_string()).collect();
                write!(f, "[{}]", items.join(", "))
            }
            ResolvedValue::Opaque(raw) => f.write_str(raw),
        }
    }
}

/// Receiver of a reconstructed call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Receiver {
    /// Call on the entry-point type (seeds a pipeline)
    Entry,
    /// Call on the fluent-stream supertype (receiver left implicit)
    Anonymous,
    /// Static call, no receiver object
    Static,
    Value(ResolvedValue),
}

/// One reconstructed invocation: receiver, target, resolved arguments
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallNode {
    pub receiver: Receiver,
    pub method: MethodRef,
    pub args: Vec<ResolvedValue>,
}

impl CallNode {
    pub fn new(receiver: Receiver, method: MethodRef, args: Vec<ResolvedValue>) -> Self {
        Self {
            receiver,
            method,
            args,
        }
    }

    /// Canonical argument serialization used for API node identity
    pub fn canonical_args(&self) -> String {
        serialize_args(&self.args)
    }
}

/// `-----arg` for every argument, in order
pub fn serialize_args(args: &[ResolvedValue]) -> String {
    args.iter()
        .map(|arg| format!("{}{}", API_ARG_SEPARATOR, arg))
        .collect()
}

impl fmt::Display for CallNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let args: Vec<String> = self.args.iter().map(|a| a.to_string()).collect();
        match &self.receiver {
            Receiver::Entry | Receiver::Static => write!(
                f,
                "{}.{}({})",
                self.method.declaring_type.short_name(),
                self.method.name,
                args.join(", ")
            ),
            Receiver::Anonymous => write!(f, ".{}({})", self.method.name, args.join(", ")),
            Receiver::Value(value) => {
                write!(f, "{}.{}({})", value, self.method.name, args.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(decl: &str, name: &str) -> MethodRef {
        MethodRef::new(decl, "void", name, &["java.lang.String"])
    }

    #[test]
    fn test_call_display_per_receiver() {
        let args = vec![ResolvedValue::Literal(Constant::string("x"))];
        let entry = CallNode::new(Receiver::Entry, method("p.UQI", "getData"), args.clone());
        let anon = CallNode::new(Receiver::Anonymous, method("p.PStream", "limit"), args.clone());
        let value = CallNode::new(
            Receiver::Value(ResolvedValue::Opaque("r3".to_string())),
            method("p.Builder", "setField"),
            args,
        );

        assert_eq!(entry.to_string(), "UQI.getData(\"x\")");
        assert_eq!(anon.to_string(), ".limit(\"x\")");
        assert_eq!(value.to_string(), "r3.setField(\"x\")");
    }

    #[test]
    fn test_literal_texts_flatten_arrays() {
        let value = ResolvedValue::ArrayLiteral(vec![
            ResolvedValue::Literal(Constant::Long(1)),
            ResolvedValue::Opaque("r9".to_string()),
            ResolvedValue::ArrayLiteral(vec![ResolvedValue::Literal(Constant::Int(2))]),
        ]);
        assert_eq!(value.literal_texts(), vec!["1L", "2"]);
        assert_eq!(value.to_string(), "[1L, r9, [2]]");
    }

    #[test]
    fn test_canonical_args() {
        let call = CallNode::new(
            Receiver::Static,
            method("android.util.Log", "d"),
            vec![
                ResolvedValue::Literal(Constant::string("tag")),
                ResolvedValue::Opaque("r1".to_string()),
            ],
        );
        assert_eq!(call.canonical_args(), "-----\"tag\"-----r1");
    }
}
