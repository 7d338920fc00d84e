//! Node constructors
//!
//! One constructor per program entity, each choosing the origin, label and
//! signature the entity is registered under.

use std::sync::Arc;

use super::store::AttributeGraph;
use crate::features::attribute_graph::domain::{Node, NodeType, Origin};
use crate::features::value_resolution::domain::CallNode;
use crate::shared::models::{Constant, FieldRef, MethodRef, TypeRef};

/// One segment of a dotted package name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSegment {
    /// Cumulative path with a leading dot (`.io.github`)
    pub path: String,
    pub name: String,
}

/// `io.github.app` → `.io`, `.io.github`, `.io.github.app`
pub fn package_segments(package: &str) -> Vec<PackageSegment> {
    let mut path = String::new();
    package
        .split('.')
        .filter(|seg| !seg.is_empty())
        .map(|seg| {
            path.push('.');
            path.push_str(seg);
            PackageSegment {
                path: path.clone(),
                name: seg.to_string(),
            }
        })
        .collect()
}

pub fn package_node(graph: &AttributeGraph, segment: &PackageSegment) -> Arc<Node> {
    graph.get_or_create_node(
        Origin::Package(segment.path.clone()),
        segment.name.clone(),
        NodeType::Package,
        None,
    )
}

pub fn class_node(graph: &AttributeGraph, class: &TypeRef) -> Arc<Node> {
    graph.get_or_create_node(
        Origin::Class(class.name().to_string()),
        class.short_name(),
        NodeType::Class,
        Some(class.name().to_string()),
    )
}

pub fn method_node(graph: &AttributeGraph, method: &MethodRef) -> Arc<Node> {
    graph.get_or_create_node(
        Origin::Method(method.signature.clone()),
        method.name.clone(),
        NodeType::Method,
        Some(method.signature.clone()),
    )
}

pub fn field_node(graph: &AttributeGraph, field: &FieldRef) -> Arc<Node> {
    let sig = field.signature();
    graph.get_or_create_node(
        Origin::Field(sig.clone()),
        field.name.clone(),
        NodeType::Field,
        Some(sig),
    )
}

/// Reference types share the CLASS node of their class
pub fn type_node(graph: &AttributeGraph, ty: &TypeRef) -> Arc<Node> {
    if ty.is_reference() {
        return class_node(graph, ty);
    }
    graph.get_or_create_node(
        Origin::Type(ty.name().to_string()),
        ty.name(),
        NodeType::Type,
        None,
    )
}

pub fn const_node(graph: &AttributeGraph, constant: &Constant) -> Arc<Node> {
    let text = constant.to_string();
    graph.get_or_create_node(Origin::Const(text.clone()), text, NodeType::Const, None)
}

/// API call site: label = signature + serialized resolved arguments
pub fn api_node(graph: &AttributeGraph, call: &CallNode) -> Arc<Node> {
    let signature = &call.method.signature;
    graph.get_or_create_node(
        Origin::Method(signature.clone()),
        format!("{}{}", signature, call.canonical_args()),
        NodeType::Api,
        Some(signature.clone()),
    )
}
