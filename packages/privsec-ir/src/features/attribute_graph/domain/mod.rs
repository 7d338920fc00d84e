//! Attribute graph domain

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Root,
    Package,
    Class,
    Method,
    Field,
    Type,
    Const,
    Api,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Root => "ROOT",
            NodeType::Package => "PACKAGE",
            NodeType::Class => "CLASS",
            NodeType::Method => "METHOD",
            NodeType::Field => "FIELD",
            NodeType::Type => "TYPE",
            NodeType::Const => "CONST",
            NodeType::Api => "API",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EdgeType {
    Contains,
    Refer,
}

impl EdgeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::Contains => "CONTAINS",
            EdgeType::Refer => "REFER",
        }
    }
}

/// Program entity a node was registered for
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Origin {
    Root,
    /// Cumulative package path (`.io.github`)
    Package(String),
    /// Fully qualified class name
    Class(String),
    /// Method signature (application method or called API)
    Method(String),
    /// Field signature
    Field(String),
    /// Non-reference type name
    Type(String),
    /// Constant text
    Const(String),
}

/// Node identity: equal keys always map to the same node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeKey {
    pub origin: Origin,
    pub label: String,
    pub node_type: NodeType,
}

impl NodeKey {
    pub fn new(origin: Origin, label: impl Into<String>, node_type: NodeType) -> Self {
        Self {
            origin,
            label: label.into(),
            node_type,
        }
    }
}

/// Dense node handle, assigned at first registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub key: NodeKey,
    /// Full signature or qualified name, fixed by the first registration
    pub sig: Option<String>,
}

impl Node {
    pub fn label(&self) -> &str {
        &self.key.label
    }

    pub fn node_type(&self) -> NodeType {
        self.key.node_type
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub edge_type: EdgeType,
}

/// Point-in-time copy of the graph for an export backend
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl GraphSnapshot {
    pub fn nodes_of_type(&self, node_type: NodeType) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(move |n| n.key.node_type == node_type)
    }
}
