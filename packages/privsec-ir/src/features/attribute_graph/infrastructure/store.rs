// Attribute Graph Store
//
// Explicit context object shared by every population worker:
// - Nodes interned by key (DashMap entry API = atomic get-or-create)
// - Edges appended under a parking_lot mutex
// - CONTAINS edges recorded once per (from, to)
// - Singleton ROOT node

use dashmap::{DashMap, DashSet};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::features::attribute_graph::domain::{
    Edge, EdgeType, GraphSnapshot, Node, NodeId, NodeKey, NodeType, Origin,
};
use crate::shared::constants::graph::ROOT_LABEL;

#[derive(Default)]
pub struct AttributeGraph {
    nodes: DashMap<NodeKey, Arc<Node>>,
    by_id: DashMap<NodeId, Arc<Node>>,
    next_id: AtomicU32,
    edges: Mutex<Vec<Edge>>,
    containment: DashSet<(NodeId, NodeId)>,
    root: OnceCell<Arc<Node>>,
}

impl AttributeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    // ============================================================
    // Registration
    // ============================================================

    /// Node registered under `(origin, label, node_type)`
    ///
    /// The first registration fixes the node's id and `sig`; later calls with
    /// the same key return that node unchanged.
    pub fn get_or_create_node(
        &self,
        origin: Origin,
        label: impl Into<String>,
        node_type: NodeType,
        sig: Option<String>,
    ) -> Arc<Node> {
        let key = NodeKey::new(origin, label, node_type);

        // Fast path: already registered
        if let Some(existing) = self.nodes.get(&key) {
            return Arc::clone(existing.value());
        }

        // by_id is filled while the key's shard is still locked, so a node
        // visible by key is always visible by id
        let entry = self.nodes.entry(key.clone()).or_insert_with(|| {
            let id = NodeId(self.next_id.fetch_add(1, Ordering::Relaxed));
            let node = Arc::new(Node { id, key, sig });
            self.by_id.insert(id, Arc::clone(&node));
            node
        });
        Arc::clone(entry.value())
    }

    /// Append an edge; a CONTAINS relation is only recorded once
    pub fn create_edge(&self, from: &Node, to: &Node, edge_type: EdgeType) -> Edge {
        let edge = Edge {
            from: from.id,
            to: to.id,
            edge_type,
        };
        if edge_type == EdgeType::Contains && !self.containment.insert((from.id, to.id)) {
            return edge;
        }
        self.edges.lock().push(edge);
        edge
    }

    /// Singleton ROOT node
    pub fn gen_default_root(&self) -> Arc<Node> {
        Arc::clone(self.root.get_or_init(|| {
            self.get_or_create_node(Origin::Root, ROOT_LABEL, NodeType::Root, None)
        }))
    }

    // ============================================================
    // Queries
    // ============================================================

    pub fn lookup(&self, key: &NodeKey) -> Option<Arc<Node>> {
        self.nodes.get(key).map(|n| Arc::clone(n.value()))
    }

    pub fn node(&self, id: NodeId) -> Option<Arc<Node>> {
        self.by_id.get(&id).map(|n| Arc::clone(n.value()))
    }

    /// All nodes ordered by id
    pub fn nodes(&self) -> Vec<Arc<Node>> {
        let mut nodes: Vec<Arc<Node>> = self.nodes.iter().map(|n| Arc::clone(n.value())).collect();
        nodes.sort_by_key(|n| n.id);
        nodes
    }

    pub fn nodes_by_type(&self, node_type: NodeType) -> Vec<Arc<Node>> {
        let mut nodes: Vec<Arc<Node>> = self
            .nodes
            .iter()
            .filter(|n| n.key().node_type == node_type)
            .map(|n| Arc::clone(n.value()))
            .collect();
        nodes.sort_by_key(|n| n.id);
        nodes
    }

    /// Edges in registration order
    pub fn edges(&self) -> Vec<Edge> {
        self.edges.lock().clone()
    }

    pub fn edges_from(&self, from: NodeId) -> Vec<Edge> {
        self.edges
            .lock()
            .iter()
            .filter(|e| e.from == from)
            .copied()
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.lock().len()
    }

    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self.nodes().iter().map(|n| n.as_ref().clone()).collect(),
            edges: self.edges(),
        }
    }
}
