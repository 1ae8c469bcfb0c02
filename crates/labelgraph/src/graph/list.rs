//! Adjacency-list backend.
//!
//! Space grows with what is inserted rather than with the declared capacity.
//! Each node owns the handles of its out-neighbours; the handles never own
//! the nodes they point at.

use super::types::{validate_label, Node, NodeId};
use super::Graph;
use crate::error::{GraphError, Result};
use log::{debug, trace, warn};

#[derive(Debug, Clone)]
struct Entry {
    node: Node,
    // In insertion order, no duplicates
    targets: Vec<NodeId>,
}

/// Graph backed by one neighbour list per node.
///
/// Repeated edge inserts are de-duplicated, so the edge relation is a set
/// exactly as in [`MatrixGraph`](super::MatrixGraph).
#[derive(Debug, Clone)]
pub struct ListGraph {
    capacity: usize,
    entries: Vec<Entry>,
    edge_count: usize,
}

impl ListGraph {
    /// Create an empty graph able to hold `capacity` nodes.
    pub fn new(capacity: usize) -> Self {
        debug!("Created list graph: capacity={capacity}");
        Self {
            capacity,
            entries: Vec::new(),
            edge_count: 0,
        }
    }

    #[cfg(test)]
    fn out_degree(&self, id: NodeId) -> usize {
        self.entries.get(id).map_or(0, |entry| entry.targets.len())
    }
}

impl Graph for ListGraph {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn node_count(&self) -> usize {
        self.entries.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn insert_node(&mut self, label: &str) -> Result<NodeId> {
        validate_label(label)?;
        if let Some(existing) = self.find_node(label) {
            trace!("Node '{label}' already present at index {}", existing.id());
            return Ok(existing.id());
        }
        if self.entries.len() >= self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
                label: label.to_string(),
            });
        }

        let id = self.entries.len();
        self.entries.push(Entry {
            node: Node::new(id, label),
            targets: Vec::new(),
        });
        debug!("Inserted node '{label}' at index {id}");
        Ok(id)
    }

    fn find_node(&self, label: &str) -> Option<&Node> {
        self.entries
            .iter()
            .map(|entry| &entry.node)
            .find(|node| node.label == label)
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.entries.get(id).map(|entry| &entry.node)
    }

    fn insert_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        if to >= self.entries.len() {
            return Err(GraphError::node_not_found(to));
        }
        let entry = self
            .entries
            .get_mut(from)
            .ok_or_else(|| GraphError::node_not_found(from))?;

        if entry.targets.contains(&to) {
            trace!("Edge {from} -> {to} already present");
            return Ok(());
        }
        entry.targets.push(to);
        self.edge_count += 1;
        trace!("Inserted edge {from} -> {to}");
        Ok(())
    }

    fn neighbours(&self, id: NodeId) -> Vec<NodeId> {
        // Most recently inserted edge first
        self.entries
            .get(id)
            .map(|entry| entry.targets.iter().rev().copied().collect())
            .unwrap_or_default()
    }

    fn set_seen(&mut self, id: NodeId, seen: bool) {
        match self.entries.get_mut(id) {
            Some(entry) => entry.node.seen = seen,
            None => warn!("set_seen on non-resident node {id} ignored"),
        }
    }

    fn reset_seen(&mut self) {
        for entry in &mut self.entries {
            entry.node.seen = false;
        }
    }
}
