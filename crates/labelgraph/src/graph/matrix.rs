//! Adjacency-matrix backend.
//!
//! The presence table is `capacity × capacity` and allocated once, so edge
//! insert and edge test are a single index regardless of how many nodes are
//! resident. Space is paid up front: O(capacity²) even for a sparse graph.

use super::types::{validate_label, Node, NodeId};
use super::Graph;
use crate::error::{GraphError, Result};
use log::{debug, trace, warn};

/// Largest capacity the matrix backend accepts; the table holds its square.
pub const MAX_MATRIX_CAPACITY: usize = 1 << 14;

/// Graph backed by a dense presence table indexed by insertion order.
#[derive(Debug, Clone)]
pub struct MatrixGraph {
    capacity: usize,
    // Index map: position == NodeId
    nodes: Vec<Node>,
    // Row-major, cell (from, to) at from * capacity + to
    cells: Vec<bool>,
    edge_count: usize,
}

impl MatrixGraph {
    /// Create an empty graph able to hold `capacity` nodes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidCapacity`] if `capacity` is above
    /// [`MAX_MATRIX_CAPACITY`].
    pub fn new(capacity: usize) -> Result<Self> {
        let invalid = || GraphError::InvalidCapacity {
            requested: capacity as i128,
        };
        if capacity > MAX_MATRIX_CAPACITY {
            return Err(invalid());
        }
        let size = capacity * capacity;
        // Zeroed allocation; pages are touched only when edges land on them
        let cells = vec![false; size];

        debug!("Created matrix graph: capacity={capacity}, cells={size}");
        Ok(Self {
            capacity,
            nodes: Vec::with_capacity(capacity),
            cells,
            edge_count: 0,
        })
    }

    fn cell(&self, from: NodeId, to: NodeId) -> usize {
        from * self.capacity + to
    }

    fn is_resident(&self, id: NodeId) -> bool {
        id < self.nodes.len()
    }
}

impl Graph for MatrixGraph {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
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
        if self.nodes.len() == self.capacity {
            return Err(GraphError::CapacityExceeded {
                capacity: self.capacity,
                label: label.to_string(),
            });
        }

        let id = self.nodes.len();
        self.nodes.push(Node::new(id, label));
        debug!("Inserted node '{label}' at index {id}");
        Ok(id)
    }

    fn find_node(&self, label: &str) -> Option<&Node> {
        self.nodes.iter().find(|node| node.label == label)
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    fn insert_edge(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        for id in [from, to] {
            if !self.is_resident(id) {
                return Err(GraphError::node_not_found(id));
            }
        }

        let cell = self.cell(from, to);
        if !self.cells[cell] {
            self.cells[cell] = true;
            self.edge_count += 1;
            trace!("Inserted edge {from} -> {to}");
        }
        Ok(())
    }

    fn neighbours(&self, id: NodeId) -> Vec<NodeId> {
        if !self.is_resident(id) {
            return Vec::new();
        }
        let row = self.cell(id, 0);
        (0..self.nodes.len())
            .filter(|&to| self.cells[row + to])
            .collect()
    }

    fn set_seen(&mut self, id: NodeId, seen: bool) {
        match self.nodes.get_mut(id) {
            Some(node) => node.seen = seen,
            None => warn!("set_seen on non-resident node {id} ignored"),
        }
    }

    fn reset_seen(&mut self) {
        for node in &mut self.nodes {
            node.seen = false;
        }
    }
}
