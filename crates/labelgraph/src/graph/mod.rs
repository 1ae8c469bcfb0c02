//! Graph contract and its storage backends.
//!
//! This module defines the [`Graph`] trait and provides implementations:
//! - [`MatrixGraph`]: dense `capacity × capacity` presence table
//! - [`ListGraph`]: per-node neighbour lists
//!
//! Client code (BFS search, queries, export) depends only on [`Graph`], so
//! either backend can be picked at construction through [`Backend`].
//!
//! ## Design Philosophy
//!
//! - **Bounded**: capacity is fixed at construction and never grows
//! - **Arena handles**: nodes are owned by the graph and addressed by [`NodeId`]
//! - **Fail Fast**: misuse is reported as an error, never as a partial mutation

mod list;
mod matrix;
mod types;
pub mod algorithms;

pub use list::ListGraph;
pub use matrix::{MatrixGraph, MAX_MATRIX_CAPACITY};
pub use types::{validate_label, Node, NodeId, MAX_LABEL_LEN};

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Labeled, bounded, directed graph.
///
/// Semantics are identical across backends except for the order in which
/// [`neighbours`](Graph::neighbours) yields nodes.
pub trait Graph: std::fmt::Debug {
    /// Maximum number of nodes, fixed at construction.
    fn capacity(&self) -> usize;

    /// Number of nodes inserted so far.
    fn node_count(&self) -> usize;

    /// Number of distinct directed edges.
    fn edge_count(&self) -> usize;

    /// True iff no node has been inserted.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// True iff at least one edge exists.
    fn has_edges(&self) -> bool {
        self.edge_count() > 0
    }

    /// Insert a node labeled `label`, or return the existing one.
    ///
    /// A new node gets the next free index and starts unseen.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidLabel`] if the label breaks the label rules
    /// and [`GraphError::CapacityExceeded`] if the label is new but the graph
    /// is full. The graph is unchanged in both cases.
    fn insert_node(&mut self, label: &str) -> Result<NodeId>;

    /// Look up a node by exact label.
    fn find_node(&self, label: &str) -> Option<&Node>;

    /// Get a resident node by handle.
    fn node(&self, id: NodeId) -> Option<&Node>;

    /// Record the directed edge `from → to`. Re-inserting is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if either handle is not resident;
    /// nothing is recorded in that case.
    fn insert_edge(&mut self, from: NodeId, to: NodeId) -> Result<()>;

    /// Nodes reachable from `id` over exactly one edge.
    ///
    /// The returned vector belongs to the caller. Order is backend-defined,
    /// and a non-resident handle has no neighbours.
    fn neighbours(&self, id: NodeId) -> Vec<NodeId>;

    /// Seen flag of `id`; non-resident handles read as unseen.
    fn is_seen(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(Node::is_seen)
    }

    /// Set the seen flag of `id`. Ignored for non-resident handles.
    fn set_seen(&mut self, id: NodeId, seen: bool);

    /// Clear the seen flag on every resident node.
    fn reset_seen(&mut self);

    /// Resolve both labels and record `from → to`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] naming the first unknown label.
    fn insert_edge_by_label(&mut self, from: &str, to: &str) -> Result<()> {
        let from_id = self
            .find_node(from)
            .map(Node::id)
            .ok_or_else(|| GraphError::node_not_found(from))?;
        let to_id = self
            .find_node(to)
            .map(Node::id)
            .ok_or_else(|| GraphError::node_not_found(to))?;
        self.insert_edge(from_id, to_id)
    }
}

/// Storage strategy used to build a [`Graph`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Adjacency matrix, see [`MatrixGraph`]
    Matrix,
    /// Adjacency lists, see [`ListGraph`]
    #[default]
    List,
}

impl Backend {
    /// Create an empty graph of this backend.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidCapacity`] for a matrix capacity above
    /// [`MAX_MATRIX_CAPACITY`].
    pub fn create(self, capacity: usize) -> Result<Box<dyn Graph>> {
        Ok(match self {
            Backend::Matrix => Box::new(MatrixGraph::new(capacity)?),
            Backend::List => Box::new(ListGraph::new(capacity)),
        })
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Backend::Matrix => write!(f, "matrix"),
            Backend::List => write!(f, "list"),
        }
    }
}

impl FromStr for Backend {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "matrix" => Ok(Backend::Matrix),
            "list" => Ok(Backend::List),
            other => Err(GraphError::InvalidOption {
                message: format!("unknown backend '{other}', expected 'matrix' or 'list'"),
            }),
        }
    }
}
