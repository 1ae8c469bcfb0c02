//! Core graph types: nodes, handles and label rules.

use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};

/// Stable handle of a node: its insertion index, dense from 0.
pub type NodeId = usize;

/// Longest accepted label, in bytes.
pub const MAX_LABEL_LEN: usize = 40;

/// A labeled node owned by a graph.
///
/// Nodes are only created by [`Graph::insert_node`](super::Graph::insert_node);
/// callers read them through the accessors below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) label: String,
    pub(crate) seen: bool,
}

impl Node {
    pub(crate) fn new(id: NodeId, label: &str) -> Self {
        Self {
            id,
            label: label.to_owned(),
            seen: false,
        }
    }

    /// Insertion index of this node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The node's unique label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Transient traversal flag.
    pub fn is_seen(&self) -> bool {
        self.seen
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// Check that `label` is 1..=[`MAX_LABEL_LEN`] bytes with no whitespace or
/// control characters.
///
/// # Errors
///
/// Returns [`GraphError::InvalidLabel`] describing the first rule broken.
pub fn validate_label(label: &str) -> Result<()> {
    let reason = if label.is_empty() {
        "label is empty".to_string()
    } else if label.len() > MAX_LABEL_LEN {
        format!("label is {} bytes, limit is {MAX_LABEL_LEN}", label.len())
    } else if label.chars().any(|c| c.is_whitespace() || c.is_control()) {
        "label contains whitespace or control characters".to_string()
    } else {
        return Ok(());
    };

    Err(GraphError::InvalidLabel {
        label: label.to_string(),
        reason,
    })
}
