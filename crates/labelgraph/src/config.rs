//! Loader configuration.

use crate::error::{GraphError, Result};
use crate::graph::Backend;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the integer on a map's first significant line becomes a node capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapacityPolicy {
    /// The integer is the node capacity
    #[default]
    Nodes,
    /// The integer is the number of edge lines; each may add two nodes
    Edges,
}

impl CapacityPolicy {
    /// Node capacity implied by the `declared` integer.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidCapacity`] for negative values or values
    /// that do not fit in `usize`.
    pub fn node_capacity(self, declared: i64) -> Result<usize> {
        let invalid = || GraphError::InvalidCapacity {
            requested: i128::from(declared),
        };
        let declared = usize::try_from(declared).map_err(|_| invalid())?;
        match self {
            CapacityPolicy::Nodes => Ok(declared),
            CapacityPolicy::Edges => declared.checked_mul(2).ok_or_else(invalid),
        }
    }
}

impl std::fmt::Display for CapacityPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CapacityPolicy::Nodes => write!(f, "nodes"),
            CapacityPolicy::Edges => write!(f, "edges"),
        }
    }
}

impl FromStr for CapacityPolicy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nodes" => Ok(CapacityPolicy::Nodes),
            "edges" => Ok(CapacityPolicy::Edges),
            other => Err(GraphError::InvalidOption {
                message: format!("unknown capacity policy '{other}', expected 'nodes' or 'edges'"),
            }),
        }
    }
}

/// Configuration for building a graph from a map description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Storage backend of the resulting graph
    pub backend: Backend,

    /// Interpretation of the declared capacity line
    pub capacity_policy: CapacityPolicy,
}

impl LoaderConfig {
    /// Use the given backend
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Use the given capacity policy
    pub fn with_capacity_policy(mut self, policy: CapacityPolicy) -> Self {
        self.capacity_policy = policy;
        self
    }
}
