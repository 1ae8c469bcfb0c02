//! Error types for labelgraph operations.
//!
//! All fallible operations return [`Result<T>`]. Only structural misuse is an
//! error here; "no path" is an ordinary `false`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for labelgraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all graph, loader and export operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Inserting a new label into a graph that already holds `capacity` nodes.
    ///
    /// The graph is left unchanged. Hosts usually treat this as fatal since
    /// the capacity was declared up front.
    #[error("Capacity exceeded: cannot insert '{label}', graph holds at most {capacity} nodes")]
    CapacityExceeded {
        /// Declared node capacity
        capacity: usize,
        /// Label that did not fit
        label: String,
    },

    /// Capacity that cannot back a graph (negative or too large to allocate).
    #[error("Invalid capacity: {requested}")]
    InvalidCapacity {
        /// The rejected value as given by the caller
        requested: i128,
    },

    /// Label that is empty, too long, or contains whitespace/control characters.
    #[error("Invalid label '{label}': {reason}")]
    InvalidLabel {
        /// Offending label
        label: String,
        /// Why it was rejected
        reason: String,
    },

    /// Node handle or label that does not belong to the graph.
    #[error("Node not found: {node}")]
    NodeNotFound {
        /// Label or handle of the missing node
        node: String,
    },

    /// Malformed line in a map description.
    #[error("Map parse error on line {line}: {message}")]
    MapParse {
        /// 1-based line number
        line: usize,
        /// What was wrong with it
        message: String,
    },

    /// Map description without a capacity line.
    #[error("Map description is empty: expected a capacity line")]
    EmptyMap,

    /// Failed to open or read a map file.
    #[error("IO error reading {path}: {source}")]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Serialization error during export.
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Unrecognized option value (backend name, capacity policy, ...).
    #[error("Invalid option: {message}")]
    InvalidOption {
        /// Description of what went wrong
        message: String,
    },
}

impl GraphError {
    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    pub(crate) fn node_not_found(node: impl ToString) -> Self {
        Self::NodeNotFound {
            node: node.to_string(),
        }
    }

    /// Whether this error is the capacity violation hosts are expected to abort on.
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}
