//! # labelgraph
//!
//! A bounded, labeled, directed graph with two interchangeable storage
//! backends and breadth-first reachability on top.
//!
//! ## Core Principles
//!
//! - **One contract, two backends**: [`MatrixGraph`] and [`ListGraph`] both
//!   implement [`Graph`]; client code never names a backend
//! - **Declared capacity**: a graph never holds more nodes than it was created for
//! - **Handles, not pointers**: nodes live in the graph and are addressed by [`NodeId`]
//! - **Errors, not exits**: capacity violations are returned to the caller,
//!   who decides whether they are fatal
//!
//! ## Architecture
//!
//! ```text
//! is-connected (CLI glue)
//!     ↓
//! Map loader / Query session
//!     ↓
//! BFS search (algorithms)
//!     ↓
//! Graph contract
//!     ↓
//! Backend (matrix, list)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use labelgraph::{query, Backend, LoaderConfig, MapLoader};
//!
//! let loader = MapLoader::new(LoaderConfig::default().with_backend(Backend::Matrix));
//! let mut graph = loader.load_str("3\nUME BMA\nBMA GOT\n").unwrap();
//!
//! let outcome = query::check(graph.as_mut(), "UME", "GOT").unwrap();
//! assert!(outcome.is_connected());
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod map;
pub mod query;

// Re-export main types
pub use config::{CapacityPolicy, LoaderConfig};
pub use error::{GraphError, Result};
pub use graph::{
    algorithms, validate_label, Backend, Graph, ListGraph, MatrixGraph, Node, NodeId,
    MAX_LABEL_LEN, MAX_MATRIX_CAPACITY,
};
pub use map::MapLoader;
pub use query::{QueryCommand, QueryOutcome};
