//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts.

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Node};
use serde_json::{json, Value};

/// Export graph to D3.js-compatible JSON format
///
/// # Errors
///
/// Returns [`GraphError::Serialization`] if encoding fails.
pub fn export_json(graph: &dyn Graph) -> Result<String> {
    let mut nodes_array = Vec::with_capacity(graph.node_count());
    let mut links_array = Vec::with_capacity(graph.edge_count());

    for id in 0..graph.node_count() {
        if let Some(node) = graph.node(id) {
            nodes_array.push(node_to_json(node)?);
        }
        for to in graph.neighbours(id) {
            links_array.push(json!({
                "source": id,
                "target": to,
            }));
        }
    }

    let result = json!({
        "capacity": graph.capacity(),
        "nodes": nodes_array,
        "links": links_array,
    });

    serde_json::to_string_pretty(&result)
        .map_err(|e| GraphError::serialization("Failed to serialize graph", Some(e)))
}

/// Convert node to JSON object
fn node_to_json(node: &Node) -> Result<Value> {
    serde_json::to_value(node)
        .map_err(|e| GraphError::serialization("Failed to serialize node", Some(e)))
}
