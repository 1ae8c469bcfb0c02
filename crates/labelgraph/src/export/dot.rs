//! DOT format export for Graphviz visualization.

use crate::graph::Graph;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Fill nodes whose seen flag is set, e.g. to show what a search touched
    pub highlight_seen: bool,
    /// Fill color for seen nodes (hex color code)
    pub seen_color: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            rankdir: "LR".to_string(),
            highlight_seen: false,
            seen_color: "#90CAF9".to_string(),
        }
    }
}

/// Export graph to Graphviz DOT format.
///
/// Nodes are emitted in index order as `n<index>` with the label as display
/// text; edges follow in the backend's neighbour order.
pub fn export_dot(graph: &dyn Graph, options: &DotOptions) -> String {
    let mut output = String::new();

    output.push_str("digraph labelgraph {\n");
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str("    node [shape=ellipse];\n\n");

    for id in 0..graph.node_count() {
        let Some(node) = graph.node(id) else {
            continue;
        };
        let label = escape_dot_label(node.label());
        if options.highlight_seen && node.is_seen() {
            output.push_str(&format!(
                "    n{id} [label=\"{label}\", style=filled, fillcolor=\"{}\"];\n",
                options.seen_color
            ));
        } else {
            output.push_str(&format!("    n{id} [label=\"{label}\"];\n"));
        }
    }

    output.push('\n');

    for from in 0..graph.node_count() {
        for to in graph.neighbours(from) {
            output.push_str(&format!("    n{from} -> n{to};\n"));
        }
    }

    output.push_str("}\n");
    output
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
