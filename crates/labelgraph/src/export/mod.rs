//! Export module for inspecting graphs in external tools.
//!
//! Supports:
//! - **DOT**: Graphviz visualization
//! - **JSON**: D3.js and other web-based tools

pub mod dot;
pub mod json;

pub use dot::{export_dot, DotOptions};
pub use json::export_json;
