//! Map description loader.
//!
//! A map description is line oriented:
//!
//! ```text
//! # comment lines and blank lines are skipped
//! 3            <- declared capacity, see CapacityPolicy
//! UME BMA      <- directed edge UME -> BMA
//! BMA MMX
//! MMX GOT
//! ```
//!
//! Both labels of an edge line are inserted as nodes if new, then the edge is
//! recorded. Tokens after the second label are ignored.

use crate::config::LoaderConfig;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId};
use log::{debug, info, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Builds graphs from map descriptions.
#[derive(Debug, Clone, Default)]
pub struct MapLoader {
    config: LoaderConfig,
}

impl MapLoader {
    /// Create a loader with the given configuration.
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// The loader's configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load a map description held in memory.
    ///
    /// # Errors
    ///
    /// See [`MapLoader::load_reader`].
    pub fn load_str(&self, text: &str) -> Result<Box<dyn Graph>> {
        self.load_reader(text.as_bytes())
    }

    /// Load a map description from a buffered reader.
    ///
    /// # Errors
    ///
    /// - [`GraphError::EmptyMap`] if there is no capacity line
    /// - [`GraphError::InvalidCapacity`] if the declared capacity is negative
    /// - [`GraphError::MapParse`] for a malformed line or an invalid label
    /// - [`GraphError::CapacityExceeded`] if the edges name more nodes than declared
    /// - [`GraphError::Io`] if reading fails
    pub fn load_reader<R: BufRead>(&self, reader: R) -> Result<Box<dyn Graph>> {
        self.load_lines(reader, Path::new("<stream>"))
    }

    /// Load a map description from a file.
    ///
    /// # Errors
    ///
    /// Same as [`MapLoader::load_reader`]; opening the file may also fail with
    /// [`GraphError::Io`].
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Box<dyn Graph>> {
        let path = path.as_ref();
        info!("Loading map from {}", path.display());
        let file = File::open(path).map_err(|source| GraphError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_lines(BufReader::new(file), path)
    }

    fn load_lines<R: BufRead>(&self, reader: R, origin: &Path) -> Result<Box<dyn Graph>> {
        let mut graph: Option<Box<dyn Graph>> = None;

        for (index, line) in reader.lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|source| GraphError::Io {
                path: origin.to_path_buf(),
                source,
            })?;
            let Some(content) = significant(&line) else {
                continue;
            };

            match graph.as_mut() {
                None => graph = Some(self.create_graph(content, line_no)?),
                Some(graph) => add_edge_line(graph.as_mut(), content, line_no)?,
            }
        }

        let graph = graph.ok_or(GraphError::EmptyMap)?;
        debug!(
            "Loaded map: {} nodes, {} edges, backend={}",
            graph.node_count(),
            graph.edge_count(),
            self.config.backend
        );
        Ok(graph)
    }

    fn create_graph(&self, content: &str, line_no: usize) -> Result<Box<dyn Graph>> {
        let token = content.split_whitespace().next().unwrap_or_default();
        let declared: i64 = token.parse().map_err(|_| GraphError::MapParse {
            line: line_no,
            message: format!("expected a capacity integer, found '{token}'"),
        })?;
        let capacity = self.config.capacity_policy.node_capacity(declared)?;
        debug!(
            "Declared capacity {declared} ({}) -> {capacity} nodes",
            self.config.capacity_policy
        );
        self.config.backend.create(capacity)
    }
}

/// Content of a line that carries data, or `None` for blank and comment lines.
fn significant(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        None
    } else {
        Some(trimmed)
    }
}

fn add_edge_line(graph: &mut dyn Graph, content: &str, line_no: usize) -> Result<()> {
    let mut tokens = content.split_whitespace();
    let (Some(src), Some(dst)) = (tokens.next(), tokens.next()) else {
        return Err(GraphError::MapParse {
            line: line_no,
            message: format!("expected two labels, found '{content}'"),
        });
    };
    if tokens.next().is_some() {
        warn!("Line {line_no}: ignoring tokens after '{src} {dst}'");
    }

    let from = insert_on_line(graph, src, line_no)?;
    let to = insert_on_line(graph, dst, line_no)?;
    graph.insert_edge(from, to)
}

fn insert_on_line(graph: &mut dyn Graph, label: &str, line_no: usize) -> Result<NodeId> {
    graph.insert_node(label).map_err(|err| match err {
        GraphError::InvalidLabel { .. } => GraphError::MapParse {
            line: line_no,
            message: err.to_string(),
        },
        other => other,
    })
}
