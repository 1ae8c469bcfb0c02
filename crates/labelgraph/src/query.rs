//! Connectivity queries by label.
//!
//! [`check`] answers a single "can I get from A to B?" question;
//! [`run_session`] drives the prompt/answer loop used by the `is-connected`
//! binary over any reader and writer.

use crate::error::{GraphError, Result};
use crate::graph::{algorithms, Graph, Node};
use log::debug;
use std::io::{BufRead, Write};

/// Prompt written before each query is read.
pub const PROMPT: &str = "Enter origin and destination (quit to exit): ";

/// Answer to a connectivity query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// The origin label is not in the graph
    UnknownSource(String),
    /// The destination label is not in the graph
    UnknownDestination(String),
    /// A directed path exists
    Connected {
        /// Origin label
        from: String,
        /// Destination label
        to: String,
    },
    /// Both nodes exist but no directed path joins them
    Disconnected {
        /// Origin label
        from: String,
        /// Destination label
        to: String,
    },
}

impl QueryOutcome {
    /// True only for [`QueryOutcome::Connected`].
    pub fn is_connected(&self) -> bool {
        matches!(self, QueryOutcome::Connected { .. })
    }
}

impl std::fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryOutcome::UnknownSource(label) => write!(f, "Unknown origin node: {label}"),
            QueryOutcome::UnknownDestination(label) => {
                write!(f, "Unknown destination node: {label}")
            }
            QueryOutcome::Connected { from, to } => {
                write!(f, "There is a path from {from} to {to}.")
            }
            QueryOutcome::Disconnected { from, to } => {
                write!(f, "There is no path from {from} to {to}.")
            }
        }
    }
}

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryCommand {
    /// Stop the session
    Quit,
    /// Ask whether `from` reaches `to`
    Check {
        /// Origin label
        from: String,
        /// Destination label
        to: String,
    },
    /// Anything else; the line is rejected and the prompt repeated
    Invalid(String),
}

impl QueryCommand {
    /// Interpret a line of input. Surrounding whitespace is ignored.
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some("quit"), None, _) => QueryCommand::Quit,
            (Some(from), Some(to), None) => QueryCommand::Check {
                from: from.to_string(),
                to: to.to_string(),
            },
            _ => QueryCommand::Invalid(line.trim().to_string()),
        }
    }
}

/// Answer whether `from` reaches `to`.
///
/// The origin is looked up first, so when both labels are unknown the origin
/// is reported.
///
/// # Errors
///
/// Propagates errors from [`algorithms::find_path`]; with labels resolved
/// through the same graph none are expected.
pub fn check(graph: &mut dyn Graph, from: &str, to: &str) -> Result<QueryOutcome> {
    let Some(src) = graph.find_node(from).map(Node::id) else {
        return Ok(QueryOutcome::UnknownSource(from.to_string()));
    };
    let Some(dest) = graph.find_node(to).map(Node::id) else {
        return Ok(QueryOutcome::UnknownDestination(to.to_string()));
    };

    let (from, to) = (from.to_string(), to.to_string());
    Ok(if algorithms::find_path(graph, src, dest)? {
        QueryOutcome::Connected { from, to }
    } else {
        QueryOutcome::Disconnected { from, to }
    })
}

/// Run the interactive query loop until `quit` or end of input.
///
/// Writes [`PROMPT`] before every read, one answer line per query, and
/// `Normal exit.` at the end.
///
/// # Returns
///
/// Number of queries answered.
///
/// # Errors
///
/// Returns [`GraphError::Io`] if reading input or writing output fails.
pub fn run_session<R, W>(graph: &mut dyn Graph, input: R, mut output: W) -> Result<usize>
where
    R: BufRead,
    W: Write,
{
    let io_err = |source| GraphError::Io {
        path: "<session>".into(),
        source,
    };
    let mut answered = 0;
    let mut lines = input.lines();

    loop {
        write!(output, "{PROMPT}").map_err(io_err)?;
        output.flush().map_err(io_err)?;

        let Some(line) = lines.next() else {
            writeln!(output).map_err(io_err)?;
            break;
        };
        let line = line.map_err(io_err)?;

        match QueryCommand::parse(&line) {
            QueryCommand::Quit => break,
            QueryCommand::Check { from, to } => {
                let outcome = check(graph, &from, &to)?;
                debug!("Query {from} -> {to}: {outcome:?}");
                writeln!(output, "{outcome}").map_err(io_err)?;
                answered += 1;
            }
            QueryCommand::Invalid(text) => {
                writeln!(output, "Expected two node names or 'quit', got '{text}'")
                    .map_err(io_err)?;
            }
        }
        writeln!(output).map_err(io_err)?;
    }

    writeln!(output, "Normal exit.").map_err(io_err)?;
    Ok(answered)
}
