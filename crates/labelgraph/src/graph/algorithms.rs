//! Breadth-first reachability over any [`Graph`] backend.
//!
//! Traversal state lives in the graph's own seen flags. Every search starts by
//! resetting them, and a node is marked seen when it is enqueued, so each node
//! enters the queue at most once: O(V + E) per search.

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Node, NodeId};
use log::{debug, trace};
use std::collections::VecDeque;

/// Is there a directed path of zero or more edges from `src` to `dest`?
///
/// A node always reaches itself. Afterwards the seen flags mark every node
/// the search touched.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`] if either handle is not resident.
///
/// # Example
///
/// ```
/// use labelgraph::{algorithms, Graph, ListGraph};
///
/// # fn example() -> labelgraph::Result<()> {
/// let mut graph = ListGraph::new(3);
/// let a = graph.insert_node("A")?;
/// let b = graph.insert_node("B")?;
/// graph.insert_edge(a, b)?;
///
/// assert!(algorithms::find_path(&mut graph, a, b)?);
/// assert!(!algorithms::find_path(&mut graph, b, a)?);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
pub fn find_path<G: Graph + ?Sized>(graph: &mut G, src: NodeId, dest: NodeId) -> Result<bool> {
    let dest_label = resident_label(graph, dest)?;
    resident_label(graph, src)?;

    let found = traverse(graph, src, Some(&dest_label), |_, _| {});
    debug!("find_path {src} -> {dest}: {found}");
    Ok(found)
}

/// Like [`find_path`], but returns the route found, `src` first and `dest`
/// last.
///
/// BFS discovers nodes by increasing distance, so the route has the fewest
/// edges of any path. `Ok(None)` means there is no path.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`] if either handle is not resident.
pub fn find_route<G: Graph + ?Sized>(
    graph: &mut G,
    src: NodeId,
    dest: NodeId,
) -> Result<Option<Vec<NodeId>>> {
    let dest_label = resident_label(graph, dest)?;
    resident_label(graph, src)?;

    let mut parents: Vec<Option<NodeId>> = vec![None; graph.node_count()];
    let found = traverse(graph, src, Some(&dest_label), |parent, child| {
        if let Some(slot) = parents.get_mut(child) {
            *slot = Some(parent);
        }
    });
    if !found {
        return Ok(None);
    }

    let mut route = vec![dest];
    let mut current = dest;
    while current != src {
        match parents.get(current).copied().flatten() {
            Some(parent) => {
                route.push(parent);
                current = parent;
            }
            None => break,
        }
    }
    route.reverse();
    Ok(Some(route))
}

/// Every node reachable from `src` over one or more edges, in discovery order.
///
/// `src` itself is not part of the result, even when a cycle leads back to it.
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`] if `src` is not resident.
pub fn reachable_from<G: Graph + ?Sized>(graph: &mut G, src: NodeId) -> Result<Vec<NodeId>> {
    resident_label(graph, src)?;

    let mut result = Vec::new();
    traverse(graph, src, None, |_, child| result.push(child));
    Ok(result)
}

/// Core BFS loop. Calls `on_discover(parent, child)` each time a node is
/// first enqueued. Returns true as soon as a node labeled `target` is
/// dequeued.
fn traverse<G, F>(graph: &mut G, src: NodeId, target: Option<&str>, mut on_discover: F) -> bool
where
    G: Graph + ?Sized,
    F: FnMut(NodeId, NodeId),
{
    graph.reset_seen();

    let mut queue = VecDeque::new();
    graph.set_seen(src, true);
    queue.push_back(src);

    while let Some(current) = queue.pop_front() {
        if let Some(label) = target {
            if graph.node(current).map(Node::label) == Some(label) {
                return true;
            }
        }

        for neighbour in graph.neighbours(current) {
            if !graph.is_seen(neighbour) {
                trace!("Discovered {neighbour} from {current}");
                graph.set_seen(neighbour, true);
                on_discover(current, neighbour);
                queue.push_back(neighbour);
            }
        }
    }

    false
}

fn resident_label<G: Graph + ?Sized>(graph: &G, id: NodeId) -> Result<String> {
    graph
        .node(id)
        .map(|node| node.label().to_owned())
        .ok_or_else(|| GraphError::node_not_found(id))
}
