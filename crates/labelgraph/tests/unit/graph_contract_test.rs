//! Unit tests for the Graph contract, run against every backend.

use labelgraph::{Backend, Graph, GraphError};

const BACKENDS: [Backend; 2] = [Backend::Matrix, Backend::List];

fn graph_with_nodes(backend: Backend, capacity: usize, labels: &[&str]) -> Box<dyn Graph> {
    let mut graph = backend.create(capacity).unwrap();
    for label in labels {
        graph.insert_node(label).unwrap();
    }
    graph
}

#[test]
fn test_empty_graph() {
    for backend in BACKENDS {
        let graph = backend.create(10).unwrap();
        assert!(graph.is_empty(), "{backend}");
        assert!(!graph.has_edges(), "{backend}");
        assert!(graph.find_node("X").is_none(), "{backend}");
        assert_eq!(graph.node_count(), 0);
    }
}

#[test]
fn test_insert_then_find() {
    for backend in BACKENDS {
        let mut graph = backend.create(3).unwrap();
        let id = graph.insert_node("UME").unwrap();

        let node = graph.find_node("UME").unwrap();
        assert_eq!(node.label(), "UME");
        assert_eq!(node.id(), id);
        assert!(!node.is_seen());
        assert!(!graph.is_empty());
    }
}

#[test]
fn test_insert_is_idempotent() {
    for backend in BACKENDS {
        let mut graph = backend.create(3).unwrap();
        let first = graph.insert_node("A").unwrap();
        let second = graph.insert_node("A").unwrap();

        assert_eq!(first, second);
        assert_eq!(graph.node_count(), 1);
    }
}

#[test]
fn test_indices_dense_in_insertion_order() {
    for backend in BACKENDS {
        let graph = graph_with_nodes(backend, 4, &["C", "A", "B"]);
        assert_eq!(graph.find_node("C").unwrap().id(), 0);
        assert_eq!(graph.find_node("A").unwrap().id(), 1);
        assert_eq!(graph.find_node("B").unwrap().id(), 2);
        assert_eq!(graph.node(1).unwrap().label(), "A");
        assert!(graph.node(3).is_none());
    }
}

#[test]
fn test_label_lookup_is_byte_exact() {
    for backend in BACKENDS {
        let graph = graph_with_nodes(backend, 2, &["ume"]);
        assert!(graph.find_node("UME").is_none());
        assert!(graph.find_node("ume").is_some());
    }
}

#[test]
fn test_invalid_label_rejected() {
    for backend in BACKENDS {
        let mut graph = backend.create(2).unwrap();
        let err = graph.insert_node("two words").unwrap_err();
        assert!(matches!(err, GraphError::InvalidLabel { .. }));
        assert!(graph.is_empty());
    }
}

#[test]
fn test_capacity_exceeded_leaves_graph_unchanged() {
    for backend in BACKENDS {
        let mut graph = graph_with_nodes(backend, 5, &["A", "B", "C", "D", "E"]);

        let err = graph.insert_node("F").unwrap_err();
        assert!(err.is_capacity_exceeded(), "{backend}");
        assert_eq!(graph.node_count(), 5);
        assert!(graph.find_node("F").is_none());

        // Re-inserting a resident label is still fine when full
        assert_eq!(graph.insert_node("C").unwrap(), 2);
    }
}

#[test]
fn test_insert_edge_then_neighbours() {
    for backend in BACKENDS {
        let mut graph = graph_with_nodes(backend, 3, &["A", "B"]);
        let a = graph.find_node("A").unwrap().id();
        let b = graph.find_node("B").unwrap().id();

        graph.insert_edge(a, b).unwrap();

        assert!(graph.has_edges());
        assert_eq!(graph.neighbours(a), vec![b]);
        assert!(graph.neighbours(b).is_empty());
    }
}

#[test]
fn test_insert_edge_with_unknown_endpoint() {
    for backend in BACKENDS {
        let mut graph = graph_with_nodes(backend, 3, &["A", "B"]);
        let a = graph.find_node("A").unwrap().id();
        let b = graph.find_node("B").unwrap().id();
        graph.insert_edge(a, b).unwrap();

        let err = graph.insert_edge(a, 2).unwrap_err();
        assert!(matches!(err, GraphError::NodeNotFound { .. }));
        let err = graph.insert_edge(9, a).unwrap_err();
        assert!(matches!(err, GraphError::NodeNotFound { .. }));

        assert_eq!(graph.edge_count(), 1, "{backend}");
        assert_eq!(graph.neighbours(a), vec![b]);
        assert!(graph.neighbours(b).is_empty());
    }
}

#[test]
fn test_duplicate_edge_is_idempotent() {
    for backend in BACKENDS {
        let mut graph = graph_with_nodes(backend, 2, &["A", "B"]);
        graph.insert_edge_by_label("A", "B").unwrap();
        graph.insert_edge_by_label("A", "B").unwrap();

        assert_eq!(graph.edge_count(), 1, "{backend}");
        assert_eq!(graph.neighbours(0), vec![1]);
    }
}

#[test]
fn test_self_loop_counts_as_edge() {
    for backend in BACKENDS {
        let mut graph = graph_with_nodes(backend, 1, &["A"]);
        graph.insert_edge(0, 0).unwrap();
        assert!(graph.has_edges());
        assert_eq!(graph.neighbours(0), vec![0]);
    }
}

#[test]
fn test_neighbours_same_set_across_backends() {
    let mut sets = Vec::new();
    for backend in BACKENDS {
        let mut graph = graph_with_nodes(backend, 4, &["A", "B", "C", "D"]);
        graph.insert_edge_by_label("A", "C").unwrap();
        graph.insert_edge_by_label("A", "D").unwrap();
        graph.insert_edge_by_label("A", "B").unwrap();

        let mut neighbours = graph.neighbours(0);
        neighbours.sort_unstable();
        sets.push(neighbours);
    }
    assert_eq!(sets[0], vec![1, 2, 3]);
    assert_eq!(sets[0], sets[1]);
}

#[test]
fn test_seen_flags() {
    for backend in BACKENDS {
        let mut graph = graph_with_nodes(backend, 3, &["A", "B", "C"]);

        graph.set_seen(0, true);
        graph.set_seen(2, true);
        assert!(graph.is_seen(0));
        assert!(!graph.is_seen(1));
        assert!(graph.find_node("C").unwrap().is_seen());

        graph.set_seen(2, false);
        assert!(!graph.is_seen(2));

        // Non-resident handles are ignored
        graph.set_seen(7, true);
        assert!(!graph.is_seen(7));
    }
}

#[test]
fn test_reset_seen_clears_all() {
    for backend in BACKENDS {
        let mut graph = graph_with_nodes(backend, 4, &["A", "B", "C", "D"]);
        for id in 0..4 {
            graph.set_seen(id, id % 2 == 0);
        }

        graph.reset_seen();

        for id in 0..graph.node_count() {
            assert!(!graph.is_seen(id));
        }
    }
}

#[test]
fn test_reset_seen_on_empty_graph() {
    for backend in BACKENDS {
        let mut graph = backend.create(0).unwrap();
        graph.reset_seen();
        assert!(graph.is_empty());
    }
}
