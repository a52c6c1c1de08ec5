use super::*;
use crate::graph::types::Graph;

/// Build a weighted graph of string nodes from (parent, child, cost)
/// triples, adding every endpoint as a node first.
fn weighted_graph(edges: &[(&str, &str, f64)]) -> Graph<String, Cost> {
    let mut graph = Graph::new();
    for (parent, child, _) in edges {
        graph.add_node(Node::new((*parent).to_string()));
        graph.add_node(Node::new((*child).to_string()));
    }
    for (parent, child, cost) in edges {
        graph
            .add_edge(
                Node::new((*parent).to_string()),
                Node::new((*child).to_string()),
                Cost::new(*cost),
            )
            .unwrap();
    }
    graph
}

fn destinations(path: &Path<String>) -> Vec<&str> {
    path.steps()
        .iter()
        .map(|s| s.destination.as_str())
        .collect()
}

/// Frontier ordering: cost first, push sequence as the tie-break
#[test]
fn test_frontier_entry_ordering() {
    let cheap = FrontierEntry {
        path: Path::new("A".to_string()).extend("B".to_string(), Cost::new(1.0)),
        seq: 2,
    };
    let pricey = FrontierEntry {
        path: Path::new("A".to_string()).extend("C".to_string(), Cost::new(2.0)),
        seq: 1,
    };
    let cheap_later = FrontierEntry {
        path: Path::new("A".to_string()).extend("D".to_string(), Cost::new(1.0)),
        seq: 3,
    };

    assert_eq!(cheap.cmp(&pricey), std::cmp::Ordering::Less);
    assert_eq!(pricey.cmp(&cheap), std::cmp::Ordering::Greater);
    assert_eq!(cheap.cmp(&cheap_later), std::cmp::Ordering::Less);
}

#[test]
fn test_round_trip_scenario() {
    // A->B (1), B->D (1), A->C (5), C->D (1): cost 2 via B beats cost 6
    let graph = weighted_graph(&[
        ("A", "B", 1.0),
        ("B", "D", 1.0),
        ("A", "C", 5.0),
        ("C", "D", 1.0),
    ]);
    let path = min_cost_path(&graph, &"A".to_string(), &"D".to_string())
        .unwrap()
        .unwrap();
    assert_eq!(path.total_cost(), Cost::new(2.0));
    assert_eq!(destinations(&path), vec!["B", "D"]);
}

#[test]
fn test_cheaper_longer_path_wins() {
    let graph = weighted_graph(&[("A", "B", 10.0), ("A", "C", 1.0), ("C", "B", 1.0)]);
    let path = min_cost_path(&graph, &"A".to_string(), &"B".to_string())
        .unwrap()
        .unwrap();
    assert_eq!(path.total_cost(), Cost::new(2.0));
    assert_eq!(destinations(&path), vec!["C", "B"]);
}

#[test]
fn test_start_equals_end_returns_zero_cost_path() {
    let graph = weighted_graph(&[("A", "A", 3.0), ("A", "B", 1.0)]);
    let path = min_cost_path(&graph, &"A".to_string(), &"A".to_string())
        .unwrap()
        .unwrap();
    // The zero-length path, not the self-loop
    assert!(path.is_empty());
    assert_eq!(path.total_cost(), Cost::ZERO);
}

#[test]
fn test_not_found_when_disconnected() {
    let mut graph: Graph<String, Cost> = Graph::new();
    graph.add_node(Node::new("X".to_string()));
    graph.add_node(Node::new("Y".to_string()));

    let result = min_cost_path(&graph, &"X".to_string(), &"Y".to_string()).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_absent_endpoints_are_invalid_arguments() {
    let graph = weighted_graph(&[("A", "B", 1.0)]);
    let err = min_cost_path(&graph, &"Q".to_string(), &"B".to_string()).unwrap_err();
    assert!(matches!(err, WaypathError::MissingNode { .. }));
    let err = min_cost_path(&graph, &"A".to_string(), &"Q".to_string()).unwrap_err();
    assert!(matches!(err, WaypathError::MissingNode { .. }));
}

#[test]
fn test_stale_pops_are_discarded() {
    // B is pushed twice (via A at 5, via C at 2); only the cheap entry
    // may shape the answer
    let graph = weighted_graph(&[
        ("A", "B", 5.0),
        ("A", "C", 1.0),
        ("C", "B", 1.0),
        ("B", "D", 1.0),
    ]);
    let path = min_cost_path(&graph, &"A".to_string(), &"D".to_string())
        .unwrap()
        .unwrap();
    assert_eq!(path.total_cost(), Cost::new(3.0));
    assert_eq!(destinations(&path), vec!["C", "B", "D"]);
}

#[test]
fn test_zero_weight_edges() {
    let graph = weighted_graph(&[("A", "B", 0.0), ("B", "C", 0.0)]);
    let path = min_cost_path(&graph, &"A".to_string(), &"C".to_string())
        .unwrap()
        .unwrap();
    assert_eq!(path.total_cost(), Cost::ZERO);
    assert_eq!(destinations(&path), vec!["B", "C"]);
}

#[test]
fn test_parallel_edges_use_cheapest_label() {
    // Multigraph: two A->B edges with different weights
    let graph = weighted_graph(&[("A", "B", 4.0), ("A", "B", 1.0)]);
    let path = min_cost_path(&graph, &"A".to_string(), &"B".to_string())
        .unwrap()
        .unwrap();
    assert_eq!(path.total_cost(), Cost::new(1.0));
}

#[test]
fn test_fractional_costs_accumulate() {
    let graph = weighted_graph(&[("A", "B", 0.5), ("B", "C", 0.25)]);
    let path = min_cost_path(&graph, &"A".to_string(), &"C".to_string())
        .unwrap()
        .unwrap();
    assert_eq!(path.total_cost(), Cost::new(0.75));
}
