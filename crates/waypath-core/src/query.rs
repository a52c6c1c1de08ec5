//! Outward query entry points
//!
//! The boundary a hosting surface (CLI handler, HTTP handler) calls. Both
//! entry points take raw node data rather than `Node` wrappers, so the
//! wrapper type never crosses the algorithm boundary, and both report "no
//! path" as `Ok(None)` so callers can tell it from an error without
//! inspecting error values.

use std::fmt;
use std::hash::Hash;

use crate::error::Result;
use crate::graph::path::Path;
use crate::graph::types::{Cost, Graph};
use crate::graph::{bfs, dijkstra};

/// Minimum-hop path between two data values, every hop costing one unit.
pub fn find_path_unweighted<D, L>(
    graph: &Graph<D, L>,
    start: &D,
    end: &D,
) -> Result<Option<Path<D>>>
where
    D: Eq + Ord + Hash + Clone + fmt::Debug,
    L: Eq + Ord + Hash + Clone,
{
    let Some(edges) = bfs::shortest_path(graph, start, end)? else {
        return Ok(None);
    };

    let mut path = Path::new(start.clone());
    for edge in &edges {
        path = path.extend(edge.child().data().clone(), Cost::new(1.0));
    }
    Ok(Some(path))
}

/// Minimum-total-cost path between two data values.
pub fn find_path_weighted<D>(graph: &Graph<D, Cost>, start: &D, end: &D) -> Result<Option<Path<D>>>
where
    D: Eq + Hash + Clone + fmt::Debug,
{
    dijkstra::min_cost_path(graph, start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Node;

    fn simple_graph() -> Graph<String, String> {
        let mut graph = Graph::new();
        for name in ["A", "B", "C"] {
            graph.add_node(Node::new(name.to_string()));
        }
        graph
            .add_edge(
                Node::new("A".to_string()),
                Node::new("B".to_string()),
                "x".to_string(),
            )
            .unwrap();
        graph
            .add_edge(
                Node::new("B".to_string()),
                Node::new("C".to_string()),
                "y".to_string(),
            )
            .unwrap();
        graph
    }

    #[test]
    fn test_unweighted_path_costs_one_per_hop() {
        let graph = simple_graph();
        let path = find_path_unweighted(&graph, &"A".to_string(), &"C".to_string())
            .unwrap()
            .unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.total_cost(), Cost::new(2.0));
        assert_eq!(path.end(), "C");
    }

    #[test]
    fn test_unweighted_no_path_is_none() {
        let graph = simple_graph();
        let result = find_path_unweighted(&graph, &"C".to_string(), &"A".to_string()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_weighted_delegates_to_dijkstra() {
        let mut graph: Graph<String, Cost> = Graph::new();
        for name in ["A", "B"] {
            graph.add_node(Node::new(name.to_string()));
        }
        graph
            .add_edge(
                Node::new("A".to_string()),
                Node::new("B".to_string()),
                Cost::new(2.5),
            )
            .unwrap();

        let path = find_path_weighted(&graph, &"A".to_string(), &"B".to_string())
            .unwrap()
            .unwrap();
        assert_eq!(path.total_cost(), Cost::new(2.5));
    }
}
