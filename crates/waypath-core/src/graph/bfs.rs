//! Unweighted shortest-path search
//!
//! Breadth-first search producing the minimum-hop edge sequence between two
//! nodes. When several equally short paths exist the result is
//! deterministic: a node's outgoing edges are expanded sorted by child
//! datum, then by label.

use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::hash::Hash;

use crate::error::{Result, WaypathError};
use crate::graph::types::{Edge, Graph, Node};

/// Find a minimum-hop path from `start` to `end`.
///
/// Returns the edge sequence of the first shortest path discovered under
/// child-then-label ordering, `Ok(None)` when `end` is unreachable, and an
/// error when either endpoint is not a member of the graph. `start == end`
/// yields the empty sequence without traversing any edge, even in the
/// presence of a self-loop.
#[tracing::instrument(skip(graph), fields(start = ?start, end = ?end))]
pub fn shortest_path<D, L>(
    graph: &Graph<D, L>,
    start: &D,
    end: &D,
) -> Result<Option<Vec<Edge<D, L>>>>
where
    D: Eq + Ord + Hash + Clone + fmt::Debug,
    L: Eq + Ord + Hash + Clone,
{
    let start = Node::new(start.clone());
    let end = Node::new(end.clone());

    if !graph.contains_node(&start) {
        return Err(WaypathError::missing_node(start.data()));
    }
    if !graph.contains_node(&end) {
        return Err(WaypathError::missing_node(end.data()));
    }

    // Per discovered node, the edge sequence of the first (hence shortest)
    // path that reached it. Key presence doubles as the visited mark, set
    // on enqueue so no node is enqueued twice.
    let mut paths: HashMap<Node<D>, Vec<Edge<D, L>>> = HashMap::new();
    let mut queue: VecDeque<Node<D>> = VecDeque::new();

    paths.insert(start.clone(), Vec::new());
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            return Ok(paths.remove(&current));
        }

        let current_path = paths.get(&current).cloned().unwrap_or_default();

        let mut edges: Vec<&Edge<D, L>> = graph.children(&current).collect();
        edges.sort_by(|a, b| {
            a.child()
                .data()
                .cmp(b.child().data())
                .then_with(|| a.label().cmp(b.label()))
        });

        for edge in edges {
            let child = edge.child();
            if paths.contains_key(child) {
                continue;
            }
            // Copy-on-extend: the child's recorded path must never alias
            // the parent's.
            let mut extended = current_path.clone();
            extended.push(edge.clone());
            paths.insert(child.clone(), extended);
            queue.push_back(child.clone());
        }
    }

    Ok(None)
}
