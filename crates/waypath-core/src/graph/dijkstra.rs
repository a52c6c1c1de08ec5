//! Weighted shortest-path search
//!
//! Classic Dijkstra over non-negative edge costs. The frontier holds
//! complete candidate paths ordered by accumulated cost; ties break by
//! insertion sequence so results are stable across runs.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::fmt;
use std::hash::Hash;

use crate::error::{Result, WaypathError};
use crate::graph::path::Path;
use crate::graph::types::{Cost, Graph, Node};

/// Frontier entry: a candidate path plus the sequence number it was pushed
/// with. Ordered by accumulated cost, then by push order.
#[derive(Debug, Clone)]
struct FrontierEntry<D> {
    path: Path<D>,
    seq: u64,
}

impl<D: Clone> FrontierEntry<D> {
    fn cost(&self) -> Cost {
        self.path.total_cost()
    }
}

impl<D: Clone> PartialEq for FrontierEntry<D> {
    fn eq(&self, other: &Self) -> bool {
        self.cost() == other.cost() && self.seq == other.seq
    }
}

impl<D: Clone> Eq for FrontierEntry<D> {}

impl<D: Clone> PartialOrd for FrontierEntry<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Clone> Ord for FrontierEntry<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost()
            .cmp(&other.cost())
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Find a minimum-total-cost path from `start` to `end`.
///
/// All edge costs are assumed non-negative; this is a precondition, not
/// runtime-checked. Returns `Ok(None)` when `end` is unreachable and an
/// error when either endpoint is not a member of the graph. `start == end`
/// yields the zero-cost empty path without traversing any edge.
#[tracing::instrument(skip(graph), fields(start = ?start, end = ?end))]
pub fn min_cost_path<D>(graph: &Graph<D, Cost>, start: &D, end: &D) -> Result<Option<Path<D>>>
where
    D: Eq + Hash + Clone + fmt::Debug,
{
    let start_node = Node::new(start.clone());
    let end_node = Node::new(end.clone());

    if !graph.contains_node(&start_node) {
        return Err(WaypathError::missing_node(start_node.data()));
    }
    if !graph.contains_node(&end_node) {
        return Err(WaypathError::missing_node(end_node.data()));
    }

    let mut frontier: BinaryHeap<Reverse<FrontierEntry<D>>> = BinaryHeap::new();
    let mut finalized: HashSet<Node<D>> = HashSet::new();
    let mut seq = 0u64;

    frontier.push(Reverse(FrontierEntry {
        path: Path::new(start.clone()),
        seq,
    }));

    while let Some(Reverse(entry)) = frontier.pop() {
        let destination = Node::new(entry.path.end().clone());

        // First pop of any destination carries its minimal path; with
        // non-negative weights, reaching end here means we are done.
        if destination == end_node {
            return Ok(Some(entry.path));
        }

        if !finalized.insert(destination.clone()) {
            // Stale pop of an already finalized node
            continue;
        }

        for edge in graph.children(&destination) {
            if finalized.contains(edge.child()) {
                continue;
            }
            seq += 1;
            frontier.push(Reverse(FrontierEntry {
                path: entry.path.extend(edge.child().data().clone(), *edge.label()),
                seq,
            }));
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests;
