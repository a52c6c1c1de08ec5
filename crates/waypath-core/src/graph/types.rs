//! Core graph value types
//!
//! A mutable, directed, labeled multigraph keyed on node data. Nodes wrap an
//! opaque immutable datum compared structurally; edges are (parent, child,
//! label) triples compared structurally over all three fields, so two edges
//! between the same pair of nodes may coexist when their labels differ.
//! Self-loops are allowed. Nodes and edges are only ever added; there is no
//! removal, matching the build-once-then-query lifecycle.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

use crate::error::{Result, WaypathError};

/// An identity-bearing vertex wrapping an immutable datum.
///
/// Two nodes are equal iff their data are equal. The datum never changes
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Node<D>(D);

impl<D> Node<D> {
    pub fn new(data: D) -> Self {
        Node(data)
    }

    pub fn data(&self) -> &D {
        &self.0
    }

    pub fn into_data(self) -> D {
        self.0
    }
}

/// A directed, labeled connection from a parent node to a child node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge<D, L> {
    parent: Node<D>,
    child: Node<D>,
    label: L,
}

impl<D, L> Edge<D, L> {
    pub fn new(parent: Node<D>, child: Node<D>, label: L) -> Self {
        Edge {
            parent,
            child,
            label,
        }
    }

    pub fn parent(&self) -> &Node<D> {
        &self.parent
    }

    pub fn child(&self) -> &Node<D> {
        &self.child
    }

    pub fn label(&self) -> &L {
        &self.label
    }
}

/// Traversal cost of a single edge or an accumulated path.
///
/// Wraps an `f64` weight with the bitwise equality, hashing, and total
/// ordering that set-based edge storage and the search frontier require.
/// Weights are assumed non-negative; NaN is outside the contract.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);

    pub fn new(value: f64) -> Self {
        Cost(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Cost {}

impl Hash for Cost {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.0.to_bits());
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<f64> for Cost {
    fn from(value: f64) -> Self {
        Cost(value)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed labeled multigraph mapping each node to its outgoing edges.
///
/// Invariants:
/// - the node set is a true set under structural equality
/// - an edge exists only if both endpoints are present as nodes
/// - no two edges share the same (parent, child, label) triple
///
/// Duplicate node and edge adds are silently deduplicated, so re-loading
/// overlapping input data is a no-op rather than an error. Built
/// single-threaded, then read-only for any number of sequential searches.
#[derive(Debug, Clone)]
pub struct Graph<D, L> {
    adjacency: HashMap<Node<D>, HashSet<Edge<D, L>>>,
}

impl<D, L> Graph<D, L>
where
    D: Eq + Hash + Clone + fmt::Debug,
    L: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Graph {
            adjacency: HashMap::new(),
        }
    }

    /// Add a node if no structurally equal node is present.
    ///
    /// A duplicate add is a no-op and never disturbs the edges already
    /// keyed on the existing node.
    pub fn add_node(&mut self, node: Node<D>) {
        self.adjacency.entry(node).or_default();
    }

    /// Add an edge from `parent` to `child` carrying `label`.
    ///
    /// Fails if either endpoint is not already a member of the graph; the
    /// graph is left unchanged on rejection. Adding a structurally equal
    /// edge twice is a no-op.
    pub fn add_edge(&mut self, parent: Node<D>, child: Node<D>, label: L) -> Result<()> {
        if !self.contains_node(&parent) {
            return Err(WaypathError::missing_node(parent.data()));
        }
        if !self.contains_node(&child) {
            return Err(WaypathError::missing_node(child.data()));
        }

        let edge = Edge::new(parent.clone(), child, label);
        if let Some(outgoing) = self.adjacency.get_mut(&parent) {
            outgoing.insert(edge);
        }
        Ok(())
    }

    pub fn contains_node(&self, node: &Node<D>) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn contains_edge(&self, edge: &Edge<D, L>) -> bool {
        self.adjacency
            .get(edge.parent())
            .is_some_and(|outgoing| outgoing.contains(edge))
    }

    /// Iterate over the node set. The view is read-only; the graph cannot
    /// be mutated through it.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<D>> {
        self.adjacency.keys()
    }

    /// Iterate over the outgoing edges of `node`.
    ///
    /// An absent node and a node with no outgoing edges both yield an empty
    /// iterator; callers cannot tell the two apart.
    pub fn children(&self, node: &Node<D>) -> impl Iterator<Item = &Edge<D, L>> {
        self.adjacency.get(node).into_iter().flatten()
    }

    /// Number of outgoing edges of `node` (zero for an absent node).
    pub fn out_degree(&self, node: &Node<D>) -> usize {
        self.adjacency.get(node).map_or(0, HashSet::len)
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<D, L> Default for Graph<D, L>
where
    D: Eq + Hash + Clone + fmt::Debug,
    L: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
