//! Graph ADT and path-finding operations
//!
//! Provides the directed labeled multigraph and the searches over it:
//! - the core value types (Node, Edge, Graph, Cost)
//! - the immutable Path record
//! - breadth-first minimum-hop search with deterministic tie-breaking
//! - Dijkstra minimum-cost search over non-negative weights

pub mod bfs;
pub mod dijkstra;
pub mod path;
pub mod types;

pub use bfs::shortest_path;
pub use dijkstra::min_cost_path;
pub use path::{Path, PathStep};
pub use types::{Cost, Edge, Graph, Node};
