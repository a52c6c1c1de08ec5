//! Waypath Core Library
//!
//! Graph core and shortest-path search for the waypath CLI: a generic
//! directed labeled multigraph, unweighted (BFS) and weighted (Dijkstra)
//! point-to-point searches, and the adapters that build graphs from
//! delimited domain records.

pub mod atlas;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod network;
pub mod query;
