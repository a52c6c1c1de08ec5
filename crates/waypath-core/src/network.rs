//! Co-occurrence network adapter
//!
//! Builds an unweighted graph from `member<TAB>group` records: members
//! become nodes, and every pair of members sharing a group gets one edge in
//! each direction labeled with that group. A pair sharing several groups is
//! connected by one edge per group and direction.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path as FsPath;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, WaypathError};
use crate::graph::bfs;
use crate::graph::types::{Edge, Graph, Node};

/// One domain record: a member seen in a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRecord {
    pub member: String,
    pub group: String,
}

/// Parse tab-separated `member<TAB>group` records from a file.
///
/// Blank lines are skipped; a line without exactly two non-empty fields is
/// a data error naming the file and line number.
#[tracing::instrument]
pub fn parse_records(path: &FsPath) -> Result<Vec<MemberRecord>> {
    if !path.exists() {
        return Err(WaypathError::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let mut records = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((member, group)) = line.split_once('\t') else {
            return Err(WaypathError::invalid_record(
                path,
                idx + 1,
                "expected member<TAB>group",
            ));
        };
        let (member, group) = (member.trim(), group.trim());
        if member.is_empty() || group.is_empty() {
            return Err(WaypathError::invalid_record(
                path,
                idx + 1,
                "empty member or group field",
            ));
        }

        records.push(MemberRecord {
            member: member.to_string(),
            group: group.to_string(),
        });
    }

    debug!(records = records.len(), "parsed network records");
    Ok(records)
}

/// Build the co-occurrence graph from parsed records.
pub fn build_graph(records: &[MemberRecord]) -> Result<Graph<String, String>> {
    let mut by_group: HashMap<&str, Vec<&str>> = HashMap::new();
    for record in records {
        by_group
            .entry(record.group.as_str())
            .or_default()
            .push(record.member.as_str());
    }

    let mut graph = Graph::new();
    for record in records {
        graph.add_node(Node::new(record.member.clone()));
    }

    for (group, members) in &by_group {
        for (i, a) in members.iter().enumerate() {
            for b in &members[i + 1..] {
                if a == b {
                    // A member listed twice in a group is not its own peer
                    continue;
                }
                graph.add_edge(
                    Node::new((*a).to_string()),
                    Node::new((*b).to_string()),
                    (*group).to_string(),
                )?;
                graph.add_edge(
                    Node::new((*b).to_string()),
                    Node::new((*a).to_string()),
                    (*group).to_string(),
                )?;
            }
        }
    }

    Ok(graph)
}

/// Fewest-hops connection between two members, labels preserved so the
/// caller can report which group links each hop.
pub fn find_connection(
    graph: &Graph<String, String>,
    from: &str,
    to: &str,
) -> Result<Option<Vec<Edge<String, String>>>> {
    bfs::shortest_path(graph, &from.to_string(), &to.to_string())
}
