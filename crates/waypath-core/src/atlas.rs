//! Walking-map adapter
//!
//! Loads named landmarks and measured segments between coordinate points,
//! then answers minimum-distance route queries keyed by landmark short
//! name. Nodes are coordinate points; each segment contributes one edge in
//! each direction carrying its distance.

use std::collections::HashMap;
use std::fs::File;
use std::hash::{Hash, Hasher};
use std::io::{BufRead, BufReader};
use std::path::Path as FsPath;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, WaypathError};
use crate::graph::path::Path;
use crate::graph::types::{Cost, Graph, Node};
use crate::query;

/// A coordinate point on the map, used as the graph node datum.
///
/// Equality and hashing are structural over the coordinate bit patterns,
/// so a point parsed twice keys the same node.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.x.to_bits());
        state.write_u64(self.y.to_bits());
    }
}

/// A named landmark at a fixed location.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Landmark {
    pub short_name: String,
    pub long_name: String,
    pub location: Point,
}

/// A measured walkable segment between two points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub distance: f64,
}

fn parse_coord(path: &FsPath, line: usize, field: &str) -> Result<f64> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| WaypathError::invalid_record(path, line, format!("bad coordinate: {field}")))
}

/// Parse tab-separated `short<TAB>long<TAB>x<TAB>y` landmark records.
#[tracing::instrument]
pub fn parse_landmarks(path: &FsPath) -> Result<Vec<Landmark>> {
    if !path.exists() {
        return Err(WaypathError::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let mut landmarks = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let &[short, long, x, y] = fields.as_slice() else {
            return Err(WaypathError::invalid_record(
                path,
                idx + 1,
                "expected short<TAB>long<TAB>x<TAB>y",
            ));
        };
        if short.trim().is_empty() || long.trim().is_empty() {
            return Err(WaypathError::invalid_record(
                path,
                idx + 1,
                "empty landmark name field",
            ));
        }

        landmarks.push(Landmark {
            short_name: short.trim().to_string(),
            long_name: long.trim().to_string(),
            location: Point::new(
                parse_coord(path, idx + 1, x)?,
                parse_coord(path, idx + 1, y)?,
            ),
        });
    }

    debug!(landmarks = landmarks.len(), "parsed landmark records");
    Ok(landmarks)
}

/// Parse tab-separated `x1<TAB>y1<TAB>x2<TAB>y2<TAB>distance` segment
/// records. Negative distances are rejected here so the weighted search's
/// non-negativity precondition holds for every graph built from a file.
#[tracing::instrument]
pub fn parse_segments(path: &FsPath) -> Result<Vec<Segment>> {
    if !path.exists() {
        return Err(WaypathError::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path)?;
    let mut segments = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        let &[x1, y1, x2, y2, distance] = fields.as_slice() else {
            return Err(WaypathError::invalid_record(
                path,
                idx + 1,
                "expected x1<TAB>y1<TAB>x2<TAB>y2<TAB>distance",
            ));
        };

        let distance = parse_coord(path, idx + 1, distance)?;
        if distance < 0.0 {
            return Err(WaypathError::invalid_record(
                path,
                idx + 1,
                format!("negative distance: {distance}"),
            ));
        }

        segments.push(Segment {
            from: Point::new(
                parse_coord(path, idx + 1, x1)?,
                parse_coord(path, idx + 1, y1)?,
            ),
            to: Point::new(
                parse_coord(path, idx + 1, x2)?,
                parse_coord(path, idx + 1, y2)?,
            ),
            distance,
        });
    }

    debug!(segments = segments.len(), "parsed segment records");
    Ok(segments)
}

/// A walking map: the landmark name table plus the weighted point graph.
#[derive(Debug, Clone)]
pub struct Atlas {
    names: HashMap<String, String>,
    locations: HashMap<String, Point>,
    graph: Graph<Point, Cost>,
}

impl Atlas {
    /// Build an atlas from parsed records.
    ///
    /// Landmark locations are added as nodes even when no segment touches
    /// them, so a route query against an isolated landmark reports "no
    /// route" rather than rejecting the name.
    pub fn build(landmarks: Vec<Landmark>, segments: &[Segment]) -> Result<Self> {
        let mut graph = Graph::new();

        for landmark in &landmarks {
            graph.add_node(Node::new(landmark.location));
        }
        for segment in segments {
            let from = Node::new(segment.from);
            let to = Node::new(segment.to);
            graph.add_node(from.clone());
            graph.add_node(to.clone());
            graph.add_edge(from.clone(), to.clone(), Cost::new(segment.distance))?;
            graph.add_edge(to, from, Cost::new(segment.distance))?;
        }

        let mut names = HashMap::new();
        let mut locations = HashMap::new();
        for landmark in landmarks {
            names.insert(landmark.short_name.clone(), landmark.long_name);
            locations.insert(landmark.short_name, landmark.location);
        }

        Ok(Atlas {
            names,
            locations,
            graph,
        })
    }

    /// Load an atlas from a landmark file and a segment file.
    pub fn from_files(landmarks_path: &FsPath, segments_path: &FsPath) -> Result<Self> {
        let landmarks = parse_landmarks(landmarks_path)?;
        let segments = parse_segments(segments_path)?;
        Self::build(landmarks, &segments)
    }

    pub fn contains_short_name(&self, short_name: &str) -> bool {
        self.names.contains_key(short_name)
    }

    pub fn long_name_for(&self, short_name: &str) -> Result<&str> {
        self.names
            .get(short_name)
            .map(String::as_str)
            .ok_or_else(|| WaypathError::UnknownLandmark {
                short_name: short_name.to_string(),
            })
    }

    /// All landmarks as (short name, long name) pairs, sorted by short name.
    pub fn landmark_names(&self) -> Vec<(&str, &str)> {
        let mut names: Vec<(&str, &str)> = self
            .names
            .iter()
            .map(|(short, long)| (short.as_str(), long.as_str()))
            .collect();
        names.sort_unstable();
        names
    }

    /// Minimum-distance route between two landmarks given by short name.
    pub fn shortest_route(&self, from: &str, to: &str) -> Result<Option<Path<Point>>> {
        let from = self
            .locations
            .get(from)
            .ok_or_else(|| WaypathError::UnknownLandmark {
                short_name: from.to_string(),
            })?;
        let to = self
            .locations
            .get(to)
            .ok_or_else(|| WaypathError::UnknownLandmark {
                short_name: to.to_string(),
            })?;

        query::find_path_weighted(&self.graph, from, to)
    }

    /// Number of points in the underlying graph.
    pub fn point_count(&self) -> usize {
        self.graph.len()
    }
}
