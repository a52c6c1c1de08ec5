//! Immutable path value type
//!
//! A `Path` records a walk from a start node as an ordered sequence of
//! (destination, hop cost) steps plus the accumulated total. `extend`
//! copies rather than mutates: search frontiers hold many candidate paths
//! sharing prefixes, and no extension may be observed by another holder.

use serde::Serialize;

use crate::graph::types::Cost;

/// One hop in a path: the destination reached and what the hop cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathStep<D> {
    pub destination: D,
    pub cost: Cost,
}

/// An immutable, extendable record of a walk and its accumulated cost.
///
/// Cost is monotonically non-decreasing along the sequence as long as hop
/// costs are non-negative, which the weighted search assumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path<D> {
    start: D,
    steps: Vec<PathStep<D>>,
    total_cost: Cost,
}

impl<D: Clone> Path<D> {
    /// A zero-cost path sitting at `start` with no hops taken.
    pub fn new(start: D) -> Self {
        Path {
            start,
            steps: Vec::new(),
            total_cost: Cost::ZERO,
        }
    }

    /// Return a new path with one more hop appended. `self` is unchanged.
    pub fn extend(&self, destination: D, cost: Cost) -> Self {
        let mut steps = self.steps.clone();
        steps.push(PathStep { destination, cost });
        Path {
            start: self.start.clone(),
            steps,
            total_cost: self.total_cost + cost,
        }
    }

    pub fn start(&self) -> &D {
        &self.start
    }

    /// The node this path currently ends on (the start when no hops taken).
    pub fn end(&self) -> &D {
        self.steps
            .last()
            .map_or(&self.start, |step| &step.destination)
    }

    pub fn steps(&self) -> &[PathStep<D>] {
        &self.steps
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }

    /// Number of hops taken.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_path_has_no_hops() {
        let path = Path::new("A");
        assert!(path.is_empty());
        assert_eq!(path.end(), &"A");
        assert_eq!(path.total_cost(), Cost::ZERO);
    }

    #[test]
    fn test_extend_accumulates_cost() {
        let path = Path::new("A")
            .extend("B", Cost::new(1.5))
            .extend("C", Cost::new(2.5));
        assert_eq!(path.len(), 2);
        assert_eq!(path.end(), &"C");
        assert_eq!(path.total_cost(), Cost::new(4.0));
    }

    #[test]
    fn test_extend_leaves_original_untouched() {
        let base = Path::new("A").extend("B", Cost::new(1.0));
        let left = base.extend("C", Cost::new(1.0));
        let right = base.extend("D", Cost::new(2.0));

        assert_eq!(base.len(), 1);
        assert_eq!(base.end(), &"B");
        assert_eq!(left.end(), &"C");
        assert_eq!(right.end(), &"D");
        assert_eq!(right.total_cost(), Cost::new(3.0));
    }

    #[test]
    fn test_steps_record_destinations_in_order() {
        let path = Path::new("A")
            .extend("B", Cost::new(1.0))
            .extend("C", Cost::new(1.0));
        let destinations: Vec<&str> = path.steps().iter().map(|s| s.destination).collect();
        assert_eq!(destinations, vec!["B", "C"]);
    }
}
