use crate::graph::traits::Weight;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One hop from a node: the node it reaches and the distance of that hop.
///
/// Two records are equal only when both the target and the distance match,
/// so the same pair of nodes can hold several records with different
/// distances. Ordering is by distance first, which is what the shortest-path
/// queue relies on. Equal distances fall back to comparing targets only to
/// keep `Ord` consistent with `Eq`; do not rely on that tie order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Neighbor<W> {
    target: String,
    distance: W,
}

impl<W: Weight> Neighbor<W> {
    /// Creates a record pointing at `target` with the given distance
    pub fn new(target: impl Into<String>, distance: W) -> Self {
        Neighbor {
            target: target.into(),
            distance,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn distance(&self) -> W {
        self.distance
    }
}

impl<W: Weight> Ord for Neighbor<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl<W: Weight> PartialOrd for Neighbor<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight + fmt::Display> fmt::Display for Neighbor<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.target, self.distance)
    }
}
