use std::collections::HashMap;
use serde::Serialize;
use crate::graph::{RouteNetwork, Weight};
use crate::Result;

/// Finalized shortest distances from a single source
///
/// A node missing from `distances` is unreachable from `source`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestDistances<W>
where
    W: Weight,
{
    /// Source node name
    pub source: String,

    /// Node name -> finalized distance from source
    pub distances: HashMap<String, W>,
}

impl<W> ShortestDistances<W>
where
    W: Weight,
{
    /// Returns the finalized distance to `node`, if it was reached
    pub fn distance_to(&self, node: &str) -> Option<W> {
        self.distances.get(node).copied()
    }

    pub fn is_reachable(&self, node: &str) -> bool {
        self.distances.contains_key(node)
    }

    /// Number of nodes reached, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }

    pub fn into_map(self) -> HashMap<String, W> {
        self.distances
    }
}

/// Trait for single-source shortest distance algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: RouteNetwork<W>,
{
    /// Compute shortest distances from `source` to every reachable node
    fn compute_shortest_distances(&self, graph: &G, source: &str) -> Result<ShortestDistances<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
