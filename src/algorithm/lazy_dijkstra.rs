use std::collections::HashMap;
use log::{debug, trace, warn};

use crate::algorithm::{ShortestDistances, ShortestPathAlgorithm};
use crate::data_structures::MinQueue;
use crate::graph::{Neighbor, RouteNetwork, Weight};
use crate::{Error, Result};

/// Dijkstra's algorithm with lazy deletion instead of decrease-key
///
/// Every relaxation pushes a fresh `(node, tentative distance)` entry. When an
/// entry for an already finalized node is popped it is discarded. With
/// non-negative weights the first pop of a node carries its shortest distance,
/// so each node is finalized exactly once.
#[derive(Debug, Default)]
pub struct LazyDijkstra;

impl LazyDijkstra {
    /// Creates a new lazy Dijkstra instance
    pub fn new() -> Self {
        LazyDijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for LazyDijkstra
where
    W: Weight,
    G: RouteNetwork<W>,
{
    fn name(&self) -> &'static str {
        "LazyDijkstra"
    }

    fn compute_shortest_distances(&self, graph: &G, source: &str) -> Result<ShortestDistances<W>> {
        if !graph.has_node(source) {
            warn!("Shortest distance query from unknown node {}", source);
            return Err(Error::NodeNotFound(source.to_string()));
        }

        debug!(
            "Computing shortest distances from {} over {} nodes",
            source,
            graph.node_count()
        );

        let mut distances: HashMap<String, W> = HashMap::new();
        let mut queue = MinQueue::new();
        queue.push(Neighbor::new(source, W::zero()));

        let mut stale = 0usize;
        // Targets whose candidate distance did not fit in W
        let mut overflowed: Vec<String> = Vec::new();

        while let Some(current) = queue.pop() {
            if distances.contains_key(current.target()) {
                stale += 1;
                trace!("Discarding stale entry {:?}", current);
                continue;
            }

            let dist = current.distance();
            let edges = graph.neighbors_of(current.target()).ok_or_else(|| {
                warn!("Node {} has no adjacency entry", current.target());
                Error::NodeNotFound(current.target().to_string())
            })?;

            // Finalized nodes are not filtered here; their entries are dropped on pop
            for edge in edges {
                match dist.checked_sum(edge.distance()) {
                    Some(next) => queue.push(Neighbor::new(edge.target(), next)),
                    None => {
                        trace!(
                            "Distance to {} overflows via {}",
                            edge.target(),
                            current.target()
                        );
                        overflowed.push(edge.target().to_string());
                    }
                }
            }

            trace!("Finalized {} at {:?}", current.target(), dist);
            distances.insert(current.target().to_string(), dist);
        }

        // An overflowing candidate only matters if no representable path reached the node
        if let Some(node) = overflowed.into_iter().find(|n| !distances.contains_key(n)) {
            warn!("Shortest distance from {} to {} overflows", source, node);
            return Err(Error::DistanceOverflow(node));
        }

        debug!(
            "Finalized {} nodes from {} ({} stale entries discarded)",
            distances.len(),
            source,
            stale
        );

        Ok(ShortestDistances {
            source: source.to_string(),
            distances,
        })
    }
}
