use crate::algorithm::{lazy_dijkstra::LazyDijkstra, ShortestPathAlgorithm};
use crate::graph::traits::{RouteNetwork, Weight};
use crate::graph::Neighbor;
use crate::Result;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};

/// A single undirected edge declaration, e.g. one entry of a JSON edge list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteDeclaration<W> {
    pub from: String,
    pub to: String,
    pub distance: W,
}

/// An undirected weighted graph of named nodes using adjacency sets
///
/// Every declared route is stored in both directions. Adjacency is a set of
/// [`Neighbor`] records compared on target *and* distance, so declaring the
/// same pair twice with different distances keeps both records.
#[derive(Debug, Clone)]
pub struct RouteGraph<W = u32>
where
    W: Weight,
{
    /// node -> {(neighbor, distance)}
    connections: HashMap<String, HashSet<Neighbor<W>>>,
}

impl<W> RouteGraph<W>
where
    W: Weight,
{
    /// Creates a new empty route graph
    pub fn new() -> Self {
        RouteGraph {
            connections: HashMap::new(),
        }
    }

    /// Builds a graph from a sequence of route declarations
    pub fn from_declarations<I>(declarations: I) -> Self
    where
        I: IntoIterator<Item = RouteDeclaration<W>>,
    {
        let mut graph = RouteGraph::new();
        for decl in declarations {
            graph.add_route(decl.from, decl.to, decl.distance);
        }
        graph
    }

    /// Declares an undirected route between `c1` and `c2` and returns the graph
    ///
    /// ```
    /// use route_sort::RouteGraph;
    ///
    /// let graph: RouteGraph = RouteGraph::new()
    ///     .route("pendleton", "pierre", 2)
    ///     .route("pendleton", "phoenix", 4);
    /// assert_eq!(graph.node_count(), 3);
    /// ```
    pub fn route(mut self, c1: impl Into<String>, c2: impl Into<String>, distance: W) -> Self {
        self.add_route(c1, c2, distance);
        self
    }

    /// Declares an undirected route in place; calls can be chained
    pub fn add_route(
        &mut self,
        c1: impl Into<String>,
        c2: impl Into<String>,
        distance: W,
    ) -> &mut Self {
        let c1 = c1.into();
        let c2 = c2.into();

        self.connections
            .entry(c1.clone())
            .or_default()
            .insert(Neighbor::new(c2.clone(), distance));
        self.connections
            .entry(c2)
            .or_default()
            .insert(Neighbor::new(c1, distance));

        self
    }

    /// Returns the adjacency set of `node`, if it has one
    pub fn neighbors(&self, node: &str) -> Option<&HashSet<Neighbor<W>>> {
        self.connections.get(node)
    }

    /// Returns an iterator over every node with an adjacency entry
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.connections.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.connections.len()
    }

    /// Returns the number of stored neighbor records (twice the edge count
    /// for non-loop edges)
    pub fn edge_count(&self) -> usize {
        self.connections.values().map(|edges| edges.len()).sum()
    }

    pub fn has_node(&self, node: &str) -> bool {
        self.connections.contains_key(node)
    }

    /// Computes the shortest distance from `source` to every reachable node
    ///
    /// Fails with [`crate::Error::NodeNotFound`] if `source` was never part of
    /// a declared route.
    pub fn shortest_distances_from(&self, source: &str) -> Result<HashMap<String, W>> {
        LazyDijkstra::new()
            .compute_shortest_distances(self, source)
            .map(|result| result.into_map())
    }
}

impl<W> Default for RouteGraph<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> RouteNetwork<W> for RouteGraph<W>
where
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.connections.len()
    }

    fn edge_count(&self) -> usize {
        RouteGraph::edge_count(self)
    }

    fn neighbors_of(&self, node: &str) -> Option<Box<dyn Iterator<Item = &Neighbor<W>> + '_>> {
        self.connections
            .get(node)
            .map(|edges| Box::new(edges.iter()) as Box<dyn Iterator<Item = &Neighbor<W>> + '_>)
    }

    fn has_node(&self, node: &str) -> bool {
        self.connections.contains_key(node)
    }
}
