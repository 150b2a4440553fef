//! Route Sort - generic merge sort and lazy Dijkstra over undirected route graphs
//!
//! Two independent utilities live here: a divide-and-conquer merge sort over any
//! totally ordered element type, and an undirected weighted graph keyed by node
//! name that computes single-source shortest distances with a lazy-deletion
//! priority queue.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod sort;

pub use algorithm::{
    lazy_dijkstra::LazyDijkstra, ShortestDistances, ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::{Neighbor, RouteDeclaration, RouteGraph, Weight};
pub use sort::{merge, merge_by, merge_sort, merge_sort_by, merge_sort_by_key};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Node not found in route graph: {0}")]
    NodeNotFound(String),

    #[error("Shortest distance to {0} exceeds the weight type's range")]
    DistanceOverflow(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
