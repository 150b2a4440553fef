pub mod traits;
pub mod lazy_dijkstra;

pub use traits::{ShortestDistances, ShortestPathAlgorithm};
