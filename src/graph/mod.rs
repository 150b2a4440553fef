pub mod traits;
pub mod neighbor;
pub mod route_graph;
pub mod generators;

pub use traits::{RouteNetwork, Weight};
pub use neighbor::Neighbor;
pub use route_graph::{RouteDeclaration, RouteGraph};
