use crate::graph::RouteGraph;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Name used for the `i`-th node of generated graphs
pub fn node_name(i: usize) -> String {
    format!("n{}", i)
}

/// Generates a random undirected route graph with `n` nodes
///
/// A spanning chain `n0 - n1 - ... - n(n-1)` is laid down first so every node
/// is reachable from every other, then `extra_routes` random routes are added.
/// Weights are drawn from `1..=max_distance`. The same seed always yields the
/// same graph.
pub fn generate_random_routes(
    n: usize,
    extra_routes: usize,
    max_distance: u32,
    seed: u64,
) -> RouteGraph<u32> {
    assert!(n > 0, "n must be positive");
    assert!(max_distance > 0, "max_distance must be positive");

    let mut graph = RouteGraph::new();
    let mut rng = StdRng::seed_from_u64(seed);

    if n == 1 {
        // A lone node only exists through a self-loop
        graph.add_route(node_name(0), node_name(0), 0);
        return graph;
    }

    for i in 1..n {
        let distance = rng.gen_range(1..=max_distance);
        graph.add_route(node_name(i - 1), node_name(i), distance);
    }

    for _ in 0..extra_routes {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let distance = rng.gen_range(1..=max_distance);
            graph.add_route(node_name(u), node_name(v), distance);
        }
    }

    graph
}

/// Generates a `width` x `height` grid where each cell is joined to its right
/// and lower neighbours with distance 1
///
/// Cells are named `"{row},{col}"`.
pub fn generate_grid(width: usize, height: usize) -> RouteGraph<u32> {
    assert!(width > 0 && height > 0, "grid dimensions must be positive");

    let name = |row: usize, col: usize| format!("{},{}", row, col);
    let mut graph = RouteGraph::new();

    if width == 1 && height == 1 {
        graph.add_route(name(0, 0), name(0, 0), 0);
        return graph;
    }

    for row in 0..height {
        for col in 0..width {
            if col + 1 < width {
                graph.add_route(name(row, col), name(row, col + 1), 1);
            }
            if row + 1 < height {
                graph.add_route(name(row, col), name(row + 1, col), 1);
            }
        }
    }

    graph
}
