use std::env;
use std::time::{Duration, Instant};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use route_sort::algorithm::{lazy_dijkstra::LazyDijkstra, ShortestPathAlgorithm};
use route_sort::graph::generators::{generate_random_routes, node_name};
use route_sort::{merge_sort, RouteGraph};

// Time merge_sort against the standard library's stable sort on the same data
fn benchmark_sort(size: usize, rng: &mut StdRng) -> (Duration, Duration) {
    let data: Vec<u64> = (0..size).map(|_| rng.gen_range(0..1_000_000)).collect();

    let start = Instant::now();
    let ours = merge_sort(data.clone());
    let merge_time = start.elapsed();

    let mut std_sorted = data;
    let start = Instant::now();
    std_sorted.sort();
    let std_time = start.elapsed();

    assert_eq!(ours, std_sorted, "merge_sort disagrees with slice::sort");
    (merge_time, std_time)
}

// Time a full shortest distance query on a random route graph
fn benchmark_routes(size: usize, seed: u64) -> Duration {
    let graph = generate_random_routes(size, size * 2, 100, seed);
    let dijkstra = LazyDijkstra::new();

    let start = Instant::now();
    let result = dijkstra
        .compute_shortest_distances(&graph, &node_name(0))
        .expect("source node is always generated");
    let duration = start.elapsed();

    println!(
        "  - {}: {} nodes reached, {} neighbor records, {:?}",
        <LazyDijkstra as ShortestPathAlgorithm<u32, RouteGraph<u32>>>::name(&dijkstra),
        result.reachable_count(),
        graph.edge_count(),
        duration
    );
    duration
}

fn main() {
    env_logger::init();

    // Sizes may be given on the command line
    let sizes: Vec<usize> = {
        let parsed: Vec<usize> = env::args()
            .skip(1)
            .filter_map(|a| a.parse().ok())
            .filter(|&n| n > 0)
            .collect();
        if parsed.is_empty() {
            vec![1_000, 10_000, 100_000]
        } else {
            parsed
        }
    };

    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    println!("=====================================================");
    println!("Benchmark: merge_sort and LazyDijkstra");
    println!("=====================================================");

    for &size in &sizes {
        println!("\nSize {}", size);
        let (merge_time, std_time) = benchmark_sort(size, &mut rng);
        println!("  - merge_sort {:?}, slice::sort {:?}", merge_time, std_time);
        let route_time = benchmark_routes(size, size as u64);
        results.push((size, merge_time, std_time, route_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<15}",
        "Size", "merge_sort (ms)", "std sort (ms)", "routes (ms)"
    );
    println!("-----------------------------------------------------");
    for (size, merge_time, std_time, route_time) in &results {
        println!(
            "{:<10} | {:<15} | {:<15} | {:<15}",
            size,
            merge_time.as_millis(),
            std_time.as_millis(),
            route_time.as_millis()
        );
    }
}
