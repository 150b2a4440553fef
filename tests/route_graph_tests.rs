use ordered_float::OrderedFloat;
use route_sort::graph::generators::{generate_grid, generate_random_routes, node_name};
use route_sort::{
    Error, LazyDijkstra, Neighbor, RouteDeclaration, RouteGraph, ShortestPathAlgorithm,
};
use std::collections::HashMap;

// The worked example network from the demo driver
fn example_graph() -> RouteGraph<u32> {
    RouteGraph::new()
        .route("pendleton", "pierre", 2)
        .route("pendleton", "pueblo", 8)
        .route("pendleton", "phoenix", 4)
        .route("phoenix", "pueblo", 3)
        .route("phoenix", "peoria", 4)
        .route("phoenix", "pensacola", 5)
        .route("phoenix", "pittsburgh", 10)
        .route("pueblo", "pierre", 3)
        .route("pueblo", "peoria", 3)
        .route("pittsburgh", "peoria", 5)
        .route("pittsburgh", "pensacola", 4)
        .route("pittsburgh", "princeton", 2)
        .route("pensacola", "princeton", 5)
}

// All-pairs reference distances over the stored neighbor records
fn floyd_warshall(graph: &RouteGraph<u32>) -> HashMap<(String, String), u64> {
    let nodes: Vec<String> = graph.nodes().map(str::to_string).collect();
    let mut dist: HashMap<(String, String), u64> = HashMap::new();

    for u in &nodes {
        dist.insert((u.clone(), u.clone()), 0);
        for edge in graph.neighbors(u).unwrap() {
            let key = (u.clone(), edge.target().to_string());
            let w = edge.distance() as u64;
            let entry = dist.entry(key).or_insert(w);
            *entry = (*entry).min(w);
        }
    }

    for k in &nodes {
        for i in &nodes {
            for j in &nodes {
                let via = match (
                    dist.get(&(i.clone(), k.clone())),
                    dist.get(&(k.clone(), j.clone())),
                ) {
                    (Some(a), Some(b)) => a + b,
                    _ => continue,
                };
                let entry = dist.entry((i.clone(), j.clone())).or_insert(via);
                *entry = (*entry).min(via);
            }
        }
    }

    dist
}

#[test]
fn test_example_shortest_distance_to_peoria() {
    let graph = example_graph();
    let distances = graph.shortest_distances_from("pendleton").unwrap();

    assert_eq!(distances["peoria"], 8);
}

#[test]
fn test_example_all_distances() {
    let distances = example_graph().shortest_distances_from("pendleton").unwrap();

    let expected: HashMap<String, u32> = [
        ("pendleton", 0),
        ("pierre", 2),
        ("phoenix", 4),
        ("pueblo", 5),
        ("peoria", 8),
        ("pensacola", 9),
        ("pittsburgh", 13),
        ("princeton", 14),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect();

    assert_eq!(distances, expected);
}

#[test]
fn test_routes_are_stored_in_both_directions() {
    let graph: RouteGraph = RouteGraph::new().route("a", "b", 7);

    assert!(graph.neighbors("a").unwrap().contains(&Neighbor::new("b", 7)));
    assert!(graph.neighbors("b").unwrap().contains(&Neighbor::new("a", 7)));
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_example_graph_is_symmetric() {
    let graph = example_graph();

    for node in graph.nodes() {
        for edge in graph.neighbors(node).unwrap() {
            let back = Neighbor::new(node, edge.distance());
            assert!(
                graph.neighbors(edge.target()).unwrap().contains(&back),
                "{} -> {} has no mirror",
                node,
                edge
            );
        }
    }
}

#[test]
fn test_endpoint_only_node_gets_adjacency() {
    let graph: RouteGraph = RouteGraph::new().route("hub", "leaf", 1);

    assert!(graph.has_node("leaf"));
    let distances = graph.shortest_distances_from("leaf").unwrap();
    assert_eq!(distances["hub"], 1);
}

#[test]
fn test_parallel_routes_with_different_distances_coexist() {
    let graph: RouteGraph = RouteGraph::new().route("a", "b", 5).route("a", "b", 3);

    assert_eq!(graph.neighbors("a").unwrap().len(), 2);
    assert_eq!(graph.neighbors("b").unwrap().len(), 2);

    let distances = graph.shortest_distances_from("a").unwrap();
    assert_eq!(distances["b"], 3);
}

#[test]
fn test_identical_route_declared_twice_is_stored_once() {
    let mut graph: RouteGraph = RouteGraph::new();
    graph.add_route("a", "b", 5).add_route("b", "a", 5);

    assert_eq!(graph.neighbors("a").unwrap().len(), 1);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_self_loop_has_no_effect_on_distances() {
    let graph: RouteGraph = RouteGraph::new().route("a", "a", 4).route("a", "b", 1);

    assert_eq!(graph.neighbors("a").unwrap().len(), 2);
    let distances = graph.shortest_distances_from("a").unwrap();
    assert_eq!(distances["a"], 0);
    assert_eq!(distances["b"], 1);
}

#[test]
fn test_unknown_source_fails_with_not_found() {
    let graph = example_graph();

    match graph.shortest_distances_from("portland") {
        Err(Error::NodeNotFound(node)) => assert_eq!(node, "portland"),
        other => panic!("expected NodeNotFound, got {:?}", other),
    }

    let empty: RouteGraph = RouteGraph::new();
    assert!(matches!(
        empty.shortest_distances_from("anywhere"),
        Err(Error::NodeNotFound(_))
    ));
}

#[test]
fn test_other_component_is_unreachable() {
    let graph: RouteGraph = RouteGraph::new().route("a", "b", 1).route("x", "y", 1);

    let result = LazyDijkstra::new()
        .compute_shortest_distances(&graph, "a")
        .unwrap();

    assert_eq!(result.source, "a");
    assert_eq!(result.reachable_count(), 2);
    assert!(result.is_reachable("b"));
    assert!(!result.is_reachable("x"));
    assert_eq!(result.distance_to("y"), None);
}

#[test]
fn test_algorithm_name() {
    let dijkstra = LazyDijkstra::new();
    let name = <LazyDijkstra as ShortestPathAlgorithm<u32, RouteGraph<u32>>>::name(&dijkstra);
    assert_eq!(name, "LazyDijkstra");
}

#[test]
fn test_grid_distances_are_manhattan() {
    let graph = generate_grid(6, 4);
    let distances = graph.shortest_distances_from("0,0").unwrap();

    assert_eq!(distances.len(), 24);
    for row in 0..4u32 {
        for col in 0..6u32 {
            assert_eq!(distances[&format!("{},{}", row, col)], row + col);
        }
    }
}

#[test]
fn test_random_graphs_match_floyd_warshall() {
    for seed in 0..8 {
        let graph = generate_random_routes(25, 40, 20, seed);
        let reference = floyd_warshall(&graph);
        let source = node_name((seed as usize * 3) % 25);

        let distances = graph.shortest_distances_from(&source).unwrap();
        assert_eq!(distances.len(), graph.node_count(), "chain keeps every node reachable");
        assert_eq!(distances[&source], 0);

        for (node, &d) in &distances {
            assert_eq!(
                d as u64,
                reference[&(source.clone(), node.clone())],
                "seed {} node {}",
                seed,
                node
            );
        }
    }
}

#[test]
fn test_triangle_inequality_holds_for_every_edge() {
    let graph = generate_random_routes(40, 80, 50, 17);
    let distances = graph.shortest_distances_from(&node_name(0)).unwrap();

    for u in graph.nodes() {
        for edge in graph.neighbors(u).unwrap() {
            assert!(distances[edge.target()] <= distances[u] + edge.distance());
        }
    }
}

#[test]
fn test_float_weights() {
    let graph: RouteGraph<OrderedFloat<f64>> = RouteGraph::new()
        .route("a", "b", OrderedFloat(1.5))
        .route("b", "c", OrderedFloat(0.25))
        .route("a", "c", OrderedFloat(2.0));

    let distances = graph.shortest_distances_from("a").unwrap();
    assert_eq!(distances["c"], OrderedFloat(1.75));
}

#[test]
fn test_graph_from_json_declarations() {
    let json = r#"[
        {"from": "pendleton", "to": "phoenix", "distance": 4},
        {"from": "phoenix", "to": "peoria", "distance": 4}
    ]"#;
    let declarations: Vec<RouteDeclaration<u32>> = serde_json::from_str(json).unwrap();
    let graph = RouteGraph::from_declarations(declarations);

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.shortest_distances_from("peoria").unwrap()["pendleton"], 8);
}

#[test]
fn test_neighbor_display_and_ordering() {
    let near = Neighbor::new("pierre", 2u32);
    let far = Neighbor::new("peoria", 4u32);

    assert_eq!(near.to_string(), "pierre:2");
    assert!(near < far, "records order by distance first");
    assert_ne!(Neighbor::new("a", 1u32), Neighbor::new("a", 2u32));
}

#[test]
fn test_max_weight_route_back_edge_does_not_overflow() {
    let graph: RouteGraph = RouteGraph::new().route("a", "b", u32::MAX);

    let distances = graph.shortest_distances_from("a").unwrap();
    assert_eq!(distances["a"], 0);
    assert_eq!(distances["b"], u32::MAX);
}

#[test]
fn test_unrepresentable_distance_fails_with_overflow() {
    let graph: RouteGraph = RouteGraph::new()
        .route("a", "b", u32::MAX)
        .route("b", "c", 1);

    match graph.shortest_distances_from("a") {
        Err(Error::DistanceOverflow(node)) => assert_eq!(node, "c"),
        other => panic!("expected DistanceOverflow, got {:?}", other),
    }
}

#[test]
fn test_overflowing_candidate_ignored_when_node_is_reachable() {
    let graph: RouteGraph = RouteGraph::new()
        .route("a", "b", u32::MAX)
        .route("b", "c", 1)
        .route("a", "c", u32::MAX);

    // b -> c overflows, but c is already reachable at u32::MAX directly
    let distances = graph.shortest_distances_from("a").unwrap();
    assert_eq!(distances["b"], u32::MAX);
    assert_eq!(distances["c"], u32::MAX);
}
