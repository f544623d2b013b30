use bidipath_core::{
    SearchConfig, SearchError, TerminationCheck, WeightedGraph, dijkstra_distance,
    shortest_distance, shortest_distance_with_config,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

const NODES: u32 = 60;
const EDGES: usize = 80;
const SEEDS: std::ops::Range<u64> = 0..8;

/// Uniform G(n, m) graph with integer weights in 1..=30.
fn random_graph(rng: &mut StdRng, nodes: u32, edges: usize) -> WeightedGraph<u32> {
    let mut graph = WeightedGraph::new();
    for node in 0..nodes {
        graph.add_node(node);
    }

    while graph.edge_count() < edges {
        let a = rng.random_range(0..nodes);
        let b = rng.random_range(0..nodes);
        if a == b || graph.weights().get(&a, &b).is_some() {
            continue;
        }
        graph.add_edge(a, b, f64::from(rng.random_range(1..=30u32)));
    }

    graph
}

fn random_pairs(rng: &mut StdRng, nodes: u32, count: usize) -> Vec<(u32, u32)> {
    let mut pairs = Vec::with_capacity(count);
    while pairs.len() < count {
        let source = rng.random_range(0..nodes);
        let target = rng.random_range(0..nodes);
        if source != target {
            pairs.push((source, target));
        }
    }
    pairs
}

fn reference_distance(graph: &WeightedGraph<u32>, source: u32, target: u32) -> Result<f64, SearchError> {
    dijkstra_distance(graph, &source, &target, graph.weight_fn()).map(|outcome| outcome.distance)
}

#[test]
fn test_matches_single_source_dijkstra() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng, NODES, EDGES);

        for (source, target) in random_pairs(&mut rng, NODES, 60) {
            let expected = reference_distance(&graph, source, target);
            let actual = shortest_distance(&graph, &source, &target, graph.weight_fn());
            assert_eq!(actual, expected, "seed {seed}: {source} -> {target}");
        }
    }
}

#[test]
fn test_popped_termination_matches_single_source_dijkstra() {
    let config = SearchConfig::default().with_termination(TerminationCheck::Popped);

    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng, NODES, EDGES);

        for (source, target) in random_pairs(&mut rng, NODES, 60) {
            let expected = reference_distance(&graph, source, target);
            let actual =
                shortest_distance_with_config(&graph, &source, &target, graph.weight_fn(), &config)
                    .map(|outcome| outcome.distance);
            assert_eq!(actual, expected, "seed {seed}: {source} -> {target}");
        }
    }
}

#[test]
fn test_distance_is_symmetric() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng, NODES, EDGES);

        for (source, target) in random_pairs(&mut rng, NODES, 40) {
            let there = shortest_distance(&graph, &source, &target, graph.weight_fn());
            let back = shortest_distance(&graph, &target, &source, graph.weight_fn());
            assert_eq!(there, back, "seed {seed}: {source} <-> {target}");
        }
    }
}

#[test]
fn test_triangle_consistency() {
    for seed in SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_graph(&mut rng, NODES, 2 * EDGES);
        let weight = graph.weight_fn();

        for (source, target) in random_pairs(&mut rng, NODES, 30) {
            let via = rng.random_range(0..NODES);
            if via == source || via == target {
                continue;
            }

            let (Ok(direct), Ok(first_leg), Ok(second_leg)) = (
                shortest_distance(&graph, &source, &target, &weight),
                shortest_distance(&graph, &source, &via, &weight),
                shortest_distance(&graph, &via, &target, &weight),
            ) else {
                continue;
            };
            assert!(
                direct <= first_leg + second_leg,
                "seed {seed}: {source} -> {target} via {via}"
            );
        }
    }
}

#[test]
fn test_unreachable_exactly_when_reference_finds_no_path() {
    // Sparse enough to leave several components.
    let mut rng = StdRng::seed_from_u64(99);
    let graph = random_graph(&mut rng, NODES, 30);
    let mut unreachable = 0;

    for (source, target) in random_pairs(&mut rng, NODES, 100) {
        let result = shortest_distance(&graph, &source, &target, graph.weight_fn());
        if reference_distance(&graph, source, target) == Err(SearchError::FrontierExhausted) {
            assert_eq!(result, Err(SearchError::FrontierExhausted));
            unreachable += 1;
        } else {
            assert!(result.unwrap().is_finite());
        }
    }

    assert!(unreachable > 0);
}
