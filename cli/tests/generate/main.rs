use bidipath::generate::{GenerateOptions, generate_random_graph};
use bidipath_core::Graph;
use rand::{SeedableRng, rngs::StdRng};

fn options(nodes: usize, density: f64) -> GenerateOptions {
    GenerateOptions {
        nodes,
        density,
        min_weight: 1,
        max_weight: 30,
    }
}

#[test]
fn test_edge_count_follows_density() {
    assert_eq!(options(100, 0.02).edge_count(), 99);
    assert_eq!(options(10, 1.0).edge_count(), 45);
    assert_eq!(options(10, 0.0).edge_count(), 0);
    assert_eq!(options(0, 0.5).edge_count(), 0);
}

#[test]
fn test_generated_graph_has_requested_shape() {
    let mut rng = StdRng::seed_from_u64(7);

    let graph = generate_random_graph(&options(50, 0.1), &mut rng).unwrap();

    assert_eq!(graph.node_count(), 50);
    assert_eq!(graph.edge_count(), options(50, 0.1).edge_count());
    for (a, b, weight) in graph.weights().edges() {
        assert_ne!(a, b);
        assert!((1.0..=30.0).contains(weight));
        assert_eq!(weight.fract(), 0.0);
    }
}

#[test]
fn test_complete_graph() {
    let mut rng = StdRng::seed_from_u64(1);

    let graph = generate_random_graph(&options(8, 1.0), &mut rng).unwrap();

    assert_eq!(graph.edge_count(), 28);
}

#[test]
fn test_same_seed_same_graph() {
    let first = generate_random_graph(&options(30, 0.2), &mut StdRng::seed_from_u64(3)).unwrap();
    let second = generate_random_graph(&options(30, 0.2), &mut StdRng::seed_from_u64(3)).unwrap();

    assert_eq!(first.weights().edges(), second.weights().edges());
}

#[test]
fn test_fixed_weight_range() {
    let mut rng = StdRng::seed_from_u64(11);
    let fixed = GenerateOptions {
        min_weight: 5,
        max_weight: 5,
        ..options(20, 0.3)
    };

    let graph = generate_random_graph(&fixed, &mut rng).unwrap();

    assert!(graph.weights().edges().iter().all(|(_, _, weight)| *weight == 5.0));
}

#[test]
fn test_invalid_options_rejected() {
    let mut rng = StdRng::seed_from_u64(0);

    let too_dense = generate_random_graph(&options(10, 1.5), &mut rng);
    assert!(too_dense.unwrap_err().to_string().contains("density"));

    let inverted = GenerateOptions {
        min_weight: 10,
        max_weight: 2,
        ..options(10, 0.1)
    };
    let result = generate_random_graph(&inverted, &mut rng);
    assert!(result.unwrap_err().to_string().contains("min weight"));
}
