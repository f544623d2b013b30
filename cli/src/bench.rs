use anyhow::{Result, bail};
use bidipath_core::benchmark::{BenchmarkResult, compare_algorithms};
use bidipath_core::{Graph, SearchConfig, WeightedGraph};
use rand::{Rng, seq::IndexedRandom};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use uuid::Uuid;

/// Nodes reachable from `start`, `start` included.
pub fn connected_component<G: Graph>(graph: &G, start: &G::Node) -> Vec<G::Node> {
    let mut queue = VecDeque::new();
    let mut visited = FxHashSet::default();
    let mut component = Vec::new();

    queue.push_back(start.clone());
    visited.insert(start.clone());

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current) {
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor.clone());
            }
        }
        component.push(current);
    }

    component
}

/// Picks `trials` pairs of distinct nodes that share a component, the way
/// a trial driver would: a random source, then a random member of its
/// component.
pub fn pick_connected_pairs<R: Rng>(
    graph: &WeightedGraph<Uuid>,
    trials: usize,
    rng: &mut R,
) -> Result<Vec<(Uuid, Uuid)>> {
    let mut nodes: Vec<Uuid> = graph.nodes().copied().collect();
    nodes.sort();

    let mut pairs = Vec::with_capacity(trials);
    let max_attempts = trials.saturating_mul(20).max(20);

    for _ in 0..max_attempts {
        if pairs.len() == trials {
            break;
        }
        let Some(&source) = nodes.choose(rng) else {
            bail!("graph has no nodes");
        };

        let mut component = connected_component(graph, &source);
        component.sort();
        if let Some(&target) = component.choose(rng) {
            if target != source {
                pairs.push((source, target));
            }
        }
    }

    if pairs.len() < trials {
        bail!(
            "only found {} of {} connected node pairs; is the graph too sparse?",
            pairs.len(),
            trials
        );
    }
    Ok(pairs)
}

pub fn run_benchmark<R: Rng>(
    graph: &WeightedGraph<Uuid>,
    trials: usize,
    config: &SearchConfig,
    rng: &mut R,
) -> Result<Vec<BenchmarkResult>> {
    let pairs = pick_connected_pairs(graph, trials, rng)?;
    Ok(compare_algorithms(graph, graph.weight_fn(), &pairs, config))
}
