use anyhow::{Result, bail};
use bidipath_core::WeightedGraph;
use rand::Rng;
use tracing::debug;
use uuid::{Builder, Uuid};

use crate::args::GenerateArgs;

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub nodes: usize,
    pub density: f64,
    pub min_weight: u32,
    pub max_weight: u32,
}

impl From<&GenerateArgs> for GenerateOptions {
    fn from(args: &GenerateArgs) -> Self {
        Self {
            nodes: args.nodes,
            density: args.density,
            min_weight: args.min_weight,
            max_weight: args.max_weight,
        }
    }
}

impl GenerateOptions {
    /// `m` of the G(n, m) model: the requested share of all possible edges.
    pub fn edge_count(&self) -> usize {
        let possible_edges = self.nodes * self.nodes.saturating_sub(1) / 2;
        (possible_edges as f64 * self.density).round() as usize
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.density) {
            bail!("density must be within 0.0-1.0, got {}", self.density);
        }
        if self.min_weight > self.max_weight {
            bail!(
                "min weight {} is larger than max weight {}",
                self.min_weight,
                self.max_weight
            );
        }
        Ok(())
    }
}

/// Draws a graph uniformly from all graphs with `nodes` nodes and
/// `edge_count()` edges. Every edge weight is fixed here, once.
pub fn generate_random_graph<R: Rng>(
    options: &GenerateOptions,
    rng: &mut R,
) -> Result<WeightedGraph<Uuid>> {
    options.validate()?;

    let node_ids: Vec<Uuid> = (0..options.nodes)
        .map(|_| Builder::from_random_bytes(rng.random()).into_uuid())
        .collect();

    let mut graph = WeightedGraph::new();
    for &node in &node_ids {
        graph.add_node(node);
    }

    let edge_target = options.edge_count();
    while graph.edge_count() < edge_target {
        let a = rng.random_range(0..options.nodes);
        let b = rng.random_range(0..options.nodes);
        if a == b || graph.weights().get(&node_ids[a], &node_ids[b]).is_some() {
            continue;
        }

        let weight = rng.random_range(options.min_weight..=options.max_weight);
        graph.add_edge(node_ids[a], node_ids[b], f64::from(weight));
    }

    debug!(nodes = options.nodes, edges = edge_target, "random graph generated");
    Ok(graph)
}
