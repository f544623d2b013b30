pub mod bidirectional;
pub mod dijkstra;
pub mod distance_table;
pub mod frontier;
pub mod utils;

use crate::algorithm::Algorithm;
use crate::error::Result;
use crate::graph::Graph;
use crate::search_config::SearchConfig;

// Re-export the public functions
pub use bidirectional::{shortest_distance, shortest_distance_with_config};
pub use dijkstra::{dijkstra_distance, dijkstra_distance_with_config};
pub use distance_table::{DistanceTable, SettledSet};
pub use frontier::PriorityFrontier;
pub use utils::{SearchOutcome, SearchStats};

/// Runs the search selected by `algorithm`.
pub fn find_distance<G, W>(
    algorithm: Algorithm,
    graph: &G,
    source: &G::Node,
    target: &G::Node,
    weight: W,
    config: &SearchConfig,
) -> Result<SearchOutcome>
where
    G: Graph,
    W: Fn(&G::Node, &G::Node) -> f64,
{
    match algorithm {
        Algorithm::Bidirectional => {
            shortest_distance_with_config(graph, source, target, weight, config)
        }
        Algorithm::Dijkstra => dijkstra_distance_with_config(graph, source, target, weight, config),
    }
}
