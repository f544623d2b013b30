pub mod algorithm;
pub mod benchmark;
pub mod error;
pub mod graph;
pub mod parsing;
pub mod pathfinding;
pub mod search_config;

// Re-export commonly used items
pub use algorithm::Algorithm;
pub use error::{EmptyFrontier, Endpoint, GraphFileError, Result, SearchError};
pub use graph::{AdjacencyGraph, EdgeWeights, Graph, WeightedGraph};
pub use parsing::{read_graph_file, write_graph_file};
pub use pathfinding::{
    SearchOutcome, SearchStats, dijkstra_distance, find_distance, shortest_distance,
    shortest_distance_with_config,
};
pub use search_config::{SearchConfig, TerminationCheck};
