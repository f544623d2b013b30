use crate::algorithm::Algorithm;
use crate::error::SearchError;
use crate::graph::Graph;
use crate::pathfinding::{SearchOutcome, find_distance};
use crate::search_config::SearchConfig;
use serde::Serialize;
use std::fmt::Display;

/// Relative tolerance when comparing the two algorithms' distances.
const AGREEMENT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmRun {
    pub algorithm: Algorithm,
    /// `None` when the query ended in an error, see `error`.
    pub distance: Option<f64>,
    pub error: Option<&'static str>,
    pub nodes_settled: usize,
    pub rounds: usize,
    pub time_us: u128,
}

impl AlgorithmRun {
    fn from_result(algorithm: Algorithm, result: &Result<SearchOutcome, SearchError>) -> Self {
        match result {
            Ok(outcome) => Self {
                algorithm,
                distance: Some(outcome.distance),
                error: None,
                nodes_settled: outcome.stats.nodes_settled(),
                rounds: outcome.stats.rounds,
                time_us: outcome.stats.elapsed.as_micros(),
            },
            Err(error) => Self {
                algorithm,
                distance: None,
                error: Some(error.kind()),
                nodes_settled: 0,
                rounds: 0,
                time_us: 0,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkResult {
    pub source: String,
    pub target: String,
    pub bidirectional: AlgorithmRun,
    pub dijkstra: AlgorithmRun,
    pub agree: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BenchmarkSummary {
    pub trials: usize,
    pub agreements: usize,
    pub unreachable: usize,
    pub mean_settled_bidirectional: f64,
    pub mean_settled_dijkstra: f64,
}

impl From<&[BenchmarkResult]> for BenchmarkSummary {
    fn from(results: &[BenchmarkResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let trials = results.len();
        let mean = |settled: usize| settled as f64 / trials as f64;

        Self {
            trials,
            agreements: results.iter().filter(|result| result.agree).count(),
            unreachable: results
                .iter()
                .filter(|result| result.dijkstra.error == Some(SearchError::FrontierExhausted.kind()))
                .count(),
            mean_settled_bidirectional: mean(
                results.iter().map(|result| result.bidirectional.nodes_settled).sum(),
            ),
            mean_settled_dijkstra: mean(
                results.iter().map(|result| result.dijkstra.nodes_settled).sum(),
            ),
        }
    }
}

/// Runs both algorithms on every pair and records whether they agree.
pub fn compare_algorithms<G, W>(
    graph: &G,
    weight: W,
    pairs: &[(G::Node, G::Node)],
    config: &SearchConfig,
) -> Vec<BenchmarkResult>
where
    G: Graph,
    G::Node: Display,
    W: Fn(&G::Node, &G::Node) -> f64,
{
    pairs
        .iter()
        .map(|(source, target)| {
            let bidirectional = find_distance(
                Algorithm::Bidirectional,
                graph,
                source,
                target,
                &weight,
                config,
            );
            let dijkstra = find_distance(Algorithm::Dijkstra, graph, source, target, &weight, config);

            BenchmarkResult {
                source: source.to_string(),
                target: target.to_string(),
                agree: results_agree(&bidirectional, &dijkstra),
                bidirectional: AlgorithmRun::from_result(Algorithm::Bidirectional, &bidirectional),
                dijkstra: AlgorithmRun::from_result(Algorithm::Dijkstra, &dijkstra),
            }
        })
        .collect()
}

fn results_agree(
    bidirectional: &Result<SearchOutcome, SearchError>,
    dijkstra: &Result<SearchOutcome, SearchError>,
) -> bool {
    match (bidirectional, dijkstra) {
        (Ok(a), Ok(b)) => {
            let scale = a.distance.abs().max(b.distance.abs()).max(1.0);
            (a.distance - b.distance).abs() <= AGREEMENT_TOLERANCE * scale
        }
        (Err(a), Err(b)) => a == b,
        _ => false,
    }
}
