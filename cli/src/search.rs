use anyhow::{Context, Result};
use bidipath_core::{
    Algorithm, SearchConfig, SearchError, SearchStats, TerminationCheck, WeightedGraph,
    find_distance,
};
use uuid::Uuid;

use crate::args::DistanceArgs;

pub struct SearchRequest {
    pub source: Uuid,
    pub target: Uuid,
    pub algorithm: Algorithm,
    pub config: SearchConfig,
}

pub struct SearchResult {
    pub source: Uuid,
    pub target: Uuid,
    pub algorithm: Algorithm,
    /// `None` when the target cannot be reached from the source.
    pub distance: Option<f64>,
    pub stats: Option<SearchStats>,
}

pub fn parse_termination(value: &str) -> TerminationCheck {
    match value {
        "popped" => TerminationCheck::Popped,
        _ => TerminationCheck::Peek,
    }
}

pub fn create_search_request(args: &DistanceArgs) -> Result<SearchRequest> {
    let source = parse_node_id(&args.source)?;
    let target = parse_node_id(&args.target)?;

    Ok(SearchRequest {
        source,
        target,
        algorithm: Algorithm::from(args.algorithm.as_str()),
        config: SearchConfig::new(args.max_rounds, parse_termination(&args.termination)),
    })
}

fn parse_node_id(value: &str) -> Result<Uuid> {
    Uuid::parse_str(value.trim()).with_context(|| format!("'{value}' is not a valid node UUID"))
}

/// Runs the requested search. An unreachable target is a regular result;
/// every other search error is returned.
pub fn execute_search(request: &SearchRequest, graph: &WeightedGraph<Uuid>) -> Result<SearchResult> {
    let outcome = find_distance(
        request.algorithm,
        graph,
        &request.source,
        &request.target,
        graph.weight_fn(),
        &request.config,
    );

    let (distance, stats) = match outcome {
        Ok(outcome) => (Some(outcome.distance), Some(outcome.stats)),
        Err(SearchError::FrontierExhausted) => (None, None),
        Err(error) => return Err(error).context("search failed"),
    };

    Ok(SearchResult {
        source: request.source,
        target: request.target,
        algorithm: request.algorithm,
        distance,
        stats,
    })
}
