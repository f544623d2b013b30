use crate::error::{Endpoint, Result, SearchError};
use crate::graph::Graph;
use std::time::Duration;

/// Counters collected while a query runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchStats {
    pub rounds: usize,
    pub settled_forward: usize,
    pub settled_backward: usize,
    pub frontier_pushes: u64,
    pub elapsed: Duration,
}

impl SearchStats {
    pub fn nodes_settled(&self) -> usize {
        self.settled_forward + self.settled_backward
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub distance: f64,
    pub stats: SearchStats,
}

pub(crate) fn validate_endpoints<G: Graph>(
    graph: &G,
    source: &G::Node,
    target: &G::Node,
) -> Result<()> {
    if source == target {
        return Err(SearchError::InvalidEndpoints);
    }
    if !graph.contains_node(source) {
        return Err(SearchError::MissingNode {
            role: Endpoint::Source,
        });
    }
    if !graph.contains_node(target) {
        return Err(SearchError::MissingNode {
            role: Endpoint::Target,
        });
    }
    Ok(())
}
