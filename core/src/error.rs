use std::fmt;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Which end of a query a [`SearchError::MissingNode`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Target,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => f.write_str("source"),
            Endpoint::Target => f.write_str("target"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("source and target must be distinct nodes")]
    InvalidEndpoints,
    #[error("{role} node is not part of the graph")]
    MissingNode { role: Endpoint },
    #[error("frontiers exhausted without meeting: target is unreachable from source")]
    FrontierExhausted,
    #[error("search stopped after {rounds} rounds without converging")]
    RoundLimitExceeded { rounds: usize },
}

impl SearchError {
    /// Short machine-readable name, used in benchmark reports and JSON output.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::InvalidEndpoints => "invalid_endpoints",
            SearchError::MissingNode { .. } => "missing_node",
            SearchError::FrontierExhausted => "unreachable",
            SearchError::RoundLimitExceeded { .. } => "round_limit_exceeded",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("priority frontier is empty")]
pub struct EmptyFrontier;

#[derive(Debug, Error)]
pub enum GraphFileError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("graph data truncated: needed {expected} bytes, {actual} remaining")]
    Truncated { expected: usize, actual: usize },
    #[error("edge {index} has a negative weight")]
    NegativeWeight { index: usize },
    #[error("edge {index} has a non-finite weight")]
    NonFiniteWeight { index: usize },
}
