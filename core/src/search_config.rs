use serde::{Deserialize, Serialize};

/// How the bidirectional search evaluates its stopping rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TerminationCheck {
    /// Discard stale frontier entries on both sides first, then test the
    /// distances of the two nodes actually settled this round.
    #[default]
    Peek,
    /// Test the distances of whatever was popped, even when a side only
    /// produced a stale entry and skipped its relaxation.
    Popped,
}

impl TerminationCheck {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerminationCheck::Peek => "peek",
            TerminationCheck::Popped => "popped",
        }
    }
}

/// Configuration for a single shortest-distance query
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Stop with an error after this many rounds (one forward plus one
    /// backward step per round). `None` runs until the search converges.
    pub max_rounds: Option<usize>,
    pub termination: TerminationCheck,
}

impl SearchConfig {
    pub fn new(max_rounds: Option<usize>, termination: TerminationCheck) -> Self {
        Self {
            max_rounds,
            termination,
        }
    }

    pub fn with_max_rounds(mut self, max_rounds: usize) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    pub fn with_termination(mut self, termination: TerminationCheck) -> Self {
        self.termination = termination;
        self
    }

    pub(crate) fn round_budget_spent(&self, rounds: usize) -> bool {
        self.max_rounds.is_some_and(|limit| rounds >= limit)
    }
}
