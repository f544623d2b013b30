use super::distance_table::{DistanceTable, SettledSet};
use super::frontier::PriorityFrontier;
use super::utils::{SearchOutcome, SearchStats, validate_endpoints};
use crate::error::{Result, SearchError};
use crate::graph::Graph;
use crate::search_config::{SearchConfig, TerminationCheck};
use std::{hash::Hash, time::Instant};
use tracing::{debug, trace};

/// Queue, tentative distances and settled set of one search direction.
struct SearchSide<N> {
    queue: PriorityFrontier<N>,
    distances: DistanceTable<N>,
    settled: SettledSet<N>,
}

impl<N: Eq + Hash + Clone> SearchSide<N> {
    fn new(origin: N) -> Self {
        let mut queue = PriorityFrontier::new();
        let mut distances = DistanceTable::new();

        distances.set(origin.clone(), 0.0);
        queue.push(0.0, origin);

        Self {
            queue,
            distances,
            settled: SettledSet::new(),
        }
    }

    /// Pops until a node that is not yet settled on this side comes up.
    fn next_unsettled(&mut self) -> Option<N> {
        while let Ok((_, node)) = self.queue.pop_min() {
            if !self.settled.contains(&node) {
                return Some(node);
            }
        }
        None
    }

    /// Relaxes every edge of `node` on this side and lowers `best` through any
    /// edge that lands on a node settled by the opposite side.
    fn relax<G, W>(
        &mut self,
        node: &N,
        graph: &G,
        weight: &W,
        opposite: &SearchSide<N>,
        best: &mut f64,
    ) where
        G: Graph<Node = N>,
        W: Fn(&N, &N) -> f64,
    {
        let node_distance = self.distances.get(node);

        for neighbor in graph.neighbors(node) {
            let through_node = node_distance + weight(node, neighbor);

            if !self.settled.contains(neighbor) && through_node < self.distances.get(neighbor) {
                self.distances.set(neighbor.clone(), through_node);
                self.queue.push(through_node, neighbor.clone());
            }

            if opposite.settled.contains(neighbor) {
                let bridge = through_node + opposite.distances.get(neighbor);
                if bridge < *best {
                    *best = bridge;
                }
            }
        }
    }
}

enum Round {
    Continue,
    Converged(f64),
    Exhausted,
}

struct BidirectionalSearch<N> {
    forward: SearchSide<N>,
    backward: SearchSide<N>,
    best: f64,
    rounds: usize,
}

impl<N: Eq + Hash + Clone> BidirectionalSearch<N> {
    fn new(source: N, target: N) -> Self {
        Self {
            forward: SearchSide::new(source),
            backward: SearchSide::new(target),
            best: f64::INFINITY,
            rounds: 0,
        }
    }

    fn run<G, W>(&mut self, graph: &G, weight: &W, config: &SearchConfig) -> Result<f64>
    where
        G: Graph<Node = N>,
        W: Fn(&N, &N) -> f64,
    {
        loop {
            if config.round_budget_spent(self.rounds) {
                return Err(SearchError::RoundLimitExceeded {
                    rounds: self.rounds,
                });
            }
            self.rounds += 1;

            let round = match config.termination {
                TerminationCheck::Peek => self.settled_round(graph, weight),
                TerminationCheck::Popped => self.popped_round(graph, weight),
            };

            match round {
                Round::Continue => {
                    trace!(round = self.rounds, best = self.best, "round finished");
                }
                Round::Converged(distance) => return Ok(distance),
                // With one side fully drained every crossing edge has been
                // examined, so a finite bound is already exact.
                Round::Exhausted if self.best.is_finite() => return Ok(self.best),
                Round::Exhausted => return Err(SearchError::FrontierExhausted),
            }
        }
    }

    fn settled_round<G, W>(&mut self, graph: &G, weight: &W) -> Round
    where
        G: Graph<Node = N>,
        W: Fn(&N, &N) -> f64,
    {
        let Some(forward_node) = self.forward.next_unsettled() else {
            return Round::Exhausted;
        };
        let Some(backward_node) = self.backward.next_unsettled() else {
            return Round::Exhausted;
        };

        self.forward.settled.insert(forward_node.clone());
        self.backward.settled.insert(backward_node.clone());

        self.forward
            .relax(&forward_node, graph, weight, &self.backward, &mut self.best);
        self.backward
            .relax(&backward_node, graph, weight, &self.forward, &mut self.best);

        self.check_convergence(&forward_node, &backward_node)
    }

    fn popped_round<G, W>(&mut self, graph: &G, weight: &W) -> Round
    where
        G: Graph<Node = N>,
        W: Fn(&N, &N) -> f64,
    {
        let (Ok((_, forward_node)), Ok((_, backward_node))) =
            (self.forward.queue.pop_min(), self.backward.queue.pop_min())
        else {
            return Round::Exhausted;
        };

        let forward_fresh = self.forward.settled.insert(forward_node.clone());
        let backward_fresh = self.backward.settled.insert(backward_node.clone());

        if forward_fresh {
            self.forward
                .relax(&forward_node, graph, weight, &self.backward, &mut self.best);
        }
        if backward_fresh {
            self.backward
                .relax(&backward_node, graph, weight, &self.forward, &mut self.best);
        }

        self.check_convergence(&forward_node, &backward_node)
    }

    fn check_convergence(&self, forward_node: &N, backward_node: &N) -> Round {
        let reach = self.forward.distances.get(forward_node)
            + self.backward.distances.get(backward_node);

        if reach >= self.best {
            Round::Converged(self.best)
        } else {
            Round::Continue
        }
    }

    fn stats(&self, search_timer: Instant) -> SearchStats {
        SearchStats {
            rounds: self.rounds,
            settled_forward: self.forward.settled.len(),
            settled_backward: self.backward.settled.len(),
            frontier_pushes: self.forward.queue.pushes() + self.backward.queue.pushes(),
            elapsed: search_timer.elapsed(),
        }
    }
}

/// Length of the shortest path between `source` and `target` in an undirected
/// graph, found by growing one Dijkstra frontier from each end.
///
/// `weight` must be symmetric and return finite, non-negative values for every
/// adjacent pair. Negative weights are not detected; the result is then
/// unspecified.
///
/// # Errors
///
/// * [`SearchError::InvalidEndpoints`] if `source == target`.
/// * [`SearchError::MissingNode`] if either endpoint is not in the graph.
/// * [`SearchError::FrontierExhausted`] if `target` is unreachable.
pub fn shortest_distance<G, W>(
    graph: &G,
    source: &G::Node,
    target: &G::Node,
    weight: W,
) -> Result<f64>
where
    G: Graph,
    W: Fn(&G::Node, &G::Node) -> f64,
{
    shortest_distance_with_config(graph, source, target, weight, &SearchConfig::default())
        .map(|outcome| outcome.distance)
}

/// Same search as [`shortest_distance`], with a round budget and choice of
/// stopping rule, reporting search statistics alongside the distance.
///
/// Exceeding `config.max_rounds` yields [`SearchError::RoundLimitExceeded`].
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(termination = config.termination.as_str(), max_rounds = ?config.max_rounds)
)]
pub fn shortest_distance_with_config<G, W>(
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
    validate_endpoints(graph, source, target)?;

    let search_timer = Instant::now();
    let mut search = BidirectionalSearch::new(source.clone(), target.clone());
    let result = search.run(graph, &weight, config);
    let stats = search.stats(search_timer);

    match result {
        Ok(distance) => {
            debug!(
                distance,
                rounds = stats.rounds,
                settled = stats.nodes_settled(),
                "frontiers converged"
            );
            Ok(SearchOutcome { distance, stats })
        }
        Err(error) => {
            debug!(
                error = %error,
                rounds = stats.rounds,
                settled = stats.nodes_settled(),
                "search ended without a distance"
            );
            Err(error)
        }
    }
}
