use super::distance_table::{DistanceTable, SettledSet};
use super::frontier::PriorityFrontier;
use super::utils::{SearchOutcome, SearchStats, validate_endpoints};
use crate::error::{Result, SearchError};
use crate::graph::Graph;
use crate::search_config::SearchConfig;
use std::{hash::Hash, time::Instant};
use tracing::debug;

struct DijkstraState<N> {
    queue: PriorityFrontier<N>,
    distances: DistanceTable<N>,
    settled: SettledSet<N>,
}

impl<N: Eq + Hash + Clone> DijkstraState<N> {
    fn new(start: N) -> Self {
        let mut queue = PriorityFrontier::new();
        let mut distances = DistanceTable::new();

        distances.set(start.clone(), 0.0);
        queue.push(0.0, start);

        Self {
            queue,
            distances,
            settled: SettledSet::new(),
        }
    }

    fn visit_neighbor(&mut self, neighbor: &N, current_cost: f64, edge_weight: f64) {
        if self.settled.contains(neighbor) {
            return;
        }

        let new_cost = current_cost + edge_weight;
        if new_cost >= self.distances.get(neighbor) {
            return;
        }

        self.distances.set(neighbor.clone(), new_cost);
        self.queue.push(new_cost, neighbor.clone());
    }

    fn stats(&self, rounds: usize, search_timer: Instant) -> SearchStats {
        SearchStats {
            rounds,
            settled_forward: self.settled.len(),
            settled_backward: 0,
            frontier_pushes: self.queue.pushes(),
            elapsed: search_timer.elapsed(),
        }
    }
}

/// Single-source Dijkstra from `source`, stopping as soon as `target` is
/// settled. Shares the error contract of
/// [`shortest_distance`](super::shortest_distance) and serves as its
/// reference.
pub fn dijkstra_distance<G, W>(
    graph: &G,
    source: &G::Node,
    target: &G::Node,
    weight: W,
) -> Result<SearchOutcome>
where
    G: Graph,
    W: Fn(&G::Node, &G::Node) -> f64,
{
    dijkstra_distance_with_config(graph, source, target, weight, &SearchConfig::default())
}

/// One round here is one settled node. The termination rule in `config`
/// only applies to the bidirectional search and is ignored.
#[tracing::instrument(level = "debug", skip_all, fields(max_rounds = ?config.max_rounds))]
pub fn dijkstra_distance_with_config<G, W>(
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
    let mut dijkstra_state = DijkstraState::new(source.clone());
    let mut rounds = 0;

    while let Ok((cost, current)) = dijkstra_state.queue.pop_min() {
        if !dijkstra_state.settled.insert(current.clone()) {
            continue;
        }

        if current == *target {
            let stats = dijkstra_state.stats(rounds, search_timer);
            debug!(distance = cost, settled = stats.settled_forward, "target settled");
            return Ok(SearchOutcome {
                distance: cost,
                stats,
            });
        }

        if config.round_budget_spent(rounds) {
            return Err(SearchError::RoundLimitExceeded { rounds });
        }
        rounds += 1;

        for neighbor in graph.neighbors(&current) {
            dijkstra_state.visit_neighbor(neighbor, cost, weight(&current, neighbor));
        }
    }

    debug!(
        settled = dijkstra_state.settled.len(),
        "queue drained before reaching target"
    );
    Err(SearchError::FrontierExhausted)
}
