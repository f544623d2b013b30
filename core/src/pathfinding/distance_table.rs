use rustc_hash::{FxHashMap, FxHashSet};
use std::hash::Hash;

/// Best known distance per node for one search direction; unseen nodes read
/// as infinitely far away.
pub struct DistanceTable<N> {
    distances: FxHashMap<N, f64>,
}

impl<N: Eq + Hash> DistanceTable<N> {
    pub fn new() -> Self {
        Self {
            distances: FxHashMap::default(),
        }
    }

    pub fn get(&self, node: &N) -> f64 {
        self.distances.get(node).copied().unwrap_or(f64::INFINITY)
    }

    /// Overwrites unconditionally; callers check for an improvement first.
    pub fn set(&mut self, node: N, distance: f64) {
        self.distances.insert(node, distance);
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

impl<N: Eq + Hash> Default for DistanceTable<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Nodes whose distance from one search origin is final.
pub struct SettledSet<N> {
    settled: FxHashSet<N>,
}

impl<N: Eq + Hash> SettledSet<N> {
    pub fn new() -> Self {
        Self {
            settled: FxHashSet::default(),
        }
    }

    /// Returns `false` if the node was already settled.
    pub fn insert(&mut self, node: N) -> bool {
        self.settled.insert(node)
    }

    pub fn contains(&self, node: &N) -> bool {
        self.settled.contains(node)
    }

    pub fn len(&self) -> usize {
        self.settled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settled.is_empty()
    }
}

impl<N: Eq + Hash> Default for SettledSet<N> {
    fn default() -> Self {
        Self::new()
    }
}
