use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Read-only view of an undirected graph, as consumed by the searches.
///
/// Adjacency is expected to be symmetric: if `b` is among the neighbors of
/// `a`, then `a` is among the neighbors of `b`.
pub trait Graph {
    type Node: Eq + Hash + Clone;

    fn contains_node(&self, node: &Self::Node) -> bool;

    fn neighbors(&self, node: &Self::Node) -> impl Iterator<Item = &Self::Node>;

    fn node_count(&self) -> usize;
}

#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N> {
    adjacency: FxHashMap<N, Vec<N>>,
}

impl<N: Eq + Hash + Clone> AdjacencyGraph<N> {
    pub fn new() -> Self {
        Self {
            adjacency: FxHashMap::default(),
        }
    }

    pub fn add_node(&mut self, node: N) {
        self.adjacency.entry(node).or_default();
    }

    /// Connects `a` and `b` in both directions. Repeated edges are ignored and
    /// a self-loop is stored once.
    pub fn add_edge(&mut self, a: N, b: N) {
        let a_neighbors = self.adjacency.entry(a.clone()).or_default();
        if !a_neighbors.contains(&b) {
            a_neighbors.push(b.clone());
        }

        let b_neighbors = self.adjacency.entry(b).or_default();
        if !b_neighbors.contains(&a) {
            b_neighbors.push(a);
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.keys()
    }

    pub fn degree(&self, node: &N) -> usize {
        self.adjacency.get(node).map_or(0, Vec::len)
    }
}

impl<N: Eq + Hash + Clone> Default for AdjacencyGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash + Clone> Graph for AdjacencyGraph<N> {
    type Node = N;

    fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    fn neighbors(&self, node: &N) -> impl Iterator<Item = &N> {
        self.adjacency
            .get(node)
            .map(|neighbors| neighbors.as_slice())
            .unwrap_or_default()
            .iter()
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }
}

/// Symmetric edge weights: `get(a, b) == get(b, a)` for every stored pair.
#[derive(Debug, Clone)]
pub struct EdgeWeights<N> {
    edges: Vec<(N, N, f64)>,
    index: FxHashMap<(N, N), usize>,
}

impl<N: Eq + Hash + Clone> EdgeWeights<N> {
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Stores `weight` for the unordered pair, replacing any earlier value.
    pub fn insert(&mut self, a: N, b: N, weight: f64) {
        if let Some(&position) = self.index.get(&(a.clone(), b.clone())) {
            self.edges[position].2 = weight;
            return;
        }

        let position = self.edges.len();
        self.index.insert((a.clone(), b.clone()), position);
        self.index.insert((b.clone(), a.clone()), position);
        self.edges.push((a, b, weight));
    }

    pub fn get(&self, a: &N, b: &N) -> Option<f64> {
        self.index
            .get(&(a.clone(), b.clone()))
            .map(|&position| self.edges[position].2)
    }

    /// Each edge once, in insertion order.
    pub fn edges(&self) -> &[(N, N, f64)] {
        &self.edges
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// A pure lookup closure suitable as the search weight function. Pairs
    /// without a stored weight read as infinitely expensive.
    pub fn weight_fn(&self) -> impl Fn(&N, &N) -> f64 + '_ {
        move |a, b| self.get(a, b).unwrap_or(f64::INFINITY)
    }
}

impl<N: Eq + Hash + Clone> Default for EdgeWeights<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// An [`AdjacencyGraph`] together with the weights of its edges.
#[derive(Debug, Clone)]
pub struct WeightedGraph<N> {
    graph: AdjacencyGraph<N>,
    weights: EdgeWeights<N>,
}

impl<N: Eq + Hash + Clone> WeightedGraph<N> {
    pub fn new() -> Self {
        Self {
            graph: AdjacencyGraph::new(),
            weights: EdgeWeights::new(),
        }
    }

    pub fn add_node(&mut self, node: N) {
        self.graph.add_node(node);
    }

    pub fn add_edge(&mut self, a: N, b: N, weight: f64) {
        self.graph.add_edge(a.clone(), b.clone());
        self.weights.insert(a, b, weight);
    }

    pub fn adjacency(&self) -> &AdjacencyGraph<N> {
        &self.graph
    }

    pub fn weights(&self) -> &EdgeWeights<N> {
        &self.weights
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.graph.nodes()
    }

    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    pub fn weight_fn(&self) -> impl Fn(&N, &N) -> f64 + '_ {
        self.weights.weight_fn()
    }
}

impl<N: Eq + Hash + Clone> Default for WeightedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash + Clone> Graph for WeightedGraph<N> {
    type Node = N;

    fn contains_node(&self, node: &N) -> bool {
        self.graph.contains_node(node)
    }

    fn neighbors(&self, node: &N) -> impl Iterator<Item = &N> {
        self.graph.neighbors(node)
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}
