mod properties;

use bidipath_core::WeightedGraph;

/// Diamond 1-2-4 / 1-3-4; the lower route through 3 is shorter.
pub fn diamond_graph() -> WeightedGraph<u32> {
    let mut graph = WeightedGraph::new();
    graph.add_edge(1, 2, 1.0);
    graph.add_edge(2, 4, 2.0);
    graph.add_edge(1, 3, 1.0);
    graph.add_edge(3, 4, 1.0);
    graph
}

/// s-u-up-t with weights 3 each, plus a detour s-w-t with weights 5 each.
pub fn recitation_graph() -> WeightedGraph<&'static str> {
    let mut graph = WeightedGraph::new();
    graph.add_edge("s", "u", 3.0);
    graph.add_edge("u", "up", 3.0);
    graph.add_edge("up", "t", 3.0);
    graph.add_edge("s", "w", 5.0);
    graph.add_edge("w", "t", 5.0);
    graph
}

/// 0-1-...-(len-1), every edge weighing 1.
pub fn path_graph(len: u32) -> WeightedGraph<u32> {
    let mut graph = WeightedGraph::new();
    for node in 1..len {
        graph.add_edge(node - 1, node, 1.0);
    }
    graph
}

/// `side` x `side` grid with unit edges; node id is `row * side + column`.
pub fn grid_graph(side: u32) -> WeightedGraph<u32> {
    let mut graph = WeightedGraph::new();
    for row in 0..side {
        for column in 0..side {
            let node = row * side + column;
            if column + 1 < side {
                graph.add_edge(node, node + 1, 1.0);
            }
            if row + 1 < side {
                graph.add_edge(node, node + side, 1.0);
            }
        }
    }
    graph
}
