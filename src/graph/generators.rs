use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Node identifier used by the grid generator: 1-based (column, row)
pub type GridNode = (i32, i32);

/// Edge-list shape accepted by [`AdjacencyGraph::from_edges`](crate::AdjacencyGraph::from_edges)
pub type EdgeList<N> = Vec<(N, Vec<(N, OrderedFloat<f64>)>)>;

/// Generates the edge list of an 8-connected grid with unit weights
///
/// Cells are addressed `(i, j)` with `1 <= i <= width` and `1 <= j <= height`.
/// Boundary cells simply omit out-of-range neighbors. The grid exists to
/// stress-test queue performance; with unit weights the shortest path between
/// opposite corners takes `max(width, height) - 1` diagonal-dominated hops.
pub fn generate_grid_edges(width: i32, height: i32) -> EdgeList<GridNode> {
    assert!(width > 0, "width must be positive");
    assert!(height > 0, "height must be positive");

    let offsets: [(i32, i32); 8] = [
        (0, 1),
        (1, 1),
        (1, 0),
        (1, -1),
        (0, -1),
        (-1, -1),
        (-1, 0),
        (-1, 1),
    ];

    let mut edges = Vec::with_capacity((width * height) as usize);

    for i in 1..=width {
        for j in 1..=height {
            let mut connections = Vec::new();

            for (di, dj) in offsets {
                let ni = i + di;
                let nj = j + dj;
                if ni >= 1 && ni <= width && nj >= 1 && nj <= height {
                    connections.push(((ni, nj), OrderedFloat(1.0)));
                }
            }

            edges.push(((i, j), connections));
        }
    }

    edges
}

/// Generates the edge list of a random directed graph
///
/// Every node in `0..nodes` appears as an entry, each with `edges_per_node`
/// outgoing edges to uniformly chosen targets (self-loops excluded) and
/// weights drawn from `[1.0, 100.0)`. Duplicate targets collapse
/// last-write-wins when the list is turned into a graph.
pub fn generate_random_edges<R: Rng>(
    nodes: usize,
    edges_per_node: usize,
    rng: &mut R,
) -> EdgeList<usize> {
    assert!(nodes > 1, "need at least two nodes");

    let mut edges = Vec::with_capacity(nodes);

    for u in 0..nodes {
        let mut connections = Vec::with_capacity(edges_per_node);
        while connections.len() < edges_per_node {
            let v = rng.gen_range(0..nodes);
            if v != u {
                let weight = OrderedFloat(rng.gen_range(1.0..100.0));
                connections.push((v, weight));
            }
        }
        edges.push((u, connections));
    }

    edges
}
