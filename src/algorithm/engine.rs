use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::data_structures::{DecreaseKeyQueue, LazyMeldHeap};
use crate::graph::AdjacencyGraph;
use crate::{Error, Result};

/// Per-query scratch state: tentative distances and predecessor links
///
/// Nodes absent from the distance map are at infinity; the maps fill in
/// lazily as relaxation touches nodes. Fresh for every query, never shared.
#[derive(Debug)]
struct QueryState<N, W> {
    distance: HashMap<N, W>,
    predecessor: HashMap<N, N>,
}

impl<N, W> QueryState<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    fn new() -> Self {
        QueryState {
            distance: HashMap::new(),
            predecessor: HashMap::new(),
        }
    }

    fn distance_of(&self, node: &N) -> W {
        self.distance.get(node).copied().unwrap_or_else(W::infinity)
    }

    /// Walks predecessor links from `target` back to (but excluding)
    /// `source`, returning the path in forward order
    fn rebuild_path(&self, source: &N, target: &N) -> Vec<N> {
        let mut path = Vec::new();
        let mut cursor = target;
        loop {
            path.push(cursor.clone());
            match self.predecessor.get(cursor) {
                Some(prev) if prev == source => break,
                Some(prev) => cursor = prev,
                None => break,
            }
        }
        path.reverse();
        path
    }
}

/// Dijkstra's algorithm over an immutable graph, parameterized over the
/// priority queue that drives the relaxation loop
///
/// The engine owns the adjacency model; each query builds its own queue and
/// scratch state, so a shared engine can serve any number of sequential (or,
/// via `&self`, concurrent) queries.
#[derive(Debug)]
pub struct ShortestPathEngine<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    graph: AdjacencyGraph<N, W>,
}

impl<N, W> ShortestPathEngine<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Creates an engine owning the given graph
    pub fn new(graph: AdjacencyGraph<N, W>) -> Self {
        ShortestPathEngine { graph }
    }

    /// Returns the underlying graph
    pub fn graph(&self) -> &AdjacencyGraph<N, W> {
        &self.graph
    }

    /// Finds a shortest path using the default queue, the lazy melding heap
    ///
    /// See [`shortest_path_with`](Self::shortest_path_with) for the contract.
    pub fn shortest_path(&self, source: &N, target: &N) -> Result<Vec<N>> {
        self.shortest_path_with::<LazyMeldHeap<N, W>>(source, target)
    }

    /// Finds a shortest path from `source` to `target` using queue `Q`
    ///
    /// Returns the ordered node sequence excluding the source and including
    /// the target, the empty sequence when `source == target` (zero hops) or
    /// when the target is unreachable, and [`Error::UnknownNode`] when either
    /// endpoint was never declared in the graph.
    ///
    /// Which of several equal-cost paths is returned depends on the queue's
    /// tie-breaking and is unspecified; the total cost is not.
    pub fn shortest_path_with<Q>(&self, source: &N, target: &N) -> Result<Vec<N>>
    where
        Q: DecreaseKeyQueue<N, W> + Default,
    {
        if !self.graph.contains(source) {
            return Err(Error::UnknownNode(format!("{:?}", source)));
        }
        if !self.graph.contains(target) {
            return Err(Error::UnknownNode(format!("{:?}", target)));
        }

        // Already at target
        if source == target {
            return Ok(Vec::new());
        }

        let mut state = QueryState::new();
        let mut queue = Q::default();
        state.distance.insert(source.clone(), W::zero());
        queue.insert(source.clone(), W::zero());

        let mut extractions = 0usize;
        let mut relaxations = 0usize;

        while let Some(u) = queue.extract_min() {
            extractions += 1;

            if &u == target {
                log::debug!(
                    "{}: reached target after {} extractions, {} relaxations",
                    queue.name(),
                    extractions,
                    relaxations
                );
                return Ok(state.rebuild_path(source, target));
            }

            // All remaining nodes are inaccessible from the source
            let dist_u = state.distance_of(&u);
            if dist_u == W::infinity() {
                return Ok(Vec::new());
            }

            for (v, weight) in self.graph.neighbors(&u) {
                let candidate = dist_u + weight;
                if candidate < state.distance_of(v) {
                    state.distance.insert(v.clone(), candidate);
                    state.predecessor.insert(v.clone(), u.clone());
                    queue.decrease_or_insert(v.clone(), candidate);
                    relaxations += 1;
                }
            }
        }

        log::debug!(
            "{}: queue exhausted after {} extractions, target unreachable",
            queue.name(),
            extractions
        );
        Ok(Vec::new())
    }

    /// Sums the edge weights along a path as returned by
    /// [`shortest_path`](Self::shortest_path)
    ///
    /// The empty path costs zero. Returns `None` if some hop is not an edge
    /// of the graph.
    pub fn path_cost(&self, source: &N, path: &[N]) -> Option<W> {
        let mut total = W::zero();
        let mut prev = source;
        for node in path {
            total = total + self.graph.edge_weight(prev, node)?;
            prev = node;
        }
        Some(total)
    }
}
