use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{Error, Result};

/// A directed graph stored as nested adjacency maps: node -> neighbor -> weight
///
/// Node identifiers are opaque tokens; a node is *known* to the graph only if
/// it appeared as a left-hand-side entry when the graph was built. Identifiers
/// that occur solely as neighbors can be traversed into but are not valid
/// query endpoints.
///
/// The graph is immutable once built.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each known node
    adjacency: HashMap<N, HashMap<N, W>>,
}

impl<N, W> AdjacencyGraph<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy,
{
    /// Builds a graph from a collection of `(node, [(neighbor, weight), ...])`
    /// entries.
    ///
    /// Fails with [`Error::MalformedInput`] if the edge list is empty or any
    /// weight is NaN. Duplicate edges are resolved last-write-wins, for
    /// repeated neighbor entries within one node and for repeated node
    /// entries alike.
    ///
    /// Negative weights are accepted as-is; they violate the assumptions of
    /// the shortest-path algorithm and yield undefined (non-crashing) results.
    pub fn from_edges<I, E>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, E)>,
        E: IntoIterator<Item = (N, W)>,
    {
        let mut adjacency: HashMap<N, HashMap<N, W>> = HashMap::new();

        for (node, neighbors) in edges {
            let entry = adjacency.entry(node.clone()).or_default();
            for (neighbor, weight) in neighbors {
                if weight.is_nan() {
                    return Err(Error::MalformedInput(format!(
                        "edge {:?} -> {:?} has a NaN weight",
                        node, neighbor
                    )));
                }
                entry.insert(neighbor, weight);
            }
        }

        if adjacency.is_empty() {
            return Err(Error::MalformedInput("edge list is empty".to_string()));
        }

        Ok(AdjacencyGraph { adjacency })
    }

    /// Returns true if the node was declared when the graph was built
    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Returns an iterator over the outgoing edges of a node
    ///
    /// Unknown nodes yield an empty iterator.
    pub fn neighbors(&self, node: &N) -> impl Iterator<Item = (&N, W)> + '_ {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|edges| edges.iter().map(|(n, w)| (n, *w)))
    }

    /// Gets the weight of an edge if it exists
    pub fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.adjacency.get(from).and_then(|edges| edges.get(to)).copied()
    }

    /// Returns an iterator over the known nodes
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.adjacency.keys()
    }

    /// Returns the number of known nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }
}
