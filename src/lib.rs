//! Meld SSSP - Single-Source Shortest Paths over Decrease-Key Priority Queues
//!
//! This library computes shortest paths on static, weighted, directed graphs
//! with non-negative edge weights using Dijkstra's algorithm, parameterized
//! over the priority queue that drives the relaxation loop.
//!
//! Three queue implementations share one contract: a naive re-sorting vector,
//! an ordered doubly-linked list, and a lazy melding heap in the style of a
//! Fibonacci heap (constant-time insert and decrease-key, restructuring
//! deferred to extraction).

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::engine::ShortestPathEngine;
pub use data_structures::{
    DecreaseKeyQueue, LazyMeldHeap, OrderedLinkedList, SortedRescan,
};
/// Re-export main types for convenient use
pub use graph::adjacency::AdjacencyGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Malformed graph input: {0}")]
    MalformedInput(String),

    #[error("Unknown node: {0}")]
    UnknownNode(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
