use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for the priority queues that drive the relaxation loop
///
/// The queue maps node identifiers to a numeric sort key (the tentative
/// distance) and supports the capability set shortest-path relaxation needs:
/// insert, decrease-key, extract-min and key lookup.
///
/// Extraction order between equal keys is unspecified; implementations are
/// free to break ties in whatever order their internal scan yields.
pub trait DecreaseKeyQueue<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Inserts a node that is not currently present in the queue
    fn insert(&mut self, node: N, key: W);

    /// Inserts the node if absent, otherwise lowers its key in place
    ///
    /// A key that is not strictly smaller than the current one is ignored, so
    /// a node's key is non-increasing across calls for as long as it stays in
    /// the queue.
    fn decrease_or_insert(&mut self, node: N, key: W);

    /// Removes and returns the node with the smallest key, or `None` if the
    /// queue is empty
    fn extract_min(&mut self) -> Option<N>;

    /// Returns the current key of a node, or infinity if it is not present
    fn key_of(&self, node: &N) -> W;

    /// Returns the number of nodes currently in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue holds no nodes
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the name of the queue implementation
    fn name(&self) -> &'static str;
}
