use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::data_structures::DecreaseKeyQueue;

/// The naive baseline: a vector re-sorted in full on every mutation
///
/// Entries are kept sorted descending by key so that the minimum sits at the
/// back and extraction is a pop. Insert and decrease-key each cost a full
/// O(n log n) sort; correct, slow, and useful only as an oracle.
#[derive(Debug)]
pub struct SortedRescan<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Sorted descending by key; the minimum is the last element
    entries: Vec<(N, W)>,

    /// Current key per node, for O(1) lookup
    keys: HashMap<N, W>,
}

impl<N, W> SortedRescan<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        SortedRescan {
            entries: Vec::new(),
            keys: HashMap::new(),
        }
    }

    fn resort(&mut self) {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
    }
}

impl<N, W> Default for SortedRescan<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    fn default() -> Self {
        SortedRescan::new()
    }
}

impl<N, W> DecreaseKeyQueue<N, W> for SortedRescan<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    fn insert(&mut self, node: N, key: W) {
        debug_assert!(
            !self.keys.contains_key(&node),
            "insert on a node already in the queue"
        );
        self.keys.insert(node.clone(), key);
        self.entries.push((node, key));
        self.resort();
    }

    fn decrease_or_insert(&mut self, node: N, key: W) {
        match self.keys.get(&node) {
            None => self.insert(node, key),
            Some(&current) => {
                if key >= current {
                    return;
                }
                self.keys.insert(node.clone(), key);
                if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == node) {
                    entry.1 = key;
                }
                self.resort();
            }
        }
    }

    fn extract_min(&mut self) -> Option<N> {
        let (node, _) = self.entries.pop()?;
        self.keys.remove(&node);
        Some(node)
    }

    fn key_of(&self, node: &N) -> W {
        self.keys.get(node).copied().unwrap_or_else(W::infinity)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn name(&self) -> &'static str {
        "SortedRescan"
    }
}
