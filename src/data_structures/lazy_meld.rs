use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::mem;

use crate::data_structures::DecreaseKeyQueue;

/// One heap entry, owned by the arena
///
/// Parent and child links are arena indices, never references: the child list
/// is the owning edge, the parent index is only a back-pointer used while
/// restructuring.
#[derive(Debug)]
struct Entry<N, W> {
    node: N,
    key: W,
    /// Number of children at the time of the last consolidation. Detaching
    /// entries decrements ancestor ranks without re-counting, so this is a
    /// bucketing hint, not the exact subtree shape.
    rank: usize,
    parent: Option<usize>,
    children: Vec<usize>,
}

/// A lazily restructured melding heap in the style of a Fibonacci heap
///
/// Insert and decrease-key touch only the entry itself and the root list; all
/// restructuring is deferred to [`extract_min`](DecreaseKeyQueue::extract_min),
/// which melds equal-rank root trees pairwise and then rescans the root list
/// for the new minimum. That rescan is the only place the minimum pointer is
/// recomputed; every other operation merely challenges it with a candidate.
///
/// Entries live in an arena of slots indexed by `usize`, with freed slots
/// recycled. Heap order (child key >= parent key) is established when trees
/// are melded and restored on decrease-key by cutting the offending entry
/// back to the root list.
#[derive(Debug)]
pub struct LazyMeldHeap<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Arena of entries; `None` marks a vacant slot
    slots: Vec<Option<Entry<N, W>>>,

    /// Vacant slot indices available for reuse
    free: Vec<usize>,

    /// Maps nodes currently in the heap to their arena slot
    index: HashMap<N, usize>,

    /// Slots of all parentless entries, in no particular order
    roots: Vec<usize>,

    /// Root slot holding the smallest key, if the heap is non-empty
    min: Option<usize>,
}

impl<N, W> LazyMeldHeap<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        LazyMeldHeap {
            slots: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
            roots: Vec::new(),
            min: None,
        }
    }

    /// Removes an arbitrary node from the heap
    ///
    /// The entry's children are promoted to its former parent, or to the root
    /// list when the entry was itself a root, and ancestor ranks along the
    /// path to the root are decremented. Returns false if the node is not in
    /// the heap.
    pub fn remove(&mut self, node: &N) -> bool {
        let slot = match self.index.get(node) {
            Some(&slot) => slot,
            None => return false,
        };
        self.detach(slot);
        if self.min == Some(slot) {
            self.rescan_min();
        }
        true
    }

    fn entry(&self, slot: usize) -> &Entry<N, W> {
        self.slots[slot].as_ref().expect("arena slot is vacant")
    }

    fn entry_mut(&mut self, slot: usize) -> &mut Entry<N, W> {
        self.slots[slot].as_mut().expect("arena slot is vacant")
    }

    fn alloc(&mut self, entry: Entry<N, W>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(entry);
                slot
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        }
    }

    /// Replaces the minimum pointer if the candidate root has a smaller key
    fn challenge_min(&mut self, slot: usize) {
        match self.min {
            Some(min) if self.entry(min).key <= self.entry(slot).key => {}
            _ => self.min = Some(slot),
        }
    }

    /// Hands all children of `slot` to `adoptive`, or to the root list
    fn release_children(&mut self, slot: usize, adoptive: Option<usize>) {
        let children = mem::take(&mut self.entry_mut(slot).children);
        for &child in &children {
            self.entry_mut(child).parent = adoptive;
        }
        match adoptive {
            Some(parent) => self.entry_mut(parent).children.extend(children),
            None => self.roots.extend(children),
        }
    }

    /// Decrements the rank of every entry from `from` up to its root
    fn decrement_ancestors(&mut self, from: usize) {
        let mut cursor = Some(from);
        while let Some(slot) = cursor {
            let entry = self.entry_mut(slot);
            entry.rank = entry.rank.saturating_sub(1);
            cursor = entry.parent;
        }
    }

    /// Cuts a parented entry whose key now undercuts its parent's key
    ///
    /// The entry rejoins the root list with rank 0 and no children; its
    /// children stay behind under the former parent.
    fn cut_to_root(&mut self, slot: usize, parent: usize) {
        self.entry_mut(parent).children.retain(|&c| c != slot);
        self.release_children(slot, Some(parent));
        let entry = self.entry_mut(slot);
        entry.parent = None;
        entry.rank = 0;
        self.roots.push(slot);
        self.decrement_ancestors(parent);
    }

    /// Unlinks an entry from the forest entirely and frees its slot
    fn detach(&mut self, slot: usize) -> Entry<N, W> {
        match self.entry(slot).parent {
            None => {
                if let Some(pos) = self.roots.iter().position(|&r| r == slot) {
                    self.roots.swap_remove(pos);
                }
                self.release_children(slot, None);
            }
            Some(parent) => {
                self.entry_mut(parent).children.retain(|&c| c != slot);
                self.release_children(slot, Some(parent));
                self.decrement_ancestors(parent);
            }
        }
        let entry = self.slots[slot].take().expect("arena slot is vacant");
        self.index.remove(&entry.node);
        self.free.push(slot);
        entry
    }

    /// Melds equal-rank root trees pairwise until every rank holds at most
    /// one root
    ///
    /// Ranks are processed from 0 upward; the root with the larger key
    /// becomes a child of the other, and the winner re-enters the next rank
    /// bucket with its rank incremented.
    fn consolidate(&mut self) {
        let mut buckets: Vec<Vec<usize>> = Vec::new();
        for &root in &self.roots {
            let rank = self.entry(root).rank;
            if buckets.len() <= rank {
                buckets.resize_with(rank + 1, Vec::new);
            }
            buckets[rank].push(root);
        }

        let before = self.roots.len();
        let mut rank = 0;
        while rank < buckets.len() {
            while buckets[rank].len() > 1 {
                let first = buckets[rank].pop().expect("bucket underflow");
                let second = buckets[rank].pop().expect("bucket underflow");

                let (winner, loser) = if self.entry(first).key <= self.entry(second).key {
                    (first, second)
                } else {
                    (second, first)
                };

                self.entry_mut(loser).parent = Some(winner);
                let winner_entry = self.entry_mut(winner);
                winner_entry.children.push(loser);
                winner_entry.rank = rank + 1;

                if let Some(pos) = self.roots.iter().position(|&r| r == loser) {
                    self.roots.swap_remove(pos);
                }

                if buckets.len() <= rank + 1 {
                    buckets.push(Vec::new());
                }
                buckets[rank + 1].push(winner);
            }
            rank += 1;
        }

        log::trace!("consolidated {} roots down to {}", before, self.roots.len());
    }

    /// Linear scan of the root list for the smallest key
    fn rescan_min(&mut self) {
        self.min = None;
        for i in 0..self.roots.len() {
            self.challenge_min(self.roots[i]);
        }
    }
}

impl<N, W> Default for LazyMeldHeap<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    fn default() -> Self {
        LazyMeldHeap::new()
    }
}

impl<N, W> DecreaseKeyQueue<N, W> for LazyMeldHeap<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    fn insert(&mut self, node: N, key: W) {
        debug_assert!(
            !self.index.contains_key(&node),
            "insert on a node already in the queue"
        );
        let slot = self.alloc(Entry {
            node: node.clone(),
            key,
            rank: 0,
            parent: None,
            children: Vec::new(),
        });
        self.index.insert(node, slot);
        self.roots.push(slot);
        self.challenge_min(slot);
    }

    fn decrease_or_insert(&mut self, node: N, key: W) {
        let slot = match self.index.get(&node) {
            Some(&slot) => slot,
            None => return self.insert(node, key),
        };
        if key >= self.entry(slot).key {
            return;
        }
        self.entry_mut(slot).key = key;

        if let Some(parent) = self.entry(slot).parent {
            // Heap order is violated only once the new key undercuts the
            // parent's key; until then the entry stays where it is.
            if key < self.entry(parent).key {
                self.cut_to_root(slot, parent);
            }
        }
        if self.entry(slot).parent.is_none() {
            self.challenge_min(slot);
        }
    }

    fn extract_min(&mut self) -> Option<N> {
        let min_slot = self.min.take()?;
        let entry = self.detach(min_slot);
        self.consolidate();
        self.rescan_min();
        Some(entry.node)
    }

    fn key_of(&self, node: &N) -> W {
        match self.index.get(node) {
            Some(&slot) => self.entry(slot).key,
            None => W::infinity(),
        }
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn name(&self) -> &'static str {
        "LazyMeldHeap"
    }
}
