use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::data_structures::DecreaseKeyQueue;

#[derive(Debug)]
struct ListEntry<N, W> {
    node: N,
    key: W,
    prev: Option<usize>,
    next: Option<usize>,
}

/// A doubly-linked list kept sorted by key, smallest first
///
/// Insertion walks the list from the head to find its position, decrease-key
/// unlinks and re-inserts, extraction pops the head. Every operation is O(n);
/// the structure exists as an easily audited oracle for the melding heap, not
/// as a serious contender.
///
/// Links are arena indices rather than pointers, with freed slots recycled.
#[derive(Debug)]
pub struct OrderedLinkedList<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    slots: Vec<Option<ListEntry<N, W>>>,
    free: Vec<usize>,
    index: HashMap<N, usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl<N, W> OrderedLinkedList<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    /// Creates a new empty list
    pub fn new() -> Self {
        OrderedLinkedList {
            slots: Vec::new(),
            free: Vec::new(),
            index: HashMap::new(),
            head: None,
            tail: None,
        }
    }

    fn entry(&self, slot: usize) -> &ListEntry<N, W> {
        self.slots[slot].as_ref().expect("list slot is vacant")
    }

    fn entry_mut(&mut self, slot: usize) -> &mut ListEntry<N, W> {
        self.slots[slot].as_mut().expect("list slot is vacant")
    }

    fn alloc(&mut self, entry: ListEntry<N, W>) -> usize {
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

    /// Splices a detached slot in before `position`, or at the tail for `None`
    fn link_before(&mut self, slot: usize, position: Option<usize>) {
        match position {
            Some(next) => {
                let prev = self.entry(next).prev;
                self.entry_mut(slot).prev = prev;
                self.entry_mut(slot).next = Some(next);
                self.entry_mut(next).prev = Some(slot);
                match prev {
                    Some(prev) => self.entry_mut(prev).next = Some(slot),
                    None => self.head = Some(slot),
                }
            }
            None => {
                let tail = self.tail;
                self.entry_mut(slot).prev = tail;
                self.entry_mut(slot).next = None;
                match tail {
                    Some(tail) => self.entry_mut(tail).next = Some(slot),
                    None => self.head = Some(slot),
                }
                self.tail = Some(slot);
            }
        }
    }

    fn unlink(&mut self, slot: usize) {
        let prev = self.entry(slot).prev;
        let next = self.entry(slot).next;
        match prev {
            Some(prev) => self.entry_mut(prev).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.entry_mut(next).prev = prev,
            None => self.tail = prev,
        }
        let entry = self.entry_mut(slot);
        entry.prev = None;
        entry.next = None;
    }

    /// First slot whose key is strictly greater than `key`, scanning from the
    /// head; equal keys keep insertion order
    fn successor_for(&self, key: W) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            if self.entry(slot).key > key {
                return Some(slot);
            }
            cursor = self.entry(slot).next;
        }
        None
    }
}

impl<N, W> Default for OrderedLinkedList<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    fn default() -> Self {
        OrderedLinkedList::new()
    }
}

impl<N, W> DecreaseKeyQueue<N, W> for OrderedLinkedList<N, W>
where
    N: Eq + Hash + Clone + Debug,
    W: Float + Zero + Debug + Copy + Ord,
{
    fn insert(&mut self, node: N, key: W) {
        debug_assert!(
            !self.index.contains_key(&node),
            "insert on a node already in the queue"
        );
        let slot = self.alloc(ListEntry {
            node: node.clone(),
            key,
            prev: None,
            next: None,
        });
        self.index.insert(node, slot);
        let position = self.successor_for(key);
        self.link_before(slot, position);
    }

    fn decrease_or_insert(&mut self, node: N, key: W) {
        let slot = match self.index.get(&node) {
            Some(&slot) => slot,
            None => return self.insert(node, key),
        };
        if key >= self.entry(slot).key {
            return;
        }
        self.unlink(slot);
        self.entry_mut(slot).key = key;
        let position = self.successor_for(key);
        self.link_before(slot, position);
    }

    fn extract_min(&mut self) -> Option<N> {
        let slot = self.head?;
        self.unlink(slot);
        let entry = self.slots[slot].take().expect("list slot is vacant");
        self.index.remove(&entry.node);
        self.free.push(slot);
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
        "OrderedLinkedList"
    }
}
