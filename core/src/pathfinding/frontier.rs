use crate::error::EmptyFrontier;
use std::{cmp::Ordering, collections::BinaryHeap};

struct FrontierEntry<N> {
    priority: f64,
    sequence: u64,
    node: N,
}

impl<N> PartialEq for FrontierEntry<N> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N> Eq for FrontierEntry<N> {}

impl<N> PartialOrd for FrontierEntry<N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N> Ord for FrontierEntry<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap, we want the lowest
        // priority first and, among equals, the earliest insertion.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue of `(distance, node)` entries.
///
/// A node may be pushed several times; outdated entries stay in the heap and
/// are recognised by the caller when popped, instead of being updated in place.
pub struct PriorityFrontier<N> {
    heap: BinaryHeap<FrontierEntry<N>>,
    next_sequence: u64,
}

impl<N> PriorityFrontier<N> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, priority: f64, node: N) {
        self.heap.push(FrontierEntry {
            priority,
            sequence: self.next_sequence,
            node,
        });
        self.next_sequence += 1;
    }

    pub fn pop_min(&mut self) -> Result<(f64, N), EmptyFrontier> {
        self.heap
            .pop()
            .map(|entry| (entry.priority, entry.node))
            .ok_or(EmptyFrontier)
    }

    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Total number of entries ever pushed, stale ones included.
    pub fn pushes(&self) -> u64 {
        self.next_sequence
    }
}

impl<N> Default for PriorityFrontier<N> {
    fn default() -> Self {
        Self::new()
    }
}
