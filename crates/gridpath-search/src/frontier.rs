use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::node::Node;

/// Heap entry ordered by `f`, then `h`, then insertion order, for use in
/// `BinaryHeap`.
#[derive(Clone, Copy)]
struct Entry {
    node: Node,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other
            .node
            .f()
            .total_cmp(&self.node.f())
            .then_with(|| other.node.h.total_cmp(&self.node.h))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Min-priority queue of open nodes keyed on `f`.
///
/// Ties go to the node closer to the target, then to the earlier insertion,
/// so identical searches expand identically. A node whose `g` is lowered is
/// simply inserted again; the stale entry is left for the caller to discard.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node.
    pub fn insert(&mut self, node: Node) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { node, seq });
    }

    /// The node with the lowest `f`, without removing it.
    pub fn peek(&self) -> Option<&Node> {
        self.heap.peek().map(|e| &e.node)
    }

    /// Remove and return the node with the lowest `f`.
    pub fn pop(&mut self) -> Option<Node> {
        self.heap.pop().map(|e| e.node)
    }

    /// Number of entries, stale duplicates included.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
