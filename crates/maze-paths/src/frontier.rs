//! Exploration orders: the set of discovered-but-unexpanded cells.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use maze_core::Point;

/// A frontier yields cells in a strategy-specific order.
///
/// `priority` is the strategy's key; orders that do not rank cells ignore it.
pub trait Frontier {
    /// Add a discovered cell.
    fn push(&mut self, p: Point, priority: i32);

    /// Remove the next cell to expand.
    fn pop(&mut self) -> Option<Point>;

    /// Number of pending entries.
    fn len(&self) -> usize;

    /// Whether no entries are pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// First in, first out (breadth-first).
#[derive(Debug, Default)]
pub struct Fifo(VecDeque<Point>);

impl Frontier for Fifo {
    #[inline]
    fn push(&mut self, p: Point, _priority: i32) {
        self.0.push_back(p);
    }

    #[inline]
    fn pop(&mut self) -> Option<Point> {
        self.0.pop_front()
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Last in, first out (depth-first).
#[derive(Debug, Default)]
pub struct Lifo(Vec<Point>);

impl Frontier for Lifo {
    #[inline]
    fn push(&mut self, p: Point, _priority: i32) {
        self.0.push(p);
    }

    #[inline]
    fn pop(&mut self) -> Option<Point> {
        self.0.pop()
    }

    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Heap entry ordered by smallest key, then earliest insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Entry {
    key: i32,
    seq: u64,
    pos: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key first.
        other.key.cmp(&self.key).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue (greedy best-first and A*). Equal keys pop in
/// insertion order.
#[derive(Debug, Default)]
pub struct MinPriority {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier for MinPriority {
    fn push(&mut self, p: Point, priority: i32) {
        self.heap.push(Entry {
            key: priority,
            seq: self.seq,
            pos: p,
        });
        self.seq += 1;
    }

    #[inline]
    fn pop(&mut self) -> Option<Point> {
        self.heap.pop().map(|e| e.pos)
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }
}
