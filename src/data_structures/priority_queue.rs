use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use num_traits::Float;
use ordered_float::OrderedFloat;

use crate::{Error, Result};

/// Min-priority queue used by Dijkstra's algorithm.
///
/// No decrease-key: callers push a fresh entry on every improvement and
/// skip stale entries when they come out.
pub trait PriorityQueue<K, T> {
    /// Inserts an item with the given key
    fn insert(&mut self, key: K, item: T);

    /// Removes and returns the entry at the top of the queue
    fn extract_min(&mut self) -> Result<(K, T)>;

    /// Returns the entry at the top of the queue without removing it
    fn peek(&self) -> Result<(&K, &T)>;

    /// Returns the number of entries in the queue
    fn len(&self) -> usize;

    /// Removes all entries
    fn clear(&mut self);

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A wrapper around `std::collections::BinaryHeap` for float keys
#[derive(Debug)]
pub struct BinaryHeapWrapper<K, T>
where
    K: Float + Debug,
    T: Ord + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(OrderedFloat<K>, T)>>,
}

impl<K, T> Default for BinaryHeapWrapper<K, T>
where
    K: Float + Debug,
    T: Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> BinaryHeapWrapper<K, T>
where
    K: Float + Debug,
    T: Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }
}

impl<K, T> PriorityQueue<K, T> for BinaryHeapWrapper<K, T>
where
    K: Float + Debug,
    T: Ord + Debug,
{
    fn insert(&mut self, key: K, item: T) {
        self.heap.push(Reverse((OrderedFloat(key), item)));
    }

    fn extract_min(&mut self) -> Result<(K, T)> {
        self.heap
            .pop()
            .map(|Reverse((key, item))| (key.into_inner(), item))
            .ok_or(Error::EmptyHeap)
    }

    fn peek(&self) -> Result<(&K, &T)> {
        self.heap
            .peek()
            .map(|Reverse((key, item))| (&key.0, item))
            .ok_or(Error::EmptyHeap)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }
}
