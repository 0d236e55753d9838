use std::fmt::Debug;

use crate::data_structures::PriorityQueue;
use crate::{Error, Result};

/// Which end of the key order sits at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOrder {
    /// Smallest key first
    Min,
    /// Largest key first
    Max,
}

/// Array-backed binary heap of `(key, item)` pairs.
///
/// Keys only need `PartialOrd`, so raw floats work. Duplicate keys and
/// duplicate items are allowed; ties come out in no particular order.
#[derive(Debug, Clone)]
pub struct BinaryHeap<K, T> {
    items: Vec<(K, T)>,
    order: HeapOrder,
}

impl<K, T> BinaryHeap<K, T>
where
    K: PartialOrd + Debug,
    T: Debug,
{
    /// Creates a new empty heap with the given order
    pub fn new(order: HeapOrder) -> Self {
        BinaryHeap {
            items: Vec::new(),
            order,
        }
    }

    /// Creates a new empty min-heap
    pub fn min() -> Self {
        Self::new(HeapOrder::Min)
    }

    /// Creates a new empty max-heap
    pub fn max() -> Self {
        Self::new(HeapOrder::Max)
    }

    /// Turns `items` into a heap in linear time
    pub fn from_vec(items: Vec<(K, T)>, order: HeapOrder) -> Self {
        let mut heap = BinaryHeap { items, order };
        for index in (0..heap.items.len() / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }

    /// The heap's order
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Consumes the heap, returning its items in heap (not sorted) order
    pub fn into_vec(self) -> Vec<(K, T)> {
        self.items
    }

    /// True if `a` belongs strictly above `b`
    fn precedes(&self, a: usize, b: usize) -> bool {
        let (ka, kb) = (&self.items[a].0, &self.items[b].0);
        match self.order {
            HeapOrder::Min => ka < kb,
            HeapOrder::Max => ka > kb,
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.precedes(index, parent) {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.precedes(right, left) {
                right
            } else {
                left
            };
            if !self.precedes(child, index) {
                break;
            }
            self.items.swap(index, child);
            index = child;
        }
    }
}

impl<K, T> PriorityQueue<K, T> for BinaryHeap<K, T>
where
    K: PartialOrd + Debug,
    T: Debug,
{
    fn insert(&mut self, key: K, item: T) {
        self.items.push((key, item));
        self.sift_up(self.items.len() - 1);
    }

    fn extract_min(&mut self) -> Result<(K, T)> {
        if self.items.is_empty() {
            return Err(Error::EmptyHeap);
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop().ok_or(Error::EmptyHeap)?;
        self.sift_down(0);
        Ok(top)
    }

    fn peek(&self) -> Result<(&K, &T)> {
        self.items
            .first()
            .map(|(key, item)| (key, item))
            .ok_or(Error::EmptyHeap)
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}
