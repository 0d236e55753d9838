pub mod binary_heap;
pub mod priority_queue;
pub mod union_find;

pub use binary_heap::{BinaryHeap, HeapOrder};
pub use priority_queue::{BinaryHeapWrapper, PriorityQueue};
pub use union_find::UnionFind;
