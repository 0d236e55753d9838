use std::cell::Cell;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::{Error, Result};

/// Disjoint-set forest over a fixed set of items.
///
/// Union by size with path compression; `find` compresses through interior
/// mutability so lookups can take `&self`.
#[derive(Debug, Clone)]
pub struct UnionFind<T>
where
    T: Hash + Eq + Clone + Debug,
{
    items: Vec<T>,
    index: HashMap<T, usize>,
    parent: Vec<Cell<usize>>,
    size: Vec<usize>,
    clusters: usize,
}

impl<T> UnionFind<T>
where
    T: Hash + Eq + Clone + Debug,
{
    /// Creates one singleton cluster per distinct item
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut uf = UnionFind {
            items: Vec::new(),
            index: HashMap::new(),
            parent: Vec::new(),
            size: Vec::new(),
            clusters: 0,
        };
        for item in items {
            if uf.index.contains_key(&item) {
                continue;
            }
            let i = uf.items.len();
            uf.index.insert(item.clone(), i);
            uf.items.push(item);
            uf.parent.push(Cell::new(i));
            uf.size.push(1);
            uf.clusters += 1;
        }
        uf
    }

    /// Number of items in the structure
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All items, in insertion order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Current number of clusters
    pub fn num_clusters(&self) -> usize {
        self.clusters
    }

    /// Returns the leader of the cluster that `item` belongs to
    pub fn find(&self, item: &T) -> Result<&T> {
        let i = self.index_of(item)?;
        Ok(&self.items[self.root(i)])
    }

    /// Merges the clusters of `a` and `b`; returns false if they were
    /// already joined
    pub fn union(&mut self, a: &T, b: &T) -> Result<bool> {
        let ra = self.root(self.index_of(a)?);
        let rb = self.root(self.index_of(b)?);
        if ra == rb {
            return Ok(false);
        }

        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small].set(big);
        self.size[big] += self.size[small];
        self.clusters -= 1;
        Ok(true)
    }

    /// True if both items are in the same cluster
    pub fn joined(&self, a: &T, b: &T) -> Result<bool> {
        Ok(self.root(self.index_of(a)?) == self.root(self.index_of(b)?))
    }

    /// Every cluster as a list of items, each list in insertion order
    pub fn clusters(&self) -> Vec<Vec<T>> {
        let mut by_root: HashMap<usize, Vec<T>> = HashMap::new();
        let mut roots = Vec::new();
        for (i, item) in self.items.iter().enumerate() {
            let root = self.root(i);
            by_root
                .entry(root)
                .or_insert_with(|| {
                    roots.push(root);
                    Vec::new()
                })
                .push(item.clone());
        }
        roots
            .into_iter()
            .filter_map(|root| by_root.remove(&root))
            .collect()
    }

    fn index_of(&self, item: &T) -> Result<usize> {
        self.index
            .get(item)
            .copied()
            .ok_or_else(|| Error::InvalidNode(format!("{:?}", item)))
    }

    fn root(&self, mut i: usize) -> usize {
        let mut root = i;
        while self.parent[root].get() != root {
            root = self.parent[root].get();
        }
        // Path compression
        while self.parent[i].get() != root {
            let next = self.parent[i].get();
            self.parent[i].set(root);
            i = next;
        }
        root
    }
}
