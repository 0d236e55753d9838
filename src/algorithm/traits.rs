use std::collections::{HashMap, HashSet};

use log::warn;

use crate::graph::{Graph, NodeId, Weight};
use crate::Result;

/// Result of a single-source shortest path computation
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Source node
    pub source: N,

    /// Distance from the source to each node; `W::infinity()` if unreachable
    pub distances: HashMap<N, W>,

    /// Predecessor of each node in the shortest path tree
    pub predecessors: HashMap<N, Option<N>>,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Distance to `target`, or `None` if the node is unknown
    pub fn distance(&self, target: &N) -> Option<W> {
        self.distances.get(target).copied()
    }

    /// Predecessor of `target` on its shortest path from the source
    pub fn predecessor(&self, target: &N) -> Option<&N> {
        self.predecessors.get(target).and_then(|p| p.as_ref())
    }

    /// True if `target` has a finite distance
    pub fn is_reachable(&self, target: &N) -> bool {
        self.distance(target).map_or(false, |d| d.is_finite())
    }

    /// The shortest path from the source to `target`, both included
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        if !self.is_reachable(target) {
            return None;
        }
        walk_predecessors(&self.source, target, &self.predecessors)
    }
}

/// Result of an all-pairs shortest path computation
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairsResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// `distances[u][v]`: shortest distance from `u` to `v`
    pub distances: HashMap<N, HashMap<N, W>>,

    /// `predecessors[u][v]`: predecessor of `v` on a shortest path from `u`
    pub predecessors: HashMap<N, HashMap<N, Option<N>>>,
}

impl<N, W> AllPairsResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    pub fn distance(&self, from: &N, to: &N) -> Option<W> {
        self.distances.get(from)?.get(to).copied()
    }

    pub fn predecessor(&self, from: &N, to: &N) -> Option<&N> {
        self.predecessors.get(from)?.get(to)?.as_ref()
    }

    /// Source nodes covered by this result
    pub fn sources(&self) -> impl Iterator<Item = &N> {
        self.distances.keys()
    }

    /// The shortest path from `from` to `to`, both included
    pub fn path(&self, from: &N, to: &N) -> Option<Vec<N>> {
        if !self.distance(from, to)?.is_finite() {
            return None;
        }
        walk_predecessors(from, to, self.predecessors.get(from)?)
    }

    /// The single-source slice of this result for `source`
    pub fn from_source(&self, source: &N) -> Option<ShortestPathResult<N, W>> {
        Some(ShortestPathResult {
            source: source.clone(),
            distances: self.distances.get(source)?.clone(),
            predecessors: self.predecessors.get(source)?.clone(),
        })
    }
}

/// Follows predecessor links from `target` back to `source`
pub(crate) fn walk_predecessors<N: NodeId>(
    source: &N,
    target: &N,
    predecessors: &HashMap<N, Option<N>>,
) -> Option<Vec<N>> {
    let mut path = vec![target.clone()];
    let mut visited = HashSet::new();
    let mut current = target;

    while current != source {
        if !visited.insert(current) {
            warn!("cycle in predecessor chain at {:?}", current);
            return None;
        }
        match predecessors.get(current) {
            Some(Some(pred)) => {
                path.push(pred.clone());
                current = pred;
            }
            _ => {
                warn!("broken predecessor chain at {:?} (source {:?})", current, source);
                return None;
            }
        }
    }

    path.reverse();
    Some(path)
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<N, W, G>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of nodes
    fn get_path(&self, result: &ShortestPathResult<N, W>, target: &N) -> Option<Vec<N>> {
        result.path_to(target)
    }
}
