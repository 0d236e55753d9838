use std::collections::HashMap;

use crate::algorithm::ShortestPathResult;
use crate::graph::traits::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Dense, read-only snapshot of a graph with one weight attribute resolved.
///
/// Nodes are numbered `0..n` in the source graph's enumeration order and
/// every edge carries the value found under the chosen weight key.
#[derive(Debug, Clone)]
pub(crate) struct IndexedGraph<N, W> {
    nodes: Vec<N>,
    index: HashMap<N, usize>,
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<N, W> IndexedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Snapshots `graph`, failing if any edge has no value under `key`
    pub fn from_graph<G>(graph: &G, key: &str) -> Result<Self>
    where
        G: Graph<N, W> + ?Sized,
    {
        let nodes: Vec<N> = graph.nodes().cloned().collect();
        let index: HashMap<N, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.clone(), i))
            .collect();

        let mut adjacency = Vec::with_capacity(nodes.len());
        for node in &nodes {
            let mut edges = Vec::new();
            for (target, attrs) in graph.outgoing_edges(node) {
                let weight = attrs.get(key).copied().ok_or_else(|| Error::MissingWeight {
                    from: format!("{:?}", node),
                    to: format!("{:?}", target),
                    key: key.to_string(),
                })?;
                let target_index = index
                    .get(target)
                    .copied()
                    .ok_or_else(|| Error::InvalidNode(format!("{:?}", target)))?;
                edges.push((target_index, weight));
            }
            adjacency.push(edges);
        }

        Ok(IndexedGraph {
            nodes,
            index,
            adjacency,
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, index: usize) -> &N {
        &self.nodes[index]
    }

    pub fn index_of(&self, node: &N) -> Result<usize> {
        self.index
            .get(node)
            .copied()
            .ok_or_else(|| Error::InvalidNode(format!("{:?}", node)))
    }

    pub fn outgoing(&self, index: usize) -> &[(usize, W)] {
        &self.adjacency[index]
    }

    /// All edges as `(source, target, weight)` index triples
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, edges)| edges.iter().map(move |&(v, w)| (u, v, w)))
    }

    /// First edge with a negative weight, if any
    pub fn find_negative_edge(&self) -> Option<(usize, usize, W)> {
        self.edges().find(|&(_, _, w)| w < W::zero())
    }

    /// Maps dense distance/predecessor vectors back to node-keyed maps
    pub fn to_result(
        &self,
        source: usize,
        distances: &[W],
        predecessors: &[Option<usize>],
    ) -> ShortestPathResult<N, W> {
        let distances = self
            .nodes
            .iter()
            .zip(distances)
            .map(|(node, &d)| (node.clone(), d))
            .collect();
        let predecessors = self
            .nodes
            .iter()
            .zip(predecessors)
            .map(|(node, pred)| (node.clone(), pred.map(|p| self.nodes[p].clone())))
            .collect();

        ShortestPathResult {
            source: self.nodes[source].clone(),
            distances,
            predecessors,
        }
    }
}
