use crate::graph::traits::{EdgeAttributes, Graph, MutableGraph, NodeId, Weight};
use std::collections::HashMap;

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Nodes in insertion order
    nodes: Vec<N>,

    /// Outgoing edges for each node: node -> [(target, attributes)]
    outgoing_edges: HashMap<N, Vec<(N, EdgeAttributes<W>)>>,

    /// Incoming edges for each node: node -> [source]
    incoming_edges: HashMap<N, Vec<N>>,
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            nodes: Vec::new(),
            outgoing_edges: HashMap::new(),
            incoming_edges: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph with room for `nodes` nodes
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            nodes: Vec::with_capacity(nodes),
            outgoing_edges: HashMap::with_capacity(nodes),
            incoming_edges: HashMap::with_capacity(nodes),
        }
    }

    /// Builds a graph from `(source, target, weight)` triples, storing each
    /// weight under `key`. Endpoints are added as nodes on first sight.
    pub fn from_weighted_edges<I>(key: &str, edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (from, to, weight) in edges {
            graph.add_node(from.clone());
            graph.add_node(to.clone());
            graph.add_edge(from, to, key, weight);
        }
        graph
    }

    /// Adds both arcs `a -> b` and `b -> a` with the same weight
    pub fn add_undirected_edge(&mut self, a: N, b: N, key: &str, weight: W) -> bool {
        self.add_edge(a.clone(), b.clone(), key, weight) && self.add_edge(b, a, key, weight)
    }

    /// Validate that no edge carries a negative value under `key`
    pub fn validate_non_negative(&self, key: &str) -> bool {
        for edges in self.outgoing_edges.values() {
            for (_target, attrs) in edges {
                if let Some(weight) = attrs.get(key) {
                    if *weight < W::zero() {
                        return false;
                    }
                }
            }
        }
        true
    }
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.nodes.iter())
    }

    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (&N, &EdgeAttributes<W>)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(node) {
            Box::new(edges.iter().map(|(target, attrs)| (target, attrs)))
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_node(&self, node: &N) -> bool {
        self.outgoing_edges.contains_key(node)
    }

    fn has_edge(&self, from: &N, to: &N) -> bool {
        if let Some(edges) = self.outgoing_edges.get(from) {
            edges.iter().any(|(target, _)| target == to)
        } else {
            false
        }
    }

    fn edge_weight(&self, from: &N, to: &N, key: &str) -> Option<W> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .and_then(|(_, attrs)| attrs.get(key).copied())
    }
}

impl<N, W> MutableGraph<N, W> for DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.has_node(&node) {
            return false;
        }
        self.outgoing_edges.insert(node.clone(), Vec::new());
        self.incoming_edges.insert(node.clone(), Vec::new());
        self.nodes.push(node);
        true
    }

    fn remove_node(&mut self, node: &N) -> bool {
        if !self.has_node(node) {
            return false;
        }

        // Remove all edges connected to this node
        if let Some(outgoing) = self.outgoing_edges.remove(node) {
            for (target, _) in outgoing {
                if let Some(incoming) = self.incoming_edges.get_mut(&target) {
                    incoming.retain(|source| source != node);
                }
            }
        }

        if let Some(incoming) = self.incoming_edges.remove(node) {
            for source in incoming {
                if let Some(outgoing) = self.outgoing_edges.get_mut(&source) {
                    outgoing.retain(|(target, _)| target != node);
                }
            }
        }

        self.nodes.retain(|n| n != node);
        true
    }

    fn add_edge(&mut self, from: N, to: N, key: &str, weight: W) -> bool {
        if !self.has_node(&from) || !self.has_node(&to) {
            return false;
        }

        let outgoing = match self.outgoing_edges.get_mut(&from) {
            Some(outgoing) => outgoing,
            None => return false,
        };

        // Later insertion wins for an existing edge
        if let Some((_, attrs)) = outgoing.iter_mut().find(|(target, _)| *target == to) {
            attrs.insert(key.to_string(), weight);
            return true;
        }

        let mut attrs = EdgeAttributes::new();
        attrs.insert(key.to_string(), weight);
        outgoing.push((to.clone(), attrs));

        self.incoming_edges.entry(to).or_default().push(from);
        true
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        let mut removed = false;

        if let Some(outgoing) = self.outgoing_edges.get_mut(from) {
            let len_before = outgoing.len();
            outgoing.retain(|(target, _)| target != to);
            removed = len_before > outgoing.len();
        }

        if let Some(incoming) = self.incoming_edges.get_mut(to) {
            incoming.retain(|source| source != from);
        }

        removed
    }

    fn set_edge_weight(&mut self, from: &N, to: &N, key: &str, weight: W) -> bool {
        let edge = self
            .outgoing_edges
            .get_mut(from)
            .and_then(|edges| edges.iter_mut().find(|(target, _)| target == to));

        match edge {
            Some((_, attrs)) => {
                attrs.insert(key.to_string(), weight);
                true
            }
            None => false,
        }
    }
}
