use std::marker::PhantomData;

use log::debug;

use crate::graph::traits::{MutableGraph, NodeId, Weight};
use crate::{Error, Result};

/// A synthetic node temporarily attached to a graph, with a zero-weight edge
/// to every other node.
///
/// The node and its edges are removed when the guard is dropped, so the
/// graph is restored on every exit path, including early returns via `?`.
#[derive(Debug)]
pub struct Supersource<'g, N, W, G>
where
    N: NodeId,
    W: Weight,
    G: MutableGraph<N, W>,
{
    graph: &'g mut G,
    node: N,
    _weight: PhantomData<W>,
}

impl<'g, N, W, G> Supersource<'g, N, W, G>
where
    N: NodeId,
    W: Weight,
    G: MutableGraph<N, W>,
{
    /// Adds a fresh node to `graph` and connects it to every existing node
    /// with an edge of weight zero under `weight_key`
    pub fn attach(graph: &'g mut G, weight_key: &str) -> Result<Self> {
        let node = pick_unused::<N, W, G>(&*graph)?;
        let targets: Vec<N> = graph.nodes().cloned().collect();

        graph.add_node(node.clone());
        for target in targets {
            graph.add_edge(node.clone(), target, weight_key, W::zero());
        }
        debug!("attached supersource {:?} to {} nodes", node, graph.node_count() - 1);

        Ok(Supersource {
            graph,
            node,
            _weight: PhantomData,
        })
    }

    /// The synthetic node's identifier
    pub fn node(&self) -> &N {
        &self.node
    }

    /// The augmented graph
    pub fn graph(&self) -> &G {
        &*self.graph
    }
}

impl<'g, N, W, G> Drop for Supersource<'g, N, W, G>
where
    N: NodeId,
    W: Weight,
    G: MutableGraph<N, W>,
{
    fn drop(&mut self) {
        self.graph.remove_node(&self.node);
        debug!("detached supersource {:?}", self.node);
    }
}

/// Probes `node_count + 1` candidates, at least one of which is free unless
/// the identifier type has fewer values than that
fn pick_unused<N, W, G>(graph: &G) -> Result<N>
where
    N: NodeId,
    W: Weight,
    G: MutableGraph<N, W>,
{
    N::synthetic_candidates()
        .take(graph.node_count() + 1)
        .find(|candidate| !graph.has_node(candidate))
        .ok_or(Error::CollidingSupersource)
}
