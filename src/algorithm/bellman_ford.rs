use log::{debug, trace};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::indexed::IndexedGraph;
use crate::graph::{Graph, MutableGraph, NodeId, Supersource, Weight};
use crate::{Error, Result};

/// Bellman-Ford single-source shortest paths.
///
/// Handles negative edge weights and reports a negative cycle reachable
/// from the source as `Error::NegativeCycle`.
#[derive(Debug, Clone)]
pub struct BellmanFord {
    /// Edge attribute used as the weight
    weight_key: String,
}

impl BellmanFord {
    /// Creates a solver reading edge weights from `weight_key`
    pub fn new(weight_key: impl Into<String>) -> Self {
        BellmanFord {
            weight_key: weight_key.into(),
        }
    }

    pub fn weight_key(&self) -> &str {
        &self.weight_key
    }

    /// Returns true if `graph` contains a negative cycle anywhere, whether
    /// or not it is reachable from any particular node.
    ///
    /// Runs the solver from a supersource attached to every node of a
    /// temporary copy; `graph` itself is left untouched.
    pub fn has_negative_cycle<N, W, G>(&self, graph: &G) -> Result<bool>
    where
        N: NodeId,
        W: Weight,
        G: MutableGraph<N, W> + Clone,
    {
        let mut working = graph.clone();
        let supersource = Supersource::<N, W, G>::attach(&mut working, &self.weight_key)?;

        let outcome = <Self as ShortestPathAlgorithm<N, W, G>>::compute_shortest_paths(
            self,
            supersource.graph(),
            supersource.node(),
        );
        match outcome {
            Ok(_) => Ok(false),
            Err(Error::NegativeCycle) => Ok(true),
            Err(e) => Err(e),
        }
    }

    /// Runs the relaxation passes over a snapshot, returning dense
    /// distance and predecessor vectors
    pub(crate) fn run_indexed<N, W>(
        &self,
        graph: &IndexedGraph<N, W>,
        source: usize,
    ) -> Result<(Vec<W>, Vec<Option<usize>>)>
    where
        N: NodeId,
        W: Weight,
    {
        let n = graph.node_count();
        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source] = W::zero();

        for pass in 1..n {
            let mut changed = false;
            for (u, v, weight) in graph.edges() {
                if distances[u].is_infinite() {
                    continue;
                }
                let candidate = distances[u] + weight;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    changed = true;
                }
            }
            // Fixpoint reached
            if !changed {
                trace!("bellman-ford converged after {} of {} passes", pass, n - 1);
                break;
            }
        }

        // One more pass: any edge that still relaxes lies on or behind a negative cycle
        for (u, v, weight) in graph.edges() {
            if distances[u].is_finite() && distances[u] + weight < distances[v] {
                debug!(
                    "negative cycle detected: edge {:?} -> {:?} still relaxes",
                    graph.node(u),
                    graph.node(v)
                );
                return Err(Error::NegativeCycle);
            }
        }

        Ok((distances, predecessors))
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for BellmanFord
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        let snapshot = IndexedGraph::from_graph(graph, &self.weight_key)?;
        let source = snapshot.index_of(source)?;

        debug!(
            "bellman-ford from {:?}: {} nodes, {} edges",
            snapshot.node(source),
            graph.node_count(),
            graph.edge_count()
        );

        let (distances, predecessors) = self.run_indexed(&snapshot, source)?;
        Ok(snapshot.to_result(source, &distances, &predecessors))
    }
}
