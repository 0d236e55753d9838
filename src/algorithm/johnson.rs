use std::collections::HashMap;

use log::debug;
use rayon::prelude::*;

use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{AllPairsResult, ShortestPathAlgorithm};
use crate::data_structures::BinaryHeap;
use crate::graph::indexed::IndexedGraph;
use crate::graph::{MutableGraph, NodeId, Supersource, Weight};
use crate::{Error, Result};

/// Johnson's all-pairs shortest paths.
///
/// 1. attach a supersource to a private copy of the graph and run
///    Bellman-Ford from it; the distances become node potentials `h`
/// 2. detach the supersource and reweight every edge to
///    `w(u, v) + h(u) - h(v)`, which is non-negative and keeps the same
///    shortest paths
/// 3. run Dijkstra from every node on the reweighted copy
/// 4. undo the reweighting: `d(u, v) = d'(u, v) - h(u) + h(v)`
///
/// A negative cycle anywhere in the graph aborts the computation in step 1
/// with `Error::NegativeCycle`. The caller's graph is never modified.
#[derive(Debug, Clone)]
pub struct Johnson {
    /// Edge attribute used as the weight
    weight_key: String,
    /// Whether to run the per-source Dijkstra solves on the rayon pool
    parallel: bool,
}

impl Johnson {
    /// Creates a solver reading edge weights from `weight_key`
    pub fn new(weight_key: impl Into<String>) -> Self {
        Johnson {
            weight_key: weight_key.into(),
            parallel: false,
        }
    }

    /// Enable or disable running the per-source solves in parallel
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn weight_key(&self) -> &str {
        &self.weight_key
    }

    /// Get the name of the algorithm
    pub fn name(&self) -> &'static str {
        "Johnson"
    }

    /// Computes node potentials and returns a reweighted copy of `graph`
    /// whose edge weights are all non-negative, together with the potentials
    pub fn reweighted_graph<N, W, G>(&self, graph: &G) -> Result<(G, HashMap<N, W>)>
    where
        N: NodeId,
        W: Weight,
        G: MutableGraph<N, W> + Clone,
    {
        let mut working = graph.clone();
        let potentials = self.node_potentials::<N, W, G>(&mut working)?;

        let reweighted: Vec<(N, N, W)> = working
            .edges()
            .map(|(u, v, attrs)| {
                let weight = attrs.get(&self.weight_key).copied().ok_or_else(|| {
                    Error::MissingWeight {
                        from: format!("{:?}", u),
                        to: format!("{:?}", v),
                        key: self.weight_key.clone(),
                    }
                })?;
                // h(v) <= h(u) + w holds exactly in floating point, so this is >= 0
                let adjusted = (weight + potentials[u]) - potentials[v];
                Ok((u.clone(), v.clone(), adjusted))
            })
            .collect::<Result<Vec<_>>>()?;

        for (u, v, weight) in reweighted {
            debug_assert!(weight >= W::zero(), "reweighted edge {:?} -> {:?} is negative", u, v);
            working.set_edge_weight(&u, &v, &self.weight_key, weight);
        }

        Ok((working, potentials))
    }

    /// Compute shortest paths between every ordered pair of nodes
    pub fn compute_all_pairs<N, W, G>(&self, graph: &G) -> Result<AllPairsResult<N, W>>
    where
        N: NodeId,
        W: Weight,
        G: MutableGraph<N, W> + Clone,
    {
        debug!(
            "johnson: {} nodes, {} edges, parallel={}",
            graph.node_count(),
            graph.edge_count(),
            self.parallel
        );

        let (reweighted, potentials) = self.reweighted_graph::<N, W, G>(graph)?;
        let snapshot: IndexedGraph<N, W> = IndexedGraph::from_graph(&reweighted, &self.weight_key)?;
        let n = snapshot.node_count();
        let h: Vec<W> = (0..n).map(|i| potentials[snapshot.node(i)]).collect();

        let dijkstra = Dijkstra::new(self.weight_key.clone());
        let solve = |source: usize| -> Result<(N, HashMap<N, W>, HashMap<N, Option<N>>)> {
            let mut queue: BinaryHeap<W, usize> = BinaryHeap::min();
            let (distances, predecessors) = dijkstra.run_indexed(&snapshot, source, &mut queue)?;

            // Undo the reweighting; unreachable stays infinite
            let corrected: Vec<W> = distances
                .iter()
                .enumerate()
                .map(|(target, &d)| {
                    if d.is_finite() {
                        d - h[source] + h[target]
                    } else {
                        d
                    }
                })
                .collect();

            let result = snapshot.to_result(source, &corrected, &predecessors);
            Ok((result.source, result.distances, result.predecessors))
        };

        let rows: Vec<_> = if self.parallel {
            (0..n).into_par_iter().map(solve).collect::<Result<Vec<_>>>()?
        } else {
            (0..n).map(solve).collect::<Result<Vec<_>>>()?
        };

        let mut distances = HashMap::with_capacity(n);
        let mut predecessors = HashMap::with_capacity(n);
        for (source, dist, pred) in rows {
            distances.insert(source.clone(), dist);
            predecessors.insert(source, pred);
        }

        debug!("johnson: solved {} sources", n);
        Ok(AllPairsResult {
            distances,
            predecessors,
        })
    }

    /// Bellman-Ford distances from a transient supersource; the supersource
    /// is gone again when this returns, on success and on error alike
    fn node_potentials<N, W, G>(&self, working: &mut G) -> Result<HashMap<N, W>>
    where
        N: NodeId,
        W: Weight,
        G: MutableGraph<N, W>,
    {
        let supersource = Supersource::<N, W, G>::attach(working, &self.weight_key)?;
        let solver = BellmanFord::new(self.weight_key.clone());
        let result = <BellmanFord as ShortestPathAlgorithm<N, W, G>>::compute_shortest_paths(
            &solver,
            supersource.graph(),
            supersource.node(),
        )?;

        let mut potentials = result.distances;
        potentials.remove(supersource.node());
        Ok(potentials)
    }
}
