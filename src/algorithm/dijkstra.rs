use log::{debug, trace};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{BinaryHeap, PriorityQueue};
use crate::graph::indexed::IndexedGraph;
use crate::graph::{Graph, NodeId, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation.
///
/// All edge weights must be non-negative. That is not checked unless
/// [`Dijkstra::with_weight_check`] is enabled; negative weights otherwise
/// produce wrong distances silently.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Edge attribute used as the weight
    weight_key: String,
    /// Whether to reject graphs with negative edges before solving
    check_weights: bool,
}

impl Dijkstra {
    /// Creates a solver reading edge weights from `weight_key`
    pub fn new(weight_key: impl Into<String>) -> Self {
        Dijkstra {
            weight_key: weight_key.into(),
            check_weights: false,
        }
    }

    /// Enable or disable the fail-fast check for negative edge weights
    pub fn with_weight_check(mut self, enabled: bool) -> Self {
        self.check_weights = enabled;
        self
    }

    pub fn weight_key(&self) -> &str {
        &self.weight_key
    }

    /// Like `compute_shortest_paths`, but with a caller-supplied queue.
    /// The queue is cleared before use.
    pub fn compute_with_queue<N, W, G, Q>(
        &self,
        graph: &G,
        source: &N,
        queue: &mut Q,
    ) -> Result<ShortestPathResult<N, W>>
    where
        N: NodeId,
        W: Weight,
        G: Graph<N, W>,
        Q: PriorityQueue<W, usize>,
    {
        let snapshot = IndexedGraph::from_graph(graph, &self.weight_key)?;
        let source = snapshot.index_of(source)?;

        if self.check_weights {
            if let Some((u, v, w)) = snapshot.find_negative_edge() {
                return Err(Error::NegativeWeight {
                    from: format!("{:?}", snapshot.node(u)),
                    to: format!("{:?}", snapshot.node(v)),
                    weight: w.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        debug!(
            "dijkstra from {:?}: {} nodes, {} edges",
            snapshot.node(source),
            graph.node_count(),
            graph.edge_count()
        );

        queue.clear();
        let (distances, predecessors) = self.run_indexed(&snapshot, source, queue)?;
        Ok(snapshot.to_result(source, &distances, &predecessors))
    }

    /// Runs the main loop over a snapshot, returning dense distance and
    /// predecessor vectors.
    ///
    /// Improvements push a fresh queue entry instead of decreasing a key;
    /// entries for nodes that are already finalized are stale and skipped.
    pub(crate) fn run_indexed<N, W, Q>(
        &self,
        graph: &IndexedGraph<N, W>,
        source: usize,
        queue: &mut Q,
    ) -> Result<(Vec<W>, Vec<Option<usize>>)>
    where
        N: NodeId,
        W: Weight,
        Q: PriorityQueue<W, usize>,
    {
        let n = graph.node_count();
        let mut distances = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut finalized = vec![false; n];
        let mut num_finalized = 0;

        distances[source] = W::zero();
        queue.insert(W::zero(), source);

        let mut stale = 0usize;
        while num_finalized < n && !queue.is_empty() {
            let (_, u) = queue.extract_min()?;
            if finalized[u] {
                stale += 1;
                continue;
            }
            finalized[u] = true;
            num_finalized += 1;

            for &(v, weight) in graph.outgoing(u) {
                let candidate = distances[u] + weight;
                if candidate < distances[v] {
                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    queue.insert(candidate, v);
                }
            }
        }

        trace!(
            "dijkstra finalized {} of {} nodes, skipped {} stale entries",
            num_finalized,
            n,
            stale
        );
        Ok((distances, predecessors))
    }
}

impl<N, W, G> ShortestPathAlgorithm<N, W, G> for Dijkstra
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathResult<N, W>> {
        let mut queue: BinaryHeap<W, usize> = BinaryHeap::min();
        self.compute_with_queue(graph, source, &mut queue)
    }
}
