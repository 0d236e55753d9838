//! Johnson's All-Pairs Shortest Paths
//!
//! This library computes shortest paths on weighted directed graphs that may
//! contain negative edge weights. Johnson's algorithm reweights the graph
//! with node potentials from a Bellman-Ford run, then solves every source
//! with Dijkstra's algorithm over an array-backed binary heap.
//!
//! Every solver takes the name of the edge attribute to read weights from;
//! there is no default weight key.
//!
//! ```
//! use johnson_apsp::{johnsons_apsp, DirectedGraph};
//!
//! let graph = DirectedGraph::from_weighted_edges(
//!     "weight",
//!     vec![("a", "b", 1.0), ("b", "c", -2.0), ("a", "c", 4.0)]
//!         .into_iter()
//!         .map(|(u, v, w)| (u.to_string(), v.to_string(), w)),
//! );
//! let apsp = johnsons_apsp(&graph, "weight").unwrap();
//! assert_eq!(apsp.distance(&"a".to_string(), &"c".to_string()), Some(-1.0));
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

// Re-export main types for convenient use
pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, johnson::Johnson, AllPairsResult,
    ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::{BinaryHeap, HeapOrder, PriorityQueue, UnionFind};
pub use graph::{DirectedGraph, Graph, MutableGraph, NodeId, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("The graph contains a negative cycle")]
    NegativeCycle,

    #[error("Heap is empty")]
    EmptyHeap,

    #[error("Node not found: {0}")]
    InvalidNode(String),

    #[error("No unused identifier left for a synthetic supersource")]
    CollidingSupersource,

    #[error("Edge from {from} to {to} has no '{key}' attribute")]
    MissingWeight {
        from: String,
        to: String,
        key: String,
    },

    #[error("Negative edge weight {weight} on edge from {from} to {to}")]
    NegativeWeight { from: String, to: String, weight: f64 },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Single-source shortest paths by Bellman-Ford, reading weights from
/// `weight_key`. Fails with [`Error::NegativeCycle`] if a negative cycle is
/// reachable from `source`.
pub fn bellman_ford<N, W, G>(graph: &G, source: &N, weight_key: &str) -> Result<ShortestPathResult<N, W>>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    BellmanFord::new(weight_key).compute_shortest_paths(graph, source)
}

/// True if `graph` has a negative cycle anywhere
pub fn has_negative_cycle<N, W, G>(graph: &G, weight_key: &str) -> Result<bool>
where
    N: NodeId,
    W: Weight,
    G: MutableGraph<N, W> + Clone,
{
    BellmanFord::new(weight_key).has_negative_cycle::<N, W, G>(graph)
}

/// Single-source shortest paths by Dijkstra. Weights must be non-negative.
pub fn dijkstra<N, W, G>(graph: &G, source: &N, weight_key: &str) -> Result<ShortestPathResult<N, W>>
where
    N: NodeId,
    W: Weight,
    G: Graph<N, W>,
{
    Dijkstra::new(weight_key).compute_shortest_paths(graph, source)
}

/// All-pairs shortest paths by Johnson's algorithm
pub fn johnsons_apsp<N, W, G>(graph: &G, weight_key: &str) -> Result<AllPairsResult<N, W>>
where
    N: NodeId,
    W: Weight,
    G: MutableGraph<N, W> + Clone,
{
    Johnson::new(weight_key).compute_all_pairs(graph)
}
