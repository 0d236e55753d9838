use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

/// Named numeric attributes stored on an edge, e.g. `{"weight": 3.0}`
pub type EdgeAttributes<W> = HashMap<String, W>;

/// Numeric edge weight usable by the solvers
pub trait Weight: Float + Debug + Send + Sync {}

impl<T> Weight for T where T: Float + Debug + Send + Sync {}

/// Node identifier stored in a graph
pub trait NodeId: Clone + Eq + Hash + Debug + Send + Sync + 'static {
    /// Identifiers to try, in order, when a transient synthetic node
    /// (e.g. a supersource) has to be added to a graph
    fn synthetic_candidates() -> Box<dyn Iterator<Item = Self>>;
}

macro_rules! impl_integer_node_id {
    ($($t:ty),*) => {
        $(
            impl NodeId for $t {
                fn synthetic_candidates() -> Box<dyn Iterator<Item = Self>> {
                    Box::new((<$t>::MIN..=<$t>::MAX).rev())
                }
            }
        )*
    };
}

impl_integer_node_id!(u8, u16, u32, u64, usize, i32, i64);

impl NodeId for String {
    fn synthetic_candidates() -> Box<dyn Iterator<Item = Self>> {
        Box::new(
            std::iter::once("_supersource".to_string())
                .chain((1usize..).map(|i| format!("_supersource_{}", i))),
        )
    }
}

/// Trait representing a weighted directed graph
pub trait Graph<N, W>: Debug
where
    N: NodeId,
    W: Weight,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the nodes, in a stable order
    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_>;

    /// Returns an iterator over the outgoing edges of a node
    fn outgoing_edges(&self, node: &N) -> Box<dyn Iterator<Item = (&N, &EdgeAttributes<W>)> + '_>;

    /// Returns true if the node exists in the graph
    fn has_node(&self, node: &N) -> bool;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool;

    /// Gets the value of the named attribute on an edge, if both exist
    fn edge_weight(&self, from: &N, to: &N, key: &str) -> Option<W>;

    /// Returns an iterator over all edges as `(source, target, attributes)`
    fn edges(&self) -> Box<dyn Iterator<Item = (&N, &N, &EdgeAttributes<W>)> + '_> {
        Box::new(
            self.nodes()
                .flat_map(move |u| self.outgoing_edges(u).map(move |(v, attrs)| (u, v, attrs))),
        )
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, W>: Graph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Adds a node; returns false if it was already present
    fn add_node(&mut self, node: N) -> bool;

    /// Removes a node and its connected edges from the graph
    fn remove_node(&mut self, node: &N) -> bool;

    /// Sets the named attribute of the edge `from -> to`, creating the edge
    /// if needed. Both endpoints must already exist.
    fn add_edge(&mut self, from: N, to: N, key: &str, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &N, to: &N) -> bool;

    /// Updates the named attribute of an existing edge
    fn set_edge_weight(&mut self, from: &N, to: &N, key: &str, weight: W) -> bool;
}
