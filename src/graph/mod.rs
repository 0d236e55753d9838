pub mod traits;
pub mod directed;
pub mod generators;
pub mod supersource;
pub(crate) mod indexed;

pub use traits::{EdgeAttributes, Graph, MutableGraph, NodeId, Weight};
pub use directed::DirectedGraph;
pub use supersource::Supersource;
