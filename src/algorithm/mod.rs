pub mod traits;
pub mod bellman_ford;
pub mod dijkstra;
pub mod johnson;

pub use traits::{AllPairsResult, ShortestPathAlgorithm, ShortestPathResult};
