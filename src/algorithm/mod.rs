pub mod traits;
pub mod dijkstra;

pub use traits::{QueueStats, ShortestPathAlgorithm, ShortestPathResult};
