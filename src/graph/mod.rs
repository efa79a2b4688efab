pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod generators;
pub mod traits;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;
pub use traits::{Edge, Graph, MutableGraph};
