pub mod edge;
pub mod error;
pub mod graph;

pub use edge::{Edge, EdgeRecord, WeightedEdge};
pub use error::{Error, Result};
pub use graph::Graph;
