use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid edge: {0}")]
    InvalidEdge(String),

    #[error("vertex index {index} out of range (vertex count {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("vertex not found in graph")]
    VertexNotFound,
}
