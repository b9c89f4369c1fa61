use crate::types::VertexId;

/// Precondition failures of graph operations.
///
/// Checked before anything is modified; a failed call leaves the graph as it
/// was.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("element is already a vertex of the graph")]
    DuplicateVertex,
    #[error("element is not a vertex of the graph")]
    VertexNotFound,
    #[error("a vertex cannot be connected to itself")]
    SelfLoop,
    #[error("vertices are already connected")]
    AlreadyConnected,
    #[error("vertices are not connected")]
    NotConnected,
    #[error("edge weight must be finite and positive, got {0}")]
    InvalidWeight(f64),
    #[error("{0} does not name a vertex of the graph")]
    UnknownVertex(VertexId),
    #[error("invalid path configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraphError>;
