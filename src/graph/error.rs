use thiserror::Error;

/// Everything that can go wrong while manipulating a graph.
///
/// Every failing operation reports its error before touching any storage,
/// so a graph is left unchanged after an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GraphError {
    #[error("vertex not found")]
    VertexNotFound,
    #[error("vertex already exists")]
    VertexAlreadyExists,
    #[error("edge not found")]
    EdgeNotFound,
    #[error("edge already exists")]
    EdgeAlreadyExists,
}

pub type Result<T> = std::result::Result<T, GraphError>;
