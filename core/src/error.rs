use crate::graph::{EdgeSpec, VertexId};

/// Errors raised while constructing a graph.
///
/// Analysis over a constructed graph is total, so construction is the only
/// place the engine reports failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge names a vertex outside `[0, vertex_count)`.
    #[error(
        "Edge '{edge}' contains vertex that is greater than or equal to the number of nodes given ({vertex_count})."
    )]
    InvalidVertex {
        edge_index: usize,
        edge: EdgeSpec,
        vertex: VertexId,
        vertex_count: usize,
    },

    /// Vertex count above [`MAX_VERTICES`](crate::MAX_VERTICES).
    #[error("A graph with {vertex_count} vertices exceeds the limit of {max} vertices.")]
    TooManyVertices { vertex_count: usize, max: usize },
}

/// Result type for graph construction.
pub type Result<T> = std::result::Result<T, GraphError>;
