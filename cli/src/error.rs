//! Error types for the graph-matrix CLI.

use graph_matrix_core::{GraphError, VertexId};
use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// Everything that can end a run. Each variant is reported once and the
/// process exits; nothing is retried.
#[derive(Error, Debug)]
pub enum CliError {
    /// Edge token without `-` or `->`.
    #[error("'{0}' is not a valid edge. Use '-' or '->'")]
    MalformedEdge(String),

    /// Text that should have been a non-negative integer.
    #[error("Can not convert '{0}' to an integer.")]
    NotANumber(String),

    /// Vertex count above what the dense matrices can hold.
    #[error("Can not analyze {given} vertices; the limit is {max}.")]
    TooManyVertices { given: usize, max: usize },

    /// Edge rejected by the graph builder.
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// Path endpoint outside the graph.
    #[error("Vertex {vertex} is not in the graph ({vertex_count} vertices).")]
    UnknownVertex { vertex: VertexId, vertex_count: usize },

    /// Standard input closed before a prompt was answered.
    #[error("Input ended before {0} was entered.")]
    UnexpectedEof(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
