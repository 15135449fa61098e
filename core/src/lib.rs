//! graph-matrix-core: adjacency-matrix graph analysis engine.
//!
//! Builds a dense boolean adjacency matrix from a vertex count and an edge
//! list, then answers structural queries over it: BFS shortest paths, the
//! all-pairs distance matrix, connectivity, diameter and the partition of
//! a disconnected graph into components.
//! No I/O happens here; the `graph-matrix` CLI handles parsing and rendering.

mod analysis;
mod error;
mod graph;
mod partition;
mod traversal;

pub use analysis::{analyze, diameter, is_connected, Analysis};
pub use error::{GraphError, Result};
pub use graph::{DegreeResult, EdgeSpec, Graph, VertexId, MAX_VERTICES};
pub use partition::{
    components, isolated_vertices, partition_from_matrix, Component, DisjointSet, Partition,
};
pub use traversal::{distance_matrix, shortest_path, shortest_route, DistanceMatrix};
