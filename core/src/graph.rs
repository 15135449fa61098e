use std::fmt;

use crate::error::{GraphError, Result};

/// Dense vertex identifier in `[0, vertex_count)`.
pub type VertexId = usize;

/// Largest vertex count [`Graph::build`] accepts. The adjacency matrix holds
/// N² cells and the distance matrix N² more, each filled by its own BFS.
pub const MAX_VERTICES: usize = 4096;

/// An edge as supplied by the caller, before it lands in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeSpec {
    pub source: VertexId,
    pub target: VertexId,
    pub directed: bool,
}

impl EdgeSpec {
    pub fn directed(source: VertexId, target: VertexId) -> Self {
        Self { source, target, directed: true }
    }

    pub fn undirected(source: VertexId, target: VertexId) -> Self {
        Self { source, target, directed: false }
    }
}

/// Renders in the edge-list syntax: `a->b` for directed, `a-b` otherwise.
impl fmt::Display for EdgeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.directed { "->" } else { "-" };
        write!(f, "{}{}{}", self.source, arrow, self.target)
    }
}

/// Degree information for a single vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeResult {
    pub vertex: VertexId,
    pub out_degree: u32,
    pub in_degree: u32,
    pub total_degree: u32,
}

/// Immutable graph over a dense N×N boolean adjacency matrix.
///
/// Cell `(row, col)` set means there is an edge from `col` to `row`, so the
/// successors of `v` are found by scanning column `v`. Cells are stored
/// row-major in a single allocation. The matrix can only be populated by
/// [`Graph::build`]; nothing mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    cells: Vec<bool>,
}

impl Graph {
    /// Build a graph from a vertex count and an edge list.
    ///
    /// A directed edge `s->t` sets `(t, s)`; an undirected edge also sets
    /// `(s, t)`. Duplicate edges and self-loops are accepted as-is.
    /// Fails when `vertex_count` exceeds [`MAX_VERTICES`], or on the first
    /// edge naming a vertex `>= vertex_count`. No graph is produced then.
    pub fn build<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = EdgeSpec>,
    {
        let cell_count = vertex_count
            .checked_mul(vertex_count)
            .filter(|_| vertex_count <= MAX_VERTICES)
            .ok_or(GraphError::TooManyVertices {
                vertex_count,
                max: MAX_VERTICES,
            })?;
        let mut cells = vec![false; cell_count];
        let mut edge_total = 0usize;

        for (edge_index, edge) in edges.into_iter().enumerate() {
            if let Some(vertex) = [edge.source, edge.target]
                .into_iter()
                .find(|&v| v >= vertex_count)
            {
                tracing::warn!(edge_index, %edge, vertex, vertex_count, "rejecting edge");
                return Err(GraphError::InvalidVertex {
                    edge_index,
                    edge,
                    vertex,
                    vertex_count,
                });
            }

            cells[edge.target * vertex_count + edge.source] = true;
            if !edge.directed {
                cells[edge.source * vertex_count + edge.target] = true;
            }
            edge_total += 1;
        }

        tracing::debug!(vertex_count, edges = edge_total, "graph built");
        Ok(Self { vertex_count, cells })
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Raw matrix cell. Out-of-range coordinates read as `false`.
    pub fn is_adjacent(&self, row: VertexId, col: VertexId) -> bool {
        row < self.vertex_count && col < self.vertex_count && self.cells[row * self.vertex_count + col]
    }

    /// Vertices reachable from `v` in one hop, ascending.
    ///
    /// Scans column `v`, matching how [`Graph::build`] populates the matrix.
    pub fn successors(&self, v: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        let n = if v < self.vertex_count { self.vertex_count } else { 0 };
        (0..n).filter(move |&u| self.cells[u * self.vertex_count + v])
    }

    /// Number of set cells. An undirected edge between distinct vertices
    /// counts twice; duplicates collapse.
    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Matrix rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // chunks() panics on a zero chunk size
        self.cells.chunks(self.vertex_count.max(1))
    }

    /// Per-vertex degrees read straight from the matrix, in vertex order.
    pub fn degrees(&self) -> Vec<DegreeResult> {
        let n = self.vertex_count;
        (0..n)
            .map(|v| {
                let out_degree = self.successors(v).count() as u32;
                let in_degree = self.cells[v * n..(v + 1) * n].iter().filter(|&&c| c).count() as u32;
                DegreeResult {
                    vertex: v,
                    out_degree,
                    in_degree,
                    total_degree: out_degree + in_degree,
                }
            })
            .collect()
    }
}
