use std::collections::VecDeque;

use crate::graph::{Graph, VertexId};

/// Shortest path length from `start` to `end` in edges, using BFS (unweighted).
///
/// Follows the directed relation: `s->t` makes `t` reachable from `s`, an
/// undirected edge works both ways. Returns None if no path exists or if
/// either vertex is out of range. `start == end` is always `Some(0)`.
pub fn shortest_path(graph: &Graph, start: VertexId, end: VertexId) -> Option<usize> {
    let n = graph.vertex_count();
    if start >= n || end >= n {
        return None;
    }

    let mut visited = vec![false; n];
    let mut queue: VecDeque<(VertexId, usize)> = VecDeque::new();

    visited[start] = true;
    queue.push_back((start, 0));

    while let Some((current, distance)) = queue.pop_front() {
        if current == end {
            return Some(distance);
        }

        for next in graph.successors(current) {
            // Marked at enqueue time so each vertex is queued at most once
            if !visited[next] {
                visited[next] = true;
                queue.push_back((next, distance + 1));
            }
        }
    }

    None
}

/// One shortest route from `start` to `end`, both endpoints included.
///
/// Stores parent pointers instead of cloning partial routes, and rebuilds
/// the route only once `end` is reached. Returns None under the same
/// conditions as [`shortest_path`].
pub fn shortest_route(graph: &Graph, start: VertexId, end: VertexId) -> Option<Vec<VertexId>> {
    let n = graph.vertex_count();
    if start >= n || end >= n {
        return None;
    }

    if start == end {
        return Some(vec![start]);
    }

    // parent[v] is set when v is first enqueued; start points at itself
    let mut parent: Vec<Option<VertexId>> = vec![None; n];
    let mut queue: VecDeque<VertexId> = VecDeque::new();

    parent[start] = Some(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for next in graph.successors(current) {
            if parent[next].is_none() {
                parent[next] = Some(current);

                if next == end {
                    return Some(reconstruct_route(&parent, start, end));
                }

                queue.push_back(next);
            }
        }
    }

    None
}

fn reconstruct_route(parent: &[Option<VertexId>], start: VertexId, end: VertexId) -> Vec<VertexId> {
    let mut route = vec![end];
    let mut current = end;

    while current != start {
        match parent[current] {
            Some(p) => {
                route.push(p);
                current = p;
            }
            None => break,
        }
    }

    route.reverse();
    route
}

/// All-pairs shortest path lengths. `None` marks an unreachable pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<Option<usize>>,
}

impl DistanceMatrix {
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distance from `source` to `target`; None when unreachable or out of range.
    pub fn get(&self, source: VertexId, target: VertexId) -> Option<usize> {
        if source >= self.size || target >= self.size {
            return None;
        }
        self.cells[source * self.size + target]
    }

    /// Rows indexed by source vertex.
    pub fn rows(&self) -> impl Iterator<Item = &[Option<usize>]> + '_ {
        self.cells.chunks(self.size.max(1))
    }

    /// Iterate every cell as `(source, target, distance)`.
    pub fn cells(&self) -> impl Iterator<Item = (VertexId, VertexId, Option<usize>)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &d)| (i / n, i % n, d))
    }

    pub fn has_unreachable(&self) -> bool {
        self.cells.iter().any(Option::is_none)
    }

    /// Largest finite distance, or None for an empty matrix.
    pub fn max_finite(&self) -> Option<usize> {
        self.cells.iter().flatten().copied().max()
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|s| (s + 1..self.size).all(|t| self.get(s, t) == self.get(t, s)))
    }
}

/// Build the all-pairs distance table with one BFS per ordered pair.
///
/// O(N⁴) over the dense matrix; intended for small, hand-entered graphs.
pub fn distance_matrix(graph: &Graph) -> DistanceMatrix {
    let n = graph.vertex_count();
    let cells = (0..n)
        .flat_map(|s| (0..n).map(move |t| (s, t)))
        .map(|(s, t)| shortest_path(graph, s, t))
        .collect();

    DistanceMatrix { size: n, cells }
}
