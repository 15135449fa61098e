//! Component partitioning over the distance matrix.
//!
//! Two vertices share a component when either reaches the other along a
//! path of one or more edges. Merging goes through a disjoint-set forest, so
//! the resulting partition does not depend on the order pairs are visited.

use crate::graph::{Graph, VertexId};
use crate::traversal::{distance_matrix, DistanceMatrix};

/// Vertices of one component, ascending.
pub type Component = Vec<VertexId>;

/// Disjoint components ordered by their smallest member.
pub type Partition = Vec<Component>;

/// Disjoint-set forest with path compression and union by rank.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    set_count: usize,
}

impl DisjointSet {
    /// `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            set_count: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets, singletons included.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Representative of `x`'s set.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Merge the sets holding `x` and `y`. Returns true if they were distinct.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x == root_y {
            return false;
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Less => self.parent[root_x] = root_y,
            std::cmp::Ordering::Greater => self.parent[root_y] = root_x,
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }

        self.set_count -= 1;
        true
    }

    pub fn connected(&mut self, x: usize, y: usize) -> bool {
        self.find(x) == self.find(y)
    }

    /// Every set as an ascending member list, ordered by smallest member.
    pub fn groups(&mut self) -> Vec<Vec<usize>> {
        let n = self.parent.len();
        let mut slot_of_root: Vec<Option<usize>> = vec![None; n];
        let mut groups: Vec<Vec<usize>> = Vec::new();

        // Ascending scan: members land sorted and a group's first member is its minimum
        for v in 0..n {
            let root = self.find(v);
            let slot = *slot_of_root[root].get_or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(v);
        }

        groups
    }
}

/// Partition the graph's vertices into components.
///
/// Vertices with no path to or from any other vertex (including ones whose
/// only edge is a self-loop) belong to no component and are left out.
pub fn components(graph: &Graph) -> Partition {
    partition_from_matrix(&distance_matrix(graph))
}

/// Same as [`components`], over an already computed matrix.
pub fn partition_from_matrix(matrix: &DistanceMatrix) -> Partition {
    let mut sets = DisjointSet::new(matrix.size());

    for (s, t, distance) in matrix.cells() {
        if matches!(distance, Some(d) if d > 0) {
            sets.union(s, t);
        }
    }

    let partition: Partition = sets.groups().into_iter().filter(|g| g.len() > 1).collect();
    tracing::debug!(components = partition.len(), "partition computed");
    partition
}

/// Vertices that appear in no component of `partition`, ascending.
pub fn isolated_vertices(vertex_count: usize, partition: &Partition) -> Vec<VertexId> {
    let mut covered = vec![false; vertex_count];
    for &v in partition.iter().flatten() {
        covered[v] = true;
    }
    (0..vertex_count).filter(|&v| !covered[v]).collect()
}
