use crate::graph::Graph;
use crate::partition::{partition_from_matrix, Partition};
use crate::traversal::{distance_matrix, DistanceMatrix};

/// Everything the engine can say about a graph, from a single matrix build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub distances: DistanceMatrix,
    pub connected: bool,
    /// Present exactly when `connected`.
    pub diameter: Option<usize>,
    /// Only computed when the graph is not connected.
    pub components: Option<Partition>,
}

/// True when every ordered pair has a finite distance.
///
/// For directed edges this is strong connectivity. Graphs with zero or one
/// vertex are vacuously connected.
pub fn is_connected(matrix: &DistanceMatrix) -> bool {
    !matrix.has_unreachable()
}

/// Longest shortest path, or None if some pair is unreachable.
pub fn diameter(graph: &Graph) -> Option<usize> {
    diameter_of(&distance_matrix(graph))
}

fn diameter_of(matrix: &DistanceMatrix) -> Option<usize> {
    if !is_connected(matrix) {
        return None;
    }
    Some(matrix.max_finite().unwrap_or(0))
}

/// Build the distance matrix once and derive connectivity, diameter and,
/// for disconnected graphs, the component partition.
pub fn analyze(graph: &Graph) -> Analysis {
    let distances = distance_matrix(graph);
    let connected = is_connected(&distances);
    let diameter = diameter_of(&distances);
    let components = (!connected).then(|| partition_from_matrix(&distances));

    Analysis {
        distances,
        connected,
        diameter,
        components,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeSpec;
    use crate::partition::{components, isolated_vertices};
    use crate::traversal::shortest_path;
    use proptest::prelude::*;

    fn undirected(n: usize, edges: &[(usize, usize)]) -> Graph {
        Graph::build(n, edges.iter().map(|&(s, t)| EdgeSpec::undirected(s, t))).unwrap()
    }

    fn directed(n: usize, edges: &[(usize, usize)]) -> Graph {
        Graph::build(n, edges.iter().map(|&(s, t)| EdgeSpec::directed(s, t))).unwrap()
    }

    fn make_star(leaves: usize) -> Graph {
        let edges: Vec<_> = (1..=leaves).map(|i| (0, i)).collect();
        undirected(leaves + 1, &edges)
    }

    #[test]
    fn test_undirected_path_of_three() {
        let g = undirected(3, &[(0, 1), (1, 2)]);
        let m = distance_matrix(&g);
        assert_eq!(m.get(0, 2), Some(2));
        assert!(is_connected(&m));
        assert_eq!(diameter(&g), Some(2));

        let a = analyze(&g);
        assert!(a.connected);
        assert_eq!(a.diameter, Some(2));
        assert!(a.components.is_none());
    }

    #[test]
    fn test_two_islands() {
        let g = undirected(4, &[(0, 1), (2, 3)]);
        let a = analyze(&g);
        assert!(!a.connected);
        assert_eq!(a.diameter, None);
        assert_eq!(a.components, Some(vec![vec![0, 1], vec![2, 3]]));
    }

    #[test]
    fn test_directed_chain_not_strongly_connected() {
        let g = directed(3, &[(0, 1), (1, 2)]);
        let m = distance_matrix(&g);
        assert_eq!(m.get(0, 2), Some(2));
        assert_eq!(m.get(2, 0), None);
        assert!(!is_connected(&m));
        assert_eq!(diameter(&g), None);
    }

    #[test]
    fn test_single_vertex() {
        let g = undirected(1, &[]);
        assert!(is_connected(&distance_matrix(&g)));
        assert_eq!(diameter(&g), Some(0));
    }

    #[test]
    fn test_empty_graph() {
        let g = undirected(0, &[]);
        let a = analyze(&g);
        assert!(a.connected);
        assert_eq!(a.diameter, Some(0));
    }

    #[test]
    fn test_directed_cycle_connected() {
        let g = directed(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert!(is_connected(&distance_matrix(&g)));
        assert_eq!(diameter(&g), Some(3));
    }

    #[test]
    fn test_star_diameter() {
        let g = make_star(8);
        assert_eq!(diameter(&g), Some(2));
    }

    #[test]
    fn test_no_edges_disconnected() {
        let g = undirected(3, &[]);
        let a = analyze(&g);
        assert!(!a.connected);
        assert_eq!(a.components, Some(Vec::new()));
    }

    fn arb_graph() -> impl Strategy<Value = (Graph, bool)> {
        (1usize..8, any::<bool>()).prop_flat_map(|(n, all_undirected)| {
            let edge = (0..n, 0..n, any::<bool>())
                .prop_map(move |(s, t, d)| EdgeSpec { source: s, target: t, directed: d && !all_undirected });
            prop::collection::vec(edge, 0..12).prop_map(move |edges| {
                (Graph::build(n, edges).unwrap(), all_undirected)
            })
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_self_distance_zero((g, _) in arb_graph()) {
            let m = distance_matrix(&g);
            for v in 0..g.vertex_count() {
                prop_assert_eq!(m.get(v, v), Some(0));
            }
        }

        #[test]
        fn prop_undirected_symmetric((g, all_undirected) in arb_graph()) {
            if all_undirected {
                prop_assert!(distance_matrix(&g).is_symmetric());
            }
        }

        #[test]
        fn prop_distances_bounded((g, _) in arb_graph()) {
            let n = g.vertex_count();
            for (_, _, d) in distance_matrix(&g).cells() {
                if let Some(d) = d {
                    prop_assert!(d < n);
                }
            }
        }

        #[test]
        fn prop_diameter_iff_connected((g, _) in arb_graph()) {
            let connected = is_connected(&distance_matrix(&g));
            let d = diameter(&g);
            prop_assert_eq!(d.is_some(), connected);
            if let Some(d) = d {
                prop_assert!(d < g.vertex_count());
            }
        }

        #[test]
        fn prop_connected_means_one_full_component((g, _) in arb_graph()) {
            let n = g.vertex_count();
            let connected = is_connected(&distance_matrix(&g));
            let partition = components(&g);

            // Put isolated vertices back as singletons
            let mut full = partition.clone();
            full.extend(isolated_vertices(n, &partition).into_iter().map(|v| vec![v]));
            if connected {
                prop_assert_eq!(full.len(), 1);
                prop_assert_eq!(full[0].len(), n);
            }
        }

        #[test]
        fn prop_components_disjoint((g, _) in arb_graph()) {
            let partition = components(&g);
            let mut seen = vec![false; g.vertex_count()];
            for &v in partition.iter().flatten() {
                prop_assert!(!seen[v]);
                seen[v] = true;
            }
        }

        #[test]
        fn prop_engine_matches_direct_bfs((g, _) in arb_graph()) {
            let a = analyze(&g);
            for (s, t, d) in a.distances.cells() {
                prop_assert_eq!(d, shortest_path(&g, s, t));
            }
        }
    }
}
