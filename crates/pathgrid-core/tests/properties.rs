//! Cross-algorithm invariants on random matrices.
//!
//! Most strategies use small integer weights so every sum is exact in `f64`.
//! Trees carry fractional weights; with one path per pair the sums must still
//! agree bit for bit.

use pathgrid_common::AdjacencyMatrix;
use pathgrid_core::{Config, Graph, johnson_with_config};
use proptest::prelude::*;

fn matrix_strategy(min_weight: i32, max_weight: i32) -> impl Strategy<Value = AdjacencyMatrix> {
    (0usize..7).prop_flat_map(move |n| {
        prop::collection::vec(
            prop::collection::vec(
                prop::option::weighted(0.4, (min_weight..=max_weight).prop_map(f64::from)),
                n,
            ),
            n,
        )
        .prop_map(|rows| AdjacencyMatrix::from_rows(rows).unwrap())
    })
}

/// Out-trees: vertex `i > 0` hangs off a random earlier vertex.
fn tree_strategy() -> impl Strategy<Value = AdjacencyMatrix> {
    (1usize..8).prop_flat_map(|n| {
        prop::collection::vec((0usize..n, -5.0f64..5.0), n - 1).prop_map(move |links| {
            let mut m = AdjacencyMatrix::new(n);
            for (i, (parent, weight)) in links.into_iter().enumerate() {
                let child = i + 1;
                m[(parent % child, child)] = Some(weight);
            }
            m
        })
    })
}

proptest! {
    #[test]
    fn prop_round_trip_coerces_only_diagonal(m in matrix_strategy(-5, 5)) {
        let graph = Graph::from_matrix(&m);
        for (u, v, cell) in m.iter() {
            if u == v {
                prop_assert_eq!(graph[(u, v)], Some(cell.unwrap_or(0.0)));
            } else {
                prop_assert_eq!(graph[(u, v)], *cell);
            }
        }
    }

    #[test]
    fn prop_dijkstra_agrees_with_bellman_ford(m in matrix_strategy(0, 9)) {
        let graph = Graph::from_matrix(&m);
        for source in 0..graph.vertex_count() {
            let bf = graph.bellman_ford(source).unwrap();
            let dj = graph.dijkstra(source).unwrap();
            prop_assert_eq!(&bf, &dj.distances);
        }
    }

    #[test]
    fn prop_source_entry_is_self_loop(m in matrix_strategy(0, 9)) {
        let graph = Graph::from_matrix(&m);
        for source in 0..graph.vertex_count() {
            let expected = graph[(source, source)];
            prop_assert_eq!(graph.bellman_ford(source).unwrap()[source], expected);
            prop_assert_eq!(graph.dijkstra(source).unwrap().distances[source], expected);
        }
    }

    #[test]
    fn prop_distances_are_finite(m in matrix_strategy(-3, 9)) {
        let graph = Graph::from_matrix(&m);
        for source in 0..graph.vertex_count() {
            if let Ok(dist) = graph.bellman_ford(source) {
                prop_assert!(dist.iter().flatten().all(|d| d.is_finite()));
            }
        }
    }

    #[test]
    fn prop_johnson_matches_bellman_ford(m in matrix_strategy(-3, 9)) {
        let graph = Graph::from_matrix(&m);
        let n = graph.vertex_count();
        let single: Vec<_> = (0..n).map(|v| graph.bellman_ford(v)).collect();
        let has_cycle = single.iter().any(Result::is_err);

        match graph.johnson() {
            Err(_) => prop_assert!(has_cycle),
            Ok(all) => {
                prop_assert!(!has_cycle);
                for (v, row) in single.into_iter().enumerate() {
                    let row = row.unwrap();
                    for u in 0..n {
                        if u == v {
                            prop_assert_eq!(all[(v, v)], graph[(v, v)]);
                        } else {
                            prop_assert_eq!(all[(v, u)], row[u]);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn prop_parallel_johnson_is_deterministic(m in matrix_strategy(-3, 9)) {
        let sequential = johnson_with_config(&m, &Config::sequential());
        let parallel = johnson_with_config(&m, &Config::parallel().with_parallel_threshold(0));
        match (sequential, parallel) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(_), Err(_)) => {}
            (a, b) => prop_assert!(false, "mismatch: {:?} vs {:?}", a, b),
        }
    }

    #[test]
    fn prop_johnson_matches_bellman_ford_fractional(m in tree_strategy()) {
        let graph = Graph::from_matrix(&m);
        let all = graph.johnson().unwrap();
        for v in 0..graph.vertex_count() {
            let row = graph.bellman_ford(v).unwrap();
            prop_assert_eq!(all.row(v), row.as_slice());
        }
    }
}
