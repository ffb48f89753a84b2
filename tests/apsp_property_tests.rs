use dense_apsp::matrix::initialize;
use dense_apsp::{AllPairsShortestPaths, FloydWarshall, RelaxationEngine, RelaxationMode};
use proptest::prelude::*;
use proptest::strategy::Strategy;
use std::collections::HashMap;

const NUM_NODES_STRATEGY: std::ops::Range<usize> = 1usize..9;
const TOLERANCE: f64 = 1e-9;

fn graph_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, f64)>)> {
    NUM_NODES_STRATEGY.prop_flat_map(|num_nodes| {
        // Quarter steps keep every sum exact, so re-relaxing cannot find an
        // ulp-sized "improvement"
        let weight_generator = (1u32..200).prop_map(|w| w as f64 / 4.0);
        let edge_generator = (0usize..num_nodes, 0usize..num_nodes, weight_generator);
        let edges_generator = prop::collection::vec(edge_generator, 0..40);

        (proptest::strategy::Just(num_nodes), edges_generator)
    })
}

fn relaxed(num_nodes: usize, edges: &[(usize, usize, f64)]) -> FloydWarshall<usize, f64> {
    let batch = dense_apsp::EdgeBatch {
        vertices: (0..num_nodes).collect(),
        edges: edges.to_vec(),
    };
    let mut apsp = FloydWarshall::from_ingestor(batch).unwrap();
    apsp.generate_distance_matrix();
    apsp
}

proptest! {
    /// Property: every vertex is at distance zero from itself
    #[test]
    fn diagonal_stays_zero((num_nodes, edges) in graph_strategy()) {
        let apsp = relaxed(num_nodes, &edges);
        for i in 0..num_nodes {
            prop_assert_eq!(apsp.distance_by_id(i, i).unwrap(), Some(0.0));
        }
    }

    /// Property: D[i][j] <= D[i][k] + D[k][j] whenever the right side is finite
    #[test]
    fn triangle_inequality_holds((num_nodes, edges) in graph_strategy()) {
        let apsp = relaxed(num_nodes, &edges);
        let d = apsp.distances();
        for k in 0..num_nodes {
            for i in 0..num_nodes {
                for j in 0..num_nodes {
                    if let (Some(ik), Some(kj)) = (d.distance(i, k), d.distance(k, j)) {
                        let ij = d.distance(i, j);
                        prop_assert!(ij.is_some());
                        prop_assert!(ij.unwrap() <= ik + kj + TOLERANCE);
                    }
                }
            }
        }
    }

    /// Property: a second relaxation pass changes nothing
    #[test]
    fn relaxation_is_idempotent((num_nodes, edges) in graph_strategy()) {
        let (mut distances, mut next_hops) = initialize(num_nodes, &edges).unwrap();
        let engine = RelaxationEngine::new();
        engine.relax(&mut distances, &mut next_hops).unwrap();

        let before = (distances.clone(), next_hops.clone());
        let stats = engine.relax(&mut distances, &mut next_hops).unwrap();
        prop_assert_eq!(stats.updates, 0);
        prop_assert_eq!((distances, next_hops), before);
    }

    /// Property: reconstructed paths use real edges and add up to the distance
    #[test]
    fn path_weight_equals_distance((num_nodes, edges) in graph_strategy()) {
        let apsp = relaxed(num_nodes, &edges);
        let mut weights = HashMap::new();
        for &(u, v, w) in &edges {
            weights.insert((u, v), w);
        }

        for source in 0..num_nodes {
            for target in 0..num_nodes {
                match apsp.path_by_id(source, target).unwrap() {
                    None => prop_assert!(apsp.distance_by_id(source, target).unwrap().is_none()),
                    Some(path) => {
                        prop_assert_eq!(path.source(), source);
                        prop_assert_eq!(path.target(), target);
                        prop_assert!(path.vertices.len() <= num_nodes);

                        let mut total = 0.0;
                        for pair in path.vertices.windows(2) {
                            let weight = weights.get(&(pair[0], pair[1]));
                            prop_assert!(weight.is_some());
                            total += weight.unwrap();
                        }
                        prop_assert!((total - path.distance).abs() < TOLERANCE);
                    }
                }
            }
        }
    }

    /// Property: the parallel sweep produces the same matrices
    #[test]
    fn parallel_matches_sequential((num_nodes, edges) in graph_strategy()) {
        let (mut seq_d, mut seq_n) = initialize(num_nodes, &edges).unwrap();
        let (mut par_d, mut par_n) = initialize(num_nodes, &edges).unwrap();

        RelaxationEngine::new().relax(&mut seq_d, &mut seq_n).unwrap();
        RelaxationEngine::new().with_mode(RelaxationMode::Parallel).relax(&mut par_d, &mut par_n).unwrap();

        prop_assert_eq!(seq_d, par_d);
        prop_assert_eq!(seq_n, par_n);
    }
}
