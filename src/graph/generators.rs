use crate::graph::EdgeBatch;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::ops::Range;

/// Generates a random directed graph with `n` vertices and `m` edges.
///
/// Vertices `0..n` are all declared, so vertices without edges stay in the
/// matrix. Self-loops are skipped; repeated pairs are kept and therefore
/// resolve as last-write-wins when the matrix is built. The same seed always
/// yields the same graph.
pub fn random_graph(
    n: usize,
    m: usize,
    weights: Range<f64>,
    seed: u64,
) -> EdgeBatch<usize, OrderedFloat<f64>> {
    assert!(n > 1 || m == 0, "need at least two vertices to place edges");
    assert!(weights.start < weights.end, "weight range must not be empty");

    let mut batch = EdgeBatch::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        batch.push_vertex(v);
    }

    let mut added = 0;
    while added < m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v {
            continue;
        }
        let weight = OrderedFloat(rng.gen_range(weights.clone()));
        batch.push_edge(u, v, weight);
        added += 1;
    }

    batch
}

/// Generates a `width` x `height` grid with unit-weight edges in both
/// directions between 4-neighbours. Vertex `(x, y)` has label `y * width + x`.
pub fn grid_graph(width: usize, height: usize) -> EdgeBatch<usize, OrderedFloat<f64>> {
    let mut batch = EdgeBatch::new();

    for v in 0..(width * height) {
        batch.push_vertex(v);
    }

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;

            if x + 1 < width {
                batch.push_edge(vertex, vertex + 1, OrderedFloat(1.0));
                batch.push_edge(vertex + 1, vertex, OrderedFloat(1.0));
            }
            if y + 1 < height {
                batch.push_edge(vertex, vertex + width, OrderedFloat(1.0));
                batch.push_edge(vertex + width, vertex, OrderedFloat(1.0));
            }
        }
    }

    batch
}

/// Generates a directed ring `0 -> 1 -> ... -> n-1 -> 0` with a uniform weight
pub fn ring_graph(n: usize, weight: f64) -> EdgeBatch<usize, OrderedFloat<f64>> {
    let mut batch = EdgeBatch::new();

    for v in 0..n {
        batch.push_vertex(v);
    }
    if n > 1 {
        for v in 0..n {
            batch.push_edge(v, (v + 1) % n, OrderedFloat(weight));
        }
    }

    batch
}
