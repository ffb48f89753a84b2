use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use dense_apsp::graph::generators::random_graph;
use dense_apsp::matrix::initialize;
use dense_apsp::{FloydWarshall, RelaxationEngine, RelaxationMode};

fn bench_relaxation(c: &mut Criterion) {
    let mut group = c.benchmark_group("relaxation");
    group.sample_size(10);

    for &vertices in &[64usize, 128, 256] {
        let batch = random_graph(vertices, vertices * 8, 1.0..100.0, 7);
        let edges: Vec<(usize, usize, _)> = batch.edges.clone();

        for mode in [RelaxationMode::Sequential, RelaxationMode::Parallel] {
            let engine = RelaxationEngine::new().with_mode(mode);
            group.bench_with_input(BenchmarkId::new(format!("{:?}", mode), vertices), &edges, |b, edges| {
                b.iter(|| {
                    let (mut distances, mut next_hops) = initialize(vertices, edges).expect("ids in range");
                    engine.relax(&mut distances, &mut next_hops).expect("matrices built together")
                });
            });
        }
    }
    group.finish();
}

fn bench_path_queries(c: &mut Criterion) {
    let mut apsp = FloydWarshall::from_ingestor(random_graph(200, 1_600, 1.0..100.0, 11)).expect("valid graph");
    apsp.generate_distance_matrix();

    c.bench_function("path_all_pairs_200", |b| {
        b.iter(|| {
            let mut hops = 0;
            for source in 0..200usize {
                for target in 0..200usize {
                    if let Ok(Some(path)) = apsp.path(&source, &target) {
                        hops += path.len();
                    }
                }
            }
            hops
        });
    });
}

criterion_group!(benches, bench_relaxation, bench_path_queries);
criterion_main!(benches);
