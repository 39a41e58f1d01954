use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use engine_graph::{Category, EvalScore, GraphAdapter, GraphConfig, HeadlessBackend, MoveRecord};

fn gen_game(plies: u32) -> Vec<Option<MoveRecord>> {
    (0..plies)
        .map(|ply| {
            Some(MoveRecord {
                ply,
                eval: Some(EvalScore::Pawns((ply as f64 * 0.01).sin() * 3.0)),
                depth: Some(30.0),
                selective_depth: Some(45.0),
                nodes: Some(1.0e8),
                speed: Some(4.0e6),
                tb_hits: Some(0.0),
                time_ms: Some(12_000.0),
                book: ply < 8,
            })
        })
        .collect()
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_move_batch");
    for &plies in &[160u32, 600u32] {
        let moves = gen_game(plies);
        for category in [Category::Eval, Category::Depth, Category::Speed] {
            group.bench_with_input(BenchmarkId::new(category.as_str(), plies), &moves, |b, moves| {
                b.iter_batched(
                    || {
                        let mut a = GraphAdapter::new(GraphConfig::default(), HeadlessBackend);
                        a.initialize_categories();
                        a.ensure_chart_views();
                        a
                    },
                    |mut a| {
                        a.apply_move_batch(Some(category), moves, 0);
                        black_box(a.dataset(category).map(|d| d.labels.len()));
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_batch);
criterion_main!(benches);
