//! Benchmarks for the equity simulator.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sixcard_equity::cards::{Card, HandEvaluator, HandRanker};
use sixcard_equity::{validate_and_parse, SimConfig, Simulator};

fn cards<const N: usize>(s: &str) -> [Card; N] {
    let parsed: Vec<Card> = s.split_whitespace().filter_map(Card::parse).collect();
    let mut out = [Card::from_id(0); N];
    out.copy_from_slice(&parsed[..N]);
    out
}

fn best_rank_benchmark(c: &mut Criterion) {
    let eval = HandEvaluator::new();
    let hole: [Card; 6] = cards("Ah Ac Kh Qc 9d 2s");
    let board: [Card; 5] = cards("Jh Th 7c 4h 3d");

    c.bench_function("best_rank_150_combos", |b| {
        b.iter(|| eval.best_rank(black_box(&hole), black_box(&board)))
    });
}

fn batch_benchmark(c: &mut Criterion) {
    let specs = validate_and_parse(&["Ah.Ac.oh.oc.x.x", "x.x.x.x.x.x", "x.x.x.x.x.x"]).unwrap();
    let simulator = Simulator::new(specs, SimConfig::default());

    c.bench_function("three_way_1000_trials", |b| {
        b.iter(|| simulator.run_batch(black_box(42), 1_000))
    });
}

criterion_group!(benches, best_rank_benchmark, batch_benchmark);
criterion_main!(benches);
