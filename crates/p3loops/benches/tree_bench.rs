//! Criterion benches for move trees and random walks.
//!
//! - move tree from the seed edge at branch depths 2 and 4.
//! - seeded random walk of up to 16 edges; each iteration draws a fresh replay token.
//! - full validation of a walked path in the continuous representation.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use p3loops::cfg::{EngineCfg, SameGeneratorRule};
use p3loops::domain::Domain;
use p3loops::path::DiscretePath;
use p3loops::search::{MoveTree, TreeCfg};
use p3loops::validate::Validator;
use p3loops::walk::{random_walk, ReplayToken};

fn bench_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("tree");
    let square = Domain::quarter_turn_square().unwrap();
    let seed = DiscretePath::seed(&square).to_continuous().unwrap();
    for depth in [2usize, 4] {
        group.bench_function(BenchmarkId::new("build", depth), |b| {
            b.iter(|| {
                let tree = MoveTree::build(&square, &seed, depth, TreeCfg::default()).unwrap();
                tree.len()
            })
        });
    }
    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");
    let half = Domain::half_turn_square().unwrap();
    group.bench_function(BenchmarkId::new("random_walk", "p2z2-16"), |b| {
        let mut tok = ReplayToken::new(42, 0);
        b.iter(|| {
            tok.index = tok.index.wrapping_add(1);
            random_walk(&half, tok, 16, SameGeneratorRule::Literal)
        })
    });
    group.bench_function(BenchmarkId::new("validate_path", "p2z2-16"), |b| {
        b.iter_batched(
            || {
                random_walk(&half, ReplayToken::new(7, 99), 16, SameGeneratorRule::Literal)
                    .to_continuous()
                    .unwrap()
            },
            |path| {
                let v = Validator::continuous(&half, EngineCfg::default());
                let _ = v.validate_path(path.edges()).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_tree, bench_walk);
criterion_main!(benches);
