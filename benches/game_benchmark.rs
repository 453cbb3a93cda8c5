//! Benchmarks for action selection and complete ticks.
//!
//! Evaluation scans the whole board per call, so selection cost grows with
//! the number of eligible cells. These benchmarks track that hot path.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use frontier::{GameState, SimConfig, compute_actions};

/// A game advanced far enough that both players hold many eligible cells.
fn midgame(ticks: u64) -> GameState {
    let mut game = GameState::new(SimConfig::default()).unwrap();
    for _ in 0..ticks {
        game.step().unwrap();
    }
    game
}

fn bench_compute_actions(c: &mut Criterion) {
    let game = midgame(40);
    let player = game.next_player();

    c.bench_function("compute_actions_midgame", |b| {
        b.iter(|| black_box(compute_actions(black_box(&game.board), black_box(player))));
    });
}

fn bench_single_tick(c: &mut Criterion) {
    let game = midgame(40);

    c.bench_function("single_tick_midgame", |b| {
        b.iter(|| {
            let mut game = game.clone();
            black_box(game.step().unwrap())
        });
    });
}

fn bench_full_run(c: &mut Criterion) {
    c.bench_function("100_ticks_from_start", |b| {
        b.iter(|| black_box(midgame(black_box(100))));
    });
}

criterion_group!(benches, bench_compute_actions, bench_single_tick, bench_full_run);
criterion_main!(benches);
