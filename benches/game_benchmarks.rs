use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lights_out::core::{GameConfig, UserAction, Vec2, new_game, step};
use std::hint::black_box;

const GRID_SIZES: &[(usize, usize)] = &[(3, 3), (5, 5), (10, 10)];

pub fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for &(nrows, ncols) in GRID_SIZES {
        let config = GameConfig::new(nrows, ncols, 0.5).unwrap();
        let state = new_game(&config);
        let target = Vec2 {
            i: nrows as i32 / 2,
            j: ncols as i32 / 2,
        };
        group.bench_with_input(
            BenchmarkId::new("interior_toggle", format!("{}x{}", nrows, ncols)),
            &state,
            |b, state| b.iter(|| step(black_box(state), UserAction::Activate(target))),
        );
    }

    group.finish();
}

pub fn bench_is_won(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_won");

    for &(nrows, ncols) in GRID_SIZES {
        let config = GameConfig::new(nrows, ncols, 1.0).unwrap();
        // All-lit grid forces a full scan
        let state = new_game(&config);
        group.bench_with_input(
            BenchmarkId::new("full_scan", format!("{}x{}", nrows, ncols)),
            &state,
            |b, state| b.iter(|| black_box(state).is_won()),
        );
    }

    group.finish();
}

pub fn bench_new_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("new_game");

    for &(nrows, ncols) in GRID_SIZES {
        let config = GameConfig::new(nrows, ncols, 0.5).unwrap();
        group.bench_with_input(
            BenchmarkId::new("random_init", format!("{}x{}", nrows, ncols)),
            &config,
            |b, config| b.iter(|| new_game(black_box(config))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_step, bench_is_won, bench_new_game);
criterion_main!(benches);
