use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nonet::grid::Grid;

// Seeding can fail when propagation empties a randomly chosen cell, so scan
// seeds until one produces a clean puzzle.
fn seeded_grid(presets: usize) -> Grid {
    for seed in 0..1000 {
        let mut grid = Grid::from_seed(seed);
        if grid.initialize(presets).is_ok() {
            return grid;
        }
    }
    panic!("no seed below 1000 yields {presets} clean presets");
}

fn bench_propagation_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("propagation_pass");
    for presets in [10, 24, 40] {
        let grid = seeded_grid(presets);
        group.bench_with_input(BenchmarkId::from_parameter(presets), &grid, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| black_box(grid.propagate_constraints()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_stepping_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("stepping_run");
    for presets in [10, 24] {
        let grid = seeded_grid(presets);
        group.bench_with_input(BenchmarkId::from_parameter(presets), &grid, |b, grid| {
            b.iter_batched(
                || grid.clone(),
                |mut grid| {
                    // One run, no recovery: stop at the first deadlock.
                    while !grid.solved() && !grid.deadlock() {
                        grid.set_next_cell()
                            .expect("uncommitted non-empty cell exists");
                    }
                    black_box(grid.stats().steps)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_propagation_pass, bench_stepping_run);
criterion_main!(benches);
