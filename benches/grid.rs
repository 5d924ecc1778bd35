//! Benchmarks for the Game of Life transition.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use conway_life::{
    compute::Grid,
    schema::{Pattern, Seed},
};

fn bench_next_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_generation");

    for size in [25, 64, 256, 1024] {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::random(size, size, 0.4, &mut rng).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| {
                    black_box(&mut grid).next_generation();
                });
            },
        );
    }

    group.finish();
}

fn bench_neighbor_count(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let seed = Seed {
        pattern: Pattern::Random,
    };
    let grid = Grid::from_seed(&seed, 256, 256, 0.5, &mut rng).unwrap();

    c.bench_function("count_live_neighbors_256", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for row in 0..grid.height() {
                for col in 0..grid.width() {
                    total += u32::from(grid.count_live_neighbors(black_box(row), col));
                }
            }
            total
        });
    });
}

criterion_group!(benches, bench_next_generation, bench_neighbor_count);
criterion_main!(benches);
