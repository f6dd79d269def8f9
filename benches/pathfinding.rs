//! Pathfinder Benchmarks
//!
//! Breadth-first search over the full 800x600 lattice:
//! - Open arena, corner to corner
//! - A seeded arena like the ones the game generates
//! - An enclosed goal, which forces a full flood before giving up
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use coinrush::generation::utils::create_rng;
use coinrush::{
    find_path, populate_arena, Arena, LatticeGrid, ObstacleSnapshot, Position, Rect, SpawnConfig,
    SpawnCounts,
};

fn seeded_snapshot(counts: SpawnCounts) -> ObstacleSnapshot {
    let config = SpawnConfig::new(4242, counts);
    let mut arena = Arena::reference();
    populate_arena(&mut arena, &config, &mut create_rng(&config));
    arena.obstacle_snapshot()
}

fn enclosed_goal_snapshot() -> ObstacleSnapshot {
    // A box around (400, 300) thicker than the longest jump
    ObstacleSnapshot::new(
        vec![
            Rect::new(340, 240, 120, 30),
            Rect::new(340, 330, 120, 30),
            Rect::new(340, 270, 30, 60),
            Rect::new(430, 270, 30, 60),
        ],
        Vec::new(),
    )
}

fn bench_find_path(c: &mut Criterion) {
    let grid = LatticeGrid::arena();
    let mut group = c.benchmark_group("find_path");

    let open = ObstacleSnapshot::empty();
    group.bench_function("open_corner_to_corner", |b| {
        b.iter(|| {
            find_path(
                &grid,
                black_box(Position::new(0, 0)),
                black_box(Position::new(795, 595)),
                &open,
            )
        })
    });

    for count in [5u32, 10, 20] {
        let snapshot = seeded_snapshot(SpawnCounts::new(count, count, 0));
        group.bench_with_input(
            BenchmarkId::new("seeded_arena", count),
            &snapshot,
            |b, snapshot| {
                b.iter(|| {
                    find_path(
                        &grid,
                        black_box(Position::new(400, 300)),
                        black_box(Position::new(60, 60)),
                        snapshot,
                    )
                })
            },
        );
    }

    let enclosed = enclosed_goal_snapshot();
    group.bench_function("unreachable_goal", |b| {
        b.iter(|| {
            find_path(
                &grid,
                black_box(Position::new(0, 0)),
                black_box(Position::new(400, 300)),
                &enclosed,
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_find_path);
criterion_main!(benches);
