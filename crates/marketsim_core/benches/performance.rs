//! Performance benchmarks for marketsim_core using Criterion.rs.

use bevy_ecs::prelude::World;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use marketsim_core::runner::{month_schedule, run_month, run_year};
use marketsim_core::scenario::{build_scenario, ScenarioParams};

fn build_world(max_drivers: usize, max_riders: usize, seed: u64) -> World {
    let mut world = World::new();
    build_scenario(
        &mut world,
        ScenarioParams::default()
            .with_market_size(max_drivers, max_riders)
            .with_platform_take(6.0)
            .with_seed(seed),
    )
    .expect("valid scenario");
    world
}

fn bench_year_run(c: &mut Criterion) {
    let scenarios = [("small", 5, 100), ("medium", 10, 200), ("large", 10, 1000)];

    let mut group = c.benchmark_group("year_run");
    for (name, max_drivers, max_riders) in scenarios {
        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(max_drivers, max_riders),
            |b, &(max_drivers, max_riders)| {
                b.iter(|| {
                    let mut world = build_world(max_drivers, max_riders, 42);
                    let mut schedule = month_schedule();
                    run_year(&mut world, &mut schedule);
                    black_box(world);
                });
            },
        );
    }
    group.finish();
}

fn bench_single_month(c: &mut Criterion) {
    c.bench_function("month_step_large_market", |b| {
        b.iter_batched(
            || (build_world(10, 1000, 7), month_schedule()),
            |(mut world, mut schedule)| {
                run_month(&mut world, &mut schedule);
                black_box(world);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_year_run, bench_single_month);
criterion_main!(benches);
