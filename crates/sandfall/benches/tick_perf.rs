//! Benchmark: measure tick() cost under various grid conditions.
//!
//! All runs use the full 600×480 grid at a 144 Hz frame time, so a tick
//! has to finish well inside 6.9 ms to leave room for presentation.
//!
//! Each active benchmark uses `iter_batched` to re-seed the grid before every
//! iteration so we measure *active* simulation, not a settled grid.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use sandfall::cell::{Cell, Species};
use sandfall::config::SimConfig;
use sandfall::spawn::PointerInput;
use sandfall::{Simulation, Universe};

const DT: f32 = 1.0 / 144.0;

fn new_sim() -> Simulation {
    Simulation::new(SimConfig::default()).expect("default config is valid")
}

/// Empty grid: baseline cost of scanning 288K cells with nothing to do.
fn bench_tick_empty(c: &mut Criterion) {
    c.bench_function("tick_empty_600x480", |b| {
        let mut sim = new_sim();
        b.iter(|| {
            sim.tick(DT);
            black_box(&sim);
        });
    });
}

/// Sand falling: top 20% filled, all of it moving.
fn bench_tick_sand_falling(c: &mut Criterion) {
    c.bench_function("tick_sand_falling_600x480", |b| {
        b.iter_batched(
            || {
                let mut sim = new_sim();
                for y in 0..96 {
                    for x in 0..600 {
                        sim.set(x, y, Cell::particle(Species::Sand));
                    }
                }
                sim
            },
            |mut sim| {
                sim.tick(DT);
                black_box(&sim);
            },
            BatchSize::LargeInput,
        );
    });
}

/// Water body: bottom half full, every surface cell tries all four candidates.
fn bench_tick_water_body(c: &mut Criterion) {
    c.bench_function("tick_water_body_600x480", |b| {
        b.iter_batched(
            || {
                let mut sim = new_sim();
                for y in 240..480 {
                    for x in 0..600 {
                        sim.set(x, y, Cell::particle(Species::Water));
                    }
                }
                sim
            },
            |mut sim| {
                sim.tick(DT);
                black_box(&sim);
            },
            BatchSize::LargeInput,
        );
    });
}

/// Held pointer buttons: spawn both species every frame, then tick.
fn bench_frame_spawning(c: &mut Criterion) {
    c.bench_function("frame_spawn_both_600x480", |b| {
        let mut sim = new_sim();
        let input = PointerInput {
            x: 300,
            y: 100,
            primary: true,
            secondary: true,
        };
        b.iter(|| {
            sim.frame(black_box(&input), DT);
            black_box(&sim);
        });
    });
}

/// Full Universe step + render: what the browser actually calls.
fn bench_universe_step(c: &mut Criterion) {
    c.bench_function("universe_step_render_600x480", |b| {
        b.iter_batched(
            || {
                let mut universe = Universe::new(600, 480).expect("valid size");
                for y in 0..480 {
                    for x in 0..600 {
                        let species = match (x * 7 + y * 13) % 4 {
                            0 => 1, // Sand
                            1 => 2, // Water
                            _ => 0, // Empty
                        };
                        universe.set_cell(x, y, species);
                    }
                }
                universe
            },
            |mut universe| {
                universe.step(300, 240, true, false, DT);
                universe.render();
                black_box(&universe);
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(
    benches,
    bench_tick_empty,
    bench_tick_sand_falling,
    bench_tick_water_body,
    bench_frame_spawning,
    bench_universe_step,
);
criterion_main!(benches);
