use criterion::{black_box, criterion_group, Criterion};
use flight_trails::dataset::FlightRecord;
use flight_trails::{Dataset, Simulation, SimulationConfig};

use super::long_haul;

/// 200 flights departing ten minutes apart
fn get_simulation() -> Simulation {
    let records = (0..200)
        .map(|i| FlightRecord {
            id: format!("BENCH{i}"),
            waypoints: long_haul(i as f64 * 600.0, 12),
        })
        .collect();
    Simulation::new(Dataset::from_records(records), SimulationConfig::default())
        .expect("benchmark dataset is valid")
}

fn bench_frame_at(c: &mut Criterion) {
    let simulation = get_simulation();
    let midpoint = (simulation.clock().start() + simulation.clock().end()) / 2.0;

    c.bench_function("frame_at_busy_sky", |b| {
        b.iter(|| simulation.frame_at(black_box(midpoint)))
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut simulation = get_simulation();

    c.bench_function("tick", |b| {
        b.iter(|| {
            if simulation.is_finished() {
                simulation.reset();
            }
            let _ = simulation.tick();
        })
    });
}

criterion_group!(benches, bench_frame_at, bench_tick);
