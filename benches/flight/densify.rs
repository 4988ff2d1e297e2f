use criterion::{black_box, criterion_group, Criterion};
use flight_trails::flight::{Densifier, Trajectory};
use flight_trails::SimulationConfig;

use super::long_haul;

fn bench_densify(c: &mut Criterion) {
    let waypoints = long_haul(0.0, 4);
    let densifier = Densifier::default();

    c.bench_function("densify_long_haul", |b| {
        b.iter(|| densifier.densify(black_box(&waypoints)))
    });
}

fn bench_trajectory_build(c: &mut Criterion) {
    let config = SimulationConfig::default();
    let waypoints = Densifier::new(&config.densify).densify(&long_haul(0.0, 4));

    c.bench_function("trajectory_build", |b| {
        b.iter(|| Trajectory::build(black_box(&waypoints), &config.globe))
    });
}

criterion_group!(benches, bench_densify, bench_trajectory_build);
