pub mod densify;
pub mod simulation;

use flight_trails::Waypoint;

/// Roughly London to Singapore over 13 hours, with `reports` evenly spaced position reports
pub fn long_haul(offset: f64, reports: usize) -> Vec<Waypoint> {
    let (lat0, lon0) = (51.47, -0.45);
    let (lat1, lon1) = (1.36, 103.99);
    let last = (reports - 1) as f64;
    (0..reports)
        .map(|i| {
            let f = i as f64 / last;
            let altitude = if i == 0 || i == reports - 1 { 0.0 } else { 36_000.0 };
            Waypoint::new(
                offset + f * 46_800.0,
                lat0 + (lat1 - lat0) * f,
                lon0 + (lon1 - lon0) * f,
                altitude,
            )
        })
        .collect()
}
