/// Great-circle densification of sparse waypoint sequences
///
/// A cubic through widely spaced points on a sphere cuts below the surface, so
/// long gaps are filled with synthetic waypoints on the great circle joining
/// their endpoints before any curve is fitted.
use super::Waypoint;
use crate::{
    config::DensifyConfig,
    math::{distance_between, intermediate_point, lerp},
};

#[derive(Debug, Clone, Copy)]
pub struct Densifier {
    gap_threshold: f64,
    insertion_step: f64,
}

impl Default for Densifier {
    fn default() -> Self {
        Self::new(&DensifyConfig::default())
    }
}

impl Densifier {
    pub fn new(config: &DensifyConfig) -> Self {
        debug_assert!(config.insertion_step_m < config.gap_threshold_m);
        Self {
            gap_threshold: config.gap_threshold_m,
            insertion_step: config.insertion_step_m,
        }
    }

    /// Return a copy of `waypoints` with interpolated points inserted so that no
    /// consecutive pair is farther apart than the gap threshold.
    ///
    /// Input must be sorted by time. Original waypoints are kept unchanged.
    pub fn densify(&self, waypoints: &[Waypoint]) -> Vec<Waypoint> {
        let mut result = Vec::with_capacity(waypoints.len());

        for pair in waypoints.windows(2) {
            let next = pair[1];
            let mut current = pair[0];
            result.push(current);

            let mut distance = Self::gap(&current, &next);
            while distance > self.gap_threshold {
                let fraction = self.insertion_step / distance;
                let inserted = Self::interpolate(&current, &next, fraction);
                let remaining = Self::gap(&inserted, &next);

                debug_assert!(
                    remaining < distance,
                    "densifier stalled: {remaining} m remaining after {distance} m"
                );
                if remaining >= distance {
                    log::error!(
                        "Densifier stalled at t={} ({:.0} m to next waypoint), leaving gap",
                        current.time,
                        distance
                    );
                    break;
                }

                log::trace!(
                    "Inserted waypoint at t={:.1} ({:.5}, {:.5}), {:.0} m remaining",
                    inserted.time,
                    inserted.latitude,
                    inserted.longitude,
                    remaining
                );
                result.push(inserted);
                current = inserted;
                distance = remaining;
            }
        }

        if let Some(last) = waypoints.last() {
            result.push(*last);
        }

        result
    }

    /// Great-circle distance between two waypoints, meters
    pub fn gap(a: &Waypoint, b: &Waypoint) -> f64 {
        distance_between(a.latitude, a.longitude, b.latitude, b.longitude)
    }

    /// Largest great-circle gap between consecutive waypoints
    pub fn max_gap(waypoints: &[Waypoint]) -> f64 {
        waypoints
            .windows(2)
            .map(|pair| Self::gap(&pair[0], &pair[1]))
            .fold(0.0, f64::max)
    }

    fn interpolate(from: &Waypoint, to: &Waypoint, fraction: f64) -> Waypoint {
        let (latitude, longitude) =
            intermediate_point(from.latitude, from.longitude, to.latitude, to.longitude, fraction);

        Waypoint {
            time: lerp(from.time, to.time, fraction),
            latitude,
            longitude,
            altitude: lerp(from.altitude, to.altitude, fraction),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transatlantic() -> Vec<Waypoint> {
        vec![
            Waypoint::new(0.0, 51.47, -0.45, 0.0),
            Waypoint::new(1_800.0, 52.0, -10.0, 35_000.0),
            Waypoint::new(21_600.0, 40.64, -73.78, 0.0),
        ]
    }

    #[test]
    fn test_short_gaps_untouched() {
        let waypoints = vec![
            Waypoint::new(0.0, 0.0, 0.0, 0.0),
            Waypoint::new(60.0, 0.0, 1.0, 10_000.0),
            Waypoint::new(120.0, 0.0, 2.0, 20_000.0),
        ];
        let densified = Densifier::default().densify(&waypoints);
        assert_eq!(densified, waypoints);
    }

    #[test]
    fn test_thousand_km_gap_gets_midpoint() {
        // ~1000 km along the equator
        let degrees = 1_000_000.0 / crate::math::EARTH_RADIUS * 180.0 / std::f64::consts::PI;
        let waypoints = vec![
            Waypoint::new(0.0, 0.0, 0.0, 0.0),
            Waypoint::new(1_000.0, 0.0, degrees, 30_000.0),
        ];
        assert!((Densifier::max_gap(&waypoints) - 1_000_000.0).abs() < 1.0);

        let densified = Densifier::default().densify(&waypoints);
        assert_eq!(densified.len(), 3);
        assert!(Densifier::max_gap(&densified) <= 800_000.0);

        let inserted = densified[1];
        assert!((inserted.time - 400.0).abs() < 1e-6);
        assert!((inserted.altitude - 12_000.0).abs() < 1e-6);
        assert!(inserted.latitude.abs() < 1e-9);
    }

    #[test]
    fn test_postcondition_and_order() {
        let waypoints = transatlantic();
        let densified = Densifier::default().densify(&waypoints);

        assert!(densified.len() > waypoints.len());
        assert!(Densifier::max_gap(&densified) <= 800_000.0);
        for pair in densified.windows(2) {
            assert!(pair[0].time < pair[1].time);
        }

        // Originals survive untouched and in order
        let mut originals = densified.iter().filter(|w| waypoints.contains(w));
        for original in &waypoints {
            assert_eq!(originals.next(), Some(original));
        }
    }

    #[test]
    fn test_idempotent() {
        let densifier = Densifier::default();
        let once = densifier.densify(&transatlantic());
        let twice = densifier.densify(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_threshold() {
        let densifier = Densifier::new(&DensifyConfig {
            gap_threshold_m: 200_000.0,
            insertion_step_m: 100_000.0,
        });
        let densified = densifier.densify(&transatlantic());
        assert!(Densifier::max_gap(&densified) <= 200_000.0);
    }

    #[test]
    fn test_degenerate_inputs() {
        let densifier = Densifier::default();
        assert!(densifier.densify(&[]).is_empty());

        let single = [Waypoint::new(5.0, 10.0, 10.0, 0.0)];
        assert_eq!(densifier.densify(&single), single.to_vec());
    }
}
