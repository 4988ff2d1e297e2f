use glam::DVec3;

use super::{CatmullRomCurve, TimeLookup, Waypoint};
use crate::{FlightTrailsError, FlightTrailsResult, config::GlobeConfig, math::geodetic_to_scene};

/// Continuous scene-space path of one flight plus its time-to-parameter mapping
#[derive(Debug, Clone)]
pub struct Trajectory {
    curve: CatmullRomCurve,
    lookup: TimeLookup,
}

impl Trajectory {
    /// Fit a curve through the projected waypoints.
    ///
    /// Waypoints must already be sorted by strictly increasing time and
    /// densified; callers filter out flights with fewer than two.
    pub fn build(waypoints: &[Waypoint], globe: &GlobeConfig) -> FlightTrailsResult<Self> {
        let too_few = || FlightTrailsError::TooFewWaypoints {
            flight: String::from("<trajectory>"),
            count: waypoints.len(),
        };

        let points = waypoints
            .iter()
            .map(|w| geodetic_to_scene(w.latitude, w.longitude, w.altitude, globe))
            .collect();
        let curve = CatmullRomCurve::new(points).ok_or_else(too_few)?;

        let times = waypoints.iter().map(|w| w.time).collect();
        let lookup = TimeLookup::from_times(times).ok_or_else(too_few)?;

        Ok(Self { curve, lookup })
    }

    /// Scene position at `time`, clamped to the first/last waypoint outside the lifetime
    pub fn location_at(&self, time: f64) -> DVec3 {
        self.curve.point_at(self.parameter_at(time))
    }

    /// Normalized curve parameter at `time`
    pub fn parameter_at(&self, time: f64) -> f64 {
        self.lookup.parameter_at(time)
    }

    /// Time at which the flight passes curve parameter `u`
    pub fn time_at(&self, u: f64) -> f64 {
        self.lookup.time_at(u)
    }

    /// Position at curve parameter `u`
    pub fn point_at(&self, u: f64) -> DVec3 {
        self.curve.point_at(u)
    }

    pub fn sample_points(&self, divisions: usize) -> Vec<DVec3> {
        self.curve.sample_points(divisions)
    }

    pub fn control_points(&self) -> &[DVec3] {
        self.curve.control_points()
    }

    pub fn lookup(&self) -> &TimeLookup {
        &self.lookup
    }
}
