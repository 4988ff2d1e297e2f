use serde::{Deserialize, Serialize};

use crate::{FlightTrailsError, FlightTrailsResult};

/// A single timestamped geodetic sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Seconds since the Unix epoch. Fractional only for densified waypoints.
    pub time: f64,

    /// Degrees, [-90, 90]
    pub latitude: f64,

    /// Degrees, [-180, 180]
    pub longitude: f64,

    /// Feet above the surface
    pub altitude: f64,
}

impl Waypoint {
    pub fn new(time: f64, latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            time,
            latitude,
            longitude,
            altitude,
        }
    }

    /// Check the coordinate contract for a waypoint belonging to `flight`
    pub fn validate(&self, flight: &str) -> FlightTrailsResult<()> {
        let invalid = |reason: String| FlightTrailsError::InvalidWaypoint {
            flight: flight.to_string(),
            reason,
        };

        if !self.time.is_finite() {
            return Err(invalid(format!("non-finite time {}", self.time)));
        }
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(invalid(format!(
                "latitude {} out of range at time {}",
                self.latitude, self.time
            )));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(invalid(format!(
                "longitude {} out of range at time {}",
                self.longitude, self.time
            )));
        }
        if !self.altitude.is_finite() || self.altitude < 0.0 {
            return Err(invalid(format!(
                "altitude {} is negative or non-finite at time {}",
                self.altitude, self.time
            )));
        }
        Ok(())
    }
}

/// Interval during which a flight has a defined position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lifetime {
    pub start: f64,
    pub stop: f64,
}

impl Lifetime {
    pub fn new(start: f64, stop: f64) -> Self {
        debug_assert!(start <= stop, "lifetime start {start} after stop {stop}");
        Self { start, stop }
    }

    /// Lifetime spanned by a time-sorted waypoint sequence
    pub fn of(waypoints: &[Waypoint]) -> Option<Self> {
        let first = waypoints.first()?;
        let last = waypoints.last()?;
        Some(Self::new(first.time, last.time))
    }

    pub fn contains(&self, time: f64) -> bool {
        time >= self.start && time <= self.stop
    }

    pub fn clamp(&self, time: f64) -> f64 {
        time.clamp(self.start, self.stop)
    }

    pub fn duration(&self) -> f64 {
        self.stop - self.start
    }
}
