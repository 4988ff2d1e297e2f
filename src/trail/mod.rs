/// Trail window computation
///
/// Which part of a flight's recent history is visible depends only on the
/// virtual time and the flight's lifetime, so every query here is a pure
/// function of its inputs.
pub mod buffer;
pub mod vertex;

pub use buffer::TrailBuffer;
pub use vertex::TrailVertex;

use glam::DVec3;

use crate::{
    config::TrailConfig,
    flight::{Flight, Lifetime},
};

/// Visibility state of a flight at a given time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrailPhase {
    /// Before takeoff, or after the trail has fully faded
    Hidden,
    /// Airborne for less than one trail duration; trail starts at takeoff
    Growing,
    /// Airborne with a trail covering the whole trail duration
    Full,
    /// Landed; marker gone, trail shrinking towards the landing point
    FadingOut,
}

impl TrailPhase {
    pub fn is_visible(self) -> bool {
        self != TrailPhase::Hidden
    }

    pub fn shows_marker(self) -> bool {
        matches!(self, TrailPhase::Growing | TrailPhase::Full)
    }
}

/// Lit section of a trajectory, in both time and curve parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailWindow {
    pub phase: TrailPhase,
    pub start_time: f64,
    pub end_time: f64,
    pub start_param: f64,
    pub end_param: f64,
}

impl TrailWindow {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    pub fn is_empty(&self) -> bool {
        self.end_time <= self.start_time
    }
}

/// One point along a sampled trail
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailSample {
    pub time: f64,
    pub position: DVec3,
    /// 0 at the oldest end of the trail, 1 at the newest
    pub age: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct TrailEngine {
    duration: f64,
    points: usize,
}

impl Default for TrailEngine {
    fn default() -> Self {
        Self::new(&TrailConfig::default())
    }
}

impl TrailEngine {
    pub fn new(config: &TrailConfig) -> Self {
        Self {
            duration: config.duration_s,
            points: config.points.max(2),
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn phase(&self, lifetime: Lifetime, time: f64) -> TrailPhase {
        if time < lifetime.start || time > lifetime.stop + self.duration {
            TrailPhase::Hidden
        } else if time > lifetime.stop {
            TrailPhase::FadingOut
        } else if time < lifetime.start + self.duration {
            TrailPhase::Growing
        } else {
            TrailPhase::Full
        }
    }

    /// Time and parameter bounds of the trail, `None` while hidden
    pub fn window(&self, flight: &Flight, time: f64) -> Option<TrailWindow> {
        let lifetime = flight.lifetime();
        let phase = self.phase(lifetime, time);
        if !phase.is_visible() {
            return None;
        }

        let start_time = lifetime.clamp(time - self.duration);
        let end_time = lifetime.clamp(time);
        let trajectory = flight.trajectory();

        Some(TrailWindow {
            phase,
            start_time,
            end_time,
            start_param: trajectory.parameter_at(start_time),
            end_param: trajectory.parameter_at(end_time),
        })
    }

    /// Sample the trail at evenly time-spaced points over the last trail duration.
    ///
    /// Each sample time is clamped into the lifetime, so samples bunch up at
    /// takeoff while growing and at the landing point while fading out.
    /// Ordered oldest first. Empty while hidden.
    pub fn sample(&self, flight: &Flight, time: f64) -> Vec<TrailSample> {
        let lifetime = flight.lifetime();
        if !self.phase(lifetime, time).is_visible() {
            return Vec::new();
        }

        let last = (self.points - 1) as f64;
        (0..self.points)
            .map(|k| {
                let age = k as f64 / last;
                let sample_time = lifetime.clamp(time - (1.0 - age) * self.duration);
                TrailSample {
                    time: sample_time,
                    position: flight.location_at(sample_time),
                    age,
                }
            })
            .collect()
    }
}
