/// Per-flight trajectory state: validated waypoints and the artifacts derived from them
pub mod curve;
pub mod densify;
pub mod lookup;
pub mod trajectory;
pub mod waypoint;

pub use curve::CatmullRomCurve;
pub use densify::Densifier;
pub use lookup::TimeLookup;
pub use trajectory::Trajectory;
pub use waypoint::{Lifetime, Waypoint};

use glam::DVec3;

use crate::{FlightTrailsError, FlightTrailsResult, config::SimulationConfig};

/// A flight with its densified waypoints, lifetime and trajectory.
///
/// Everything is derived once in [`Flight::new`] and never mutated, so the
/// trajectory always matches the waypoint sequence.
#[derive(Debug, Clone)]
pub struct Flight {
    id: String,
    waypoints: Vec<Waypoint>,
    original_count: usize,
    lifetime: Lifetime,
    trajectory: Trajectory,
}

impl Flight {
    pub fn new(
        id: impl Into<String>,
        mut waypoints: Vec<Waypoint>,
        config: &SimulationConfig,
    ) -> FlightTrailsResult<Self> {
        let id = id.into();

        for waypoint in &waypoints {
            waypoint.validate(&id)?;
        }
        if waypoints.len() < 2 {
            return Err(FlightTrailsError::TooFewWaypoints {
                flight: id,
                count: waypoints.len(),
            });
        }

        waypoints.sort_by(|a, b| a.time.total_cmp(&b.time));
        if let Some(pair) = waypoints.windows(2).find(|pair| pair[0].time == pair[1].time) {
            return Err(FlightTrailsError::DuplicateTime {
                flight: id,
                time: pair[0].time,
            });
        }

        let original_count = waypoints.len();
        let waypoints = Densifier::new(&config.densify).densify(&waypoints);
        let trajectory = Trajectory::build(&waypoints, &config.globe)?;
        let lifetime = Lifetime::of(&waypoints).ok_or_else(|| FlightTrailsError::TooFewWaypoints {
            flight: id.clone(),
            count: 0,
        })?;

        log::debug!(
            "Flight {}: {} waypoints ({} inserted), lifetime {}..{}",
            id,
            waypoints.len(),
            waypoints.len() - original_count,
            lifetime.start,
            lifetime.stop
        );

        Ok(Self {
            id,
            waypoints,
            original_count,
            lifetime,
            trajectory,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Waypoints after densification, sorted by time
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Number of waypoints supplied before densification
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    pub fn inserted_count(&self) -> usize {
        self.waypoints.len() - self.original_count
    }

    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Scene position at `time`, clamped to the lifetime
    pub fn location_at(&self, time: f64) -> DVec3 {
        self.trajectory.location_at(time)
    }
}
