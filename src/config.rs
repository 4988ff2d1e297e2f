/// Tunable parameters for trajectory construction and the tick loop
///
/// Loaded from a RON file; every field has a default so a partial file such as
/// `(trail: (duration_s: 600.0))` is valid.
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    FlightTrailsError, FlightTrailsResult,
    math::{
        DEFAULT_FEET_PER_UNIT, DEFAULT_GAP_THRESHOLD, DEFAULT_GLOBE_RADIUS,
        DEFAULT_INSERTION_STEP, DEFAULT_TICK_STEP, DEFAULT_TRAIL_DURATION, DEFAULT_TRAIL_POINTS,
        DEFAULT_TRAIL_RESOLUTION,
    },
};

/// Size of the rendered globe and how altitude is exaggerated above it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    /// Radius of the globe surface in scene units
    pub radius: f64,
    /// Feet of altitude represented by one scene unit
    pub feet_per_unit: f64,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_GLOBE_RADIUS,
            feet_per_unit: DEFAULT_FEET_PER_UNIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DensifyConfig {
    /// Maximum allowed great-circle gap between consecutive waypoints, meters
    pub gap_threshold_m: f64,
    /// Spacing of inserted waypoints, meters
    pub insertion_step_m: f64,
}

impl Default for DensifyConfig {
    fn default() -> Self {
        Self {
            gap_threshold_m: DEFAULT_GAP_THRESHOLD,
            insertion_step_m: DEFAULT_INSERTION_STEP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Simulated seconds of history shown behind each flight
    pub duration_s: f64,
    /// Samples taken along the trail each tick
    pub points: usize,
    /// Segments in the pre-sampled trail vertex buffer
    pub resolution: usize,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            duration_s: DEFAULT_TRAIL_DURATION,
            points: DEFAULT_TRAIL_POINTS,
            resolution: DEFAULT_TRAIL_RESOLUTION,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub globe: GlobeConfig,
    pub densify: DensifyConfig,
    pub trail: TrailConfig,
    /// Simulated seconds added to the clock each tick
    pub tick_step_s: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            globe: GlobeConfig::default(),
            densify: DensifyConfig::default(),
            trail: TrailConfig::default(),
            tick_step_s: DEFAULT_TICK_STEP,
        }
    }
}

impl SimulationConfig {
    pub fn from_ron_str(content: &str) -> FlightTrailsResult<Self> {
        let config: Self = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> FlightTrailsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_ron_str(&content)?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Reject parameter combinations the densifier or trail engine cannot honour
    pub fn validate(&self) -> FlightTrailsResult<()> {
        fn positive(value: f64, name: &str) -> FlightTrailsResult<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(FlightTrailsError::Config(format!(
                    "{name} must be positive and finite, got {value}"
                )))
            }
        }

        positive(self.globe.radius, "globe.radius")?;
        positive(self.globe.feet_per_unit, "globe.feet_per_unit")?;
        positive(self.densify.gap_threshold_m, "densify.gap_threshold_m")?;
        positive(self.densify.insertion_step_m, "densify.insertion_step_m")?;
        positive(self.trail.duration_s, "trail.duration_s")?;
        positive(self.tick_step_s, "tick_step_s")?;

        // A step at least as long as the threshold would never shrink the gap
        if self.densify.insertion_step_m >= self.densify.gap_threshold_m {
            return Err(FlightTrailsError::Config(format!(
                "densify.insertion_step_m ({}) must be smaller than densify.gap_threshold_m ({})",
                self.densify.insertion_step_m, self.densify.gap_threshold_m
            )));
        }
        if self.trail.points < 2 {
            return Err(FlightTrailsError::Config(format!(
                "trail.points must be at least 2, got {}",
                self.trail.points
            )));
        }
        if self.trail.resolution < 1 {
            return Err(FlightTrailsError::Config(
                "trail.resolution must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
