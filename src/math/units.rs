/// Physical constants and unit conversions for flight trajectories

/// Mean Earth radius in meters, used by the spherical-earth formulas
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Meters in one international foot
pub const METERS_PER_FOOT: f64 = 0.3048;

/// Default radius of the rendered globe in scene units
pub const DEFAULT_GLOBE_RADIUS: f64 = 100.0;

/// Default altitude scale: feet of altitude per scene unit above the globe
pub const DEFAULT_FEET_PER_UNIT: f64 = 10_000.0;

/// Gaps between consecutive waypoints above this are densified (800 km)
pub const DEFAULT_GAP_THRESHOLD: f64 = 800_000.0;

/// Great-circle spacing of inserted waypoints (400 km)
pub const DEFAULT_INSERTION_STEP: f64 = 400_000.0;

/// Trail length in simulated seconds
pub const DEFAULT_TRAIL_DURATION: f64 = 1200.0;

/// Number of samples taken along a trail each tick
pub const DEFAULT_TRAIL_POINTS: usize = 20;

/// Number of segments in a pre-sampled trail vertex buffer
pub const DEFAULT_TRAIL_RESOLUTION: usize = 500;

/// Simulated seconds per animation tick
pub const DEFAULT_TICK_STEP: f64 = 15.0;

/// Conversion from feet to meters
pub fn feet_to_meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

/// Conversion from meters to feet
pub fn meters_to_feet(meters: f64) -> f64 {
    meters / METERS_PER_FOOT
}

/// Conversion from meters to kilometers
pub fn meters_to_km(meters: f64) -> f64 {
    meters / 1000.0
}

/// Conversion from kilometers to meters
pub fn km_to_meters(km: f64) -> f64 {
    km * 1000.0
}
