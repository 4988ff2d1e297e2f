/// Geodetic <-> Cartesian conversion on a globe of configurable radius
///
/// Latitude +90° maps to the +Y axis and the reference meridian (longitude 0°)
/// lies in the +X half of the XY plane, with longitude increasing towards -Z.
use glam::DVec3;

use crate::config::GlobeConfig;

/// Convert latitude/longitude in degrees and a radius into a Cartesian point
pub fn polar_to_cartesian(lat: f64, lon: f64, radius: f64) -> DVec3 {
    let phi = (90.0 - lat).to_radians();
    let theta = (lon + 180.0).to_radians();

    DVec3::new(
        -radius * phi.sin() * theta.cos(),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Recover `(latitude, longitude)` in degrees from a Cartesian point.
///
/// Diagnostic only. Longitude is undefined on the polar axis and comes back as
/// whatever `atan2(0, 0)` yields there.
pub fn cartesian_to_polar(point: DVec3) -> (f64, f64) {
    let lon = (-point.z).atan2(point.x).to_degrees();
    let horizontal = (point.x * point.x + point.z * point.z).sqrt();
    let lat = point.y.atan2(horizontal).to_degrees();
    (lat, lon)
}

/// Distance of a point from the globe centre
pub fn cartesian_radius(point: DVec3) -> f64 {
    point.length()
}

/// Map an altitude in feet to a radius above the base globe
pub fn altitude_to_radius(altitude_feet: f64, globe: &GlobeConfig) -> f64 {
    altitude_feet / globe.feet_per_unit + globe.radius
}

/// Inverse of [`altitude_to_radius`]
pub fn altitude_from_radius(radius: f64, globe: &GlobeConfig) -> f64 {
    (radius - globe.radius) * globe.feet_per_unit
}

/// Project a geodetic sample straight into scene space
pub fn geodetic_to_scene(lat: f64, lon: f64, altitude_feet: f64, globe: &GlobeConfig) -> DVec3 {
    polar_to_cartesian(lat, lon, altitude_to_radius(altitude_feet, globe))
}
