/// Spherical-earth geodesy: great-circle distance and interpolation
use super::units::EARTH_RADIUS;

/// Separations below this (radians) are treated as coincident points
const COINCIDENT_EPSILON: f64 = 1e-12;

/// Central angle between two points in radians (haversine form)
pub fn angular_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    debug_assert!(
        lat1.is_finite() && lon1.is_finite() && lat2.is_finite() && lon2.is_finite(),
        "non-finite coordinate passed to geodesy"
    );

    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);

    // Rounding can push `a` just past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance in meters between two points given in degrees
pub fn distance_between(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    EARTH_RADIUS * angular_distance(lat1, lon1, lat2, lon2)
}

/// Point at `fraction` of the great-circle distance from the first point to the second.
///
/// Returns `(latitude, longitude)` in degrees. Coincident endpoints return the
/// first point, since the slerp weights are undefined when the separation is zero.
pub fn intermediate_point(lat1: f64, lon1: f64, lat2: f64, lon2: f64, fraction: f64) -> (f64, f64) {
    let delta = angular_distance(lat1, lon1, lat2, lon2);
    if delta < COINCIDENT_EPSILON {
        return (lat1, lon1);
    }

    let phi1 = lat1.to_radians();
    let lambda1 = lon1.to_radians();
    let phi2 = lat2.to_radians();
    let lambda2 = lon2.to_radians();

    let sin_delta = delta.sin();
    let a = ((1.0 - fraction) * delta).sin() / sin_delta;
    let b = (fraction * delta).sin() / sin_delta;

    let x = a * phi1.cos() * lambda1.cos() + b * phi2.cos() * lambda2.cos();
    let y = a * phi1.cos() * lambda1.sin() + b * phi2.cos() * lambda2.sin();
    let z = a * phi1.sin() + b * phi2.sin();

    let phi3 = z.atan2((x * x + y * y).sqrt());
    let lambda3 = y.atan2(x);

    (phi3.to_degrees(), lambda3.to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: (f64, f64) = (51.4700, -0.4543);
    const NEW_YORK: (f64, f64) = (40.6413, -73.7781);

    #[test]
    fn test_distance_to_self_is_zero() {
        for &(lat, lon) in &[LONDON, NEW_YORK, (0.0, 0.0), (-33.9, 151.2), (89.9, 179.9)] {
            assert_eq!(distance_between(lat, lon, lat, lon), 0.0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let ab = distance_between(LONDON.0, LONDON.1, NEW_YORK.0, NEW_YORK.1);
        let ba = distance_between(NEW_YORK.0, NEW_YORK.1, LONDON.0, LONDON.1);
        assert!((ab - ba).abs() < 1e-6);

        // Heathrow to JFK is roughly 5540 km on a 6371 km sphere
        assert!((ab / 1000.0 - 5540.0).abs() < 20.0);
    }

    #[test]
    fn test_quarter_meridian_distance() {
        let d = distance_between(0.0, 0.0, 90.0, 0.0);
        let expected = EARTH_RADIUS * std::f64::consts::FRAC_PI_2;
        assert!((d - expected).abs() < 1e-6);
    }

    #[test]
    fn test_intermediate_point_endpoints() {
        let (lat, lon) = intermediate_point(LONDON.0, LONDON.1, NEW_YORK.0, NEW_YORK.1, 0.0);
        assert!((lat - LONDON.0).abs() < 1e-9);
        assert!((lon - LONDON.1).abs() < 1e-9);

        let (lat, lon) = intermediate_point(LONDON.0, LONDON.1, NEW_YORK.0, NEW_YORK.1, 1.0);
        assert!((lat - NEW_YORK.0).abs() < 1e-9);
        assert!((lon - NEW_YORK.1).abs() < 1e-9);
    }

    #[test]
    fn test_intermediate_point_splits_distance() {
        let total = distance_between(LONDON.0, LONDON.1, NEW_YORK.0, NEW_YORK.1);
        let (lat, lon) = intermediate_point(LONDON.0, LONDON.1, NEW_YORK.0, NEW_YORK.1, 0.25);

        let first = distance_between(LONDON.0, LONDON.1, lat, lon);
        let rest = distance_between(lat, lon, NEW_YORK.0, NEW_YORK.1);
        assert!((first - 0.25 * total).abs() < 1e-3);
        assert!((first + rest - total).abs() < 1e-3);
    }

    #[test]
    fn test_intermediate_point_along_equator() {
        let (lat, lon) = intermediate_point(0.0, 0.0, 0.0, 90.0, 0.5);
        assert!(lat.abs() < 1e-9);
        assert!((lon - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_intermediate_point_coincident() {
        let (lat, lon) = intermediate_point(10.0, 20.0, 10.0, 20.0, 0.5);
        assert_eq!((lat, lon), (10.0, 20.0));
    }
}
