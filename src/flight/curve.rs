/// Centripetal Catmull-Rom spline through an ordered set of 3D points
///
/// The global parameter `u` in [0, 1] is split evenly across segments, so
/// `point_at(i / (n - 1))` is exactly control point `i`. Missing neighbours at
/// the open ends are reflected through the end point.
use glam::DVec3;

/// Knot spacings below this are replaced to avoid dividing by zero on repeated points
const MIN_KNOT_SPACING: f64 = 1e-4;

#[derive(Debug, Clone)]
pub struct CatmullRomCurve {
    points: Vec<DVec3>,
}

/// Cubic `c0 + c1 t + c2 t² + c3 t³` for one segment
#[derive(Debug, Clone, Copy)]
struct CubicPoly {
    c0: DVec3,
    c1: DVec3,
    c2: DVec3,
    c3: DVec3,
}

impl CubicPoly {
    /// Hermite form from end points and end tangents
    fn hermite(x0: DVec3, x1: DVec3, t0: DVec3, t1: DVec3) -> Self {
        Self {
            c0: x0,
            c1: t0,
            c2: -3.0 * x0 + 3.0 * x1 - 2.0 * t0 - t1,
            c3: 2.0 * x0 - 2.0 * x1 + t0 + t1,
        }
    }

    /// Catmull-Rom segment between `x1` and `x2` with non-uniform knot spacing
    fn nonuniform(
        x0: DVec3,
        x1: DVec3,
        x2: DVec3,
        x3: DVec3,
        dt0: f64,
        dt1: f64,
        dt2: f64,
    ) -> Self {
        let t1 = (x1 - x0) / dt0 - (x2 - x0) / (dt0 + dt1) + (x2 - x1) / dt1;
        let t2 = (x2 - x1) / dt1 - (x3 - x1) / (dt1 + dt2) + (x3 - x2) / dt2;
        Self::hermite(x1, x2, t1 * dt1, t2 * dt1)
    }

    fn eval(&self, t: f64) -> DVec3 {
        self.c0 + t * (self.c1 + t * (self.c2 + t * self.c3))
    }
}

impl CatmullRomCurve {
    /// Returns `None` when fewer than two points are supplied
    pub fn new(points: Vec<DVec3>) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }
        Some(Self { points })
    }

    pub fn control_points(&self) -> &[DVec3] {
        &self.points
    }

    pub fn segment_count(&self) -> usize {
        self.points.len() - 1
    }

    /// Evaluate the curve at global parameter `u`, clamped to [0, 1]
    pub fn point_at(&self, u: f64) -> DVec3 {
        let u = if u.is_nan() { 0.0 } else { u.clamp(0.0, 1.0) };
        let last = self.points.len() - 1;

        let scaled = u * last as f64;
        let mut segment = scaled.floor() as usize;
        let mut weight = scaled - segment as f64;

        if segment >= last {
            segment = last - 1;
            weight = 1.0;
        }

        let p1 = self.points[segment];
        let p2 = self.points[segment + 1];
        let p0 = if segment > 0 {
            self.points[segment - 1]
        } else {
            2.0 * p1 - p2
        };
        let p3 = if segment + 2 <= last {
            self.points[segment + 2]
        } else {
            2.0 * p2 - p1
        };

        // Centripetal parameterization: knot spacing is the square root of chord length
        let mut dt0 = p0.distance_squared(p1).powf(0.25);
        let mut dt1 = p1.distance_squared(p2).powf(0.25);
        let mut dt2 = p2.distance_squared(p3).powf(0.25);

        if dt1 < MIN_KNOT_SPACING {
            dt1 = 1.0;
        }
        if dt0 < MIN_KNOT_SPACING {
            dt0 = dt1;
        }
        if dt2 < MIN_KNOT_SPACING {
            dt2 = dt1;
        }

        CubicPoly::nonuniform(p0, p1, p2, p3, dt0, dt1, dt2).eval(weight)
    }

    /// `divisions + 1` points at evenly spaced parameters, both ends included
    pub fn sample_points(&self, divisions: usize) -> Vec<DVec3> {
        let divisions = divisions.max(1);
        (0..=divisions)
            .map(|i| self.point_at(i as f64 / divisions as f64))
            .collect()
    }
}
