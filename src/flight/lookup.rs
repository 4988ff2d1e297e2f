/// Piecewise-linear mapping between waypoint time and curve parameter
///
/// Parameters are spaced evenly by waypoint count, not by elapsed time or arc
/// length, so flights move with uneven apparent speed when their samples are
/// unevenly spaced. Queries outside the table clamp to the nearest end.
use crate::math::lerp;

#[derive(Debug, Clone)]
pub struct TimeLookup {
    times: Vec<f64>,
    params: Vec<f64>,
}

impl TimeLookup {
    /// Build from strictly increasing waypoint times. Returns `None` for fewer than two.
    pub fn from_times(times: Vec<f64>) -> Option<Self> {
        if times.len() < 2 {
            return None;
        }
        debug_assert!(
            times.windows(2).all(|pair| pair[0] < pair[1]),
            "lookup times must be strictly increasing"
        );

        let last = (times.len() - 1) as f64;
        let params = (0..times.len()).map(|i| i as f64 / last).collect();
        Some(Self { times, params })
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn params(&self) -> &[f64] {
        &self.params
    }

    /// Curve parameter for `time`
    pub fn parameter_at(&self, time: f64) -> f64 {
        Self::interpolate(&self.times, &self.params, time)
    }

    /// Time at which the curve parameter `u` is reached
    pub fn time_at(&self, u: f64) -> f64 {
        Self::interpolate(&self.params, &self.times, u)
    }

    fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> f64 {
        let last = xs.len() - 1;
        if x.is_nan() || x <= xs[0] {
            return ys[0];
        }
        if x >= xs[last] {
            return ys[last];
        }

        // First index with xs[i] > x; always within 1..=last here
        let upper = xs.partition_point(|&v| v <= x);
        let lower = upper - 1;
        let fraction = (x - xs[lower]) / (xs[upper] - xs[lower]);
        lerp(ys[lower], ys[upper], fraction)
    }
}
