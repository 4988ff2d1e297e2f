/// Virtual simulation clock, decoupled from wall-clock time
use crate::flight::Lifetime;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clock {
    start: f64,
    end: f64,
    current: f64,
    step: f64,
}

impl Clock {
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        debug_assert!(start <= end, "clock start {start} after end {end}");
        debug_assert!(step > 0.0, "clock step must be positive");
        Self {
            start,
            end,
            current: start,
            step,
        }
    }

    /// Clock running from the earliest takeoff to the latest landing.
    /// `None` when there are no lifetimes.
    pub fn spanning(lifetimes: impl IntoIterator<Item = Lifetime>, step: f64) -> Option<Self> {
        let (start, end) = lifetimes
            .into_iter()
            .fold(None, |span: Option<(f64, f64)>, lifetime| match span {
                None => Some((lifetime.start, lifetime.stop)),
                Some((start, end)) => Some((start.min(lifetime.start), end.max(lifetime.stop))),
            })?;
        Some(Self::new(start, end, step))
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Move forward one step and return the new time
    pub fn advance(&mut self) -> f64 {
        self.current += self.step;
        self.current
    }

    /// True once the clock has moved past `end + margin`
    pub fn is_past(&self, margin: f64) -> bool {
        self.current > self.end + margin
    }

    /// Fraction of [start, end] elapsed, clamped to [0, 1]
    pub fn progress(&self) -> f64 {
        let span = self.end - self.start;
        if span <= 0.0 {
            return 1.0;
        }
        ((self.current - self.start) / span).clamp(0.0, 1.0)
    }

    pub fn reset(&mut self) {
        self.current = self.start;
    }
}
