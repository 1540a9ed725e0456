//! Time-parameterized tween between two values

use std::time::{Duration, Instant};

use super::curve::Curve;

/// `{ from, to, start, duration, curve }` sampled against the frame clock
///
/// Restarting is just building a new tween; nothing from the previous one
/// carries over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    curve: Curve,
}

impl Tween {
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration, curve: Curve) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            curve,
        }
    }

    /// A tween that has already finished at `value`
    pub fn settled(value: f32, now: Instant) -> Self {
        Self::new(value, value, now, Duration::ZERO, Curve::Linear)
    }

    /// Linear progress in [0, 1]
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    /// Eased value at `now`, exactly `to` once finished
    pub fn sample(&self, now: Instant) -> f32 {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.to;
        }
        let eased = self.curve.transform(progress);
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn start(&self) -> Instant {
        self.start
    }
}
