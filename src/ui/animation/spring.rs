//! Spring physics for the elastic scale effect
//!
//! Uses time-based analytical solutions rather than frame-by-frame
//! integration, so a spring can be sampled at any instant after it starts.
//!
//! ### Overdamped formula
//! ```text
//! angular_frequency = -sqrt(stiffness / mass)
//! leftover = -angular_frequency * delta
//! position(t) = to - (delta + t * leftover) * e^(t * angular_frequency)
//! ```
//!
//! ### Underdamped formula
//! ```text
//! damping_frequency = sqrt(4 * mass * stiffness - damping^2)
//! leftover = damping * delta / damping_frequency
//! dfm = 0.5 * damping_frequency / mass
//! dm = -0.5 * damping / mass
//! position(t) = to - (cos(t * dfm) * delta + sin(t * dfm) * leftover) * e^(t * dm)
//! ```

use std::time::Duration;

pub type Num = f64;

/// Numerical derivative step size
const H: Num = 0.001;

/// Step used when searching for the settle time
const SETTLE_STEP: Num = 0.001;

/// Springs that have not settled after this long are cut off
const MAX_SETTLE_SECS: Num = 10.0;

/// Position/velocity distance from rest at which a spring counts as settled
pub const VISIBILITY_THRESHOLD: Num = 0.01;

/// Spring parameters for physics simulation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    pub mass: Num,
    pub damping: Num,
    pub stiffness: Num,
}

impl SpringParams {
    /// Very bouncy, very soft spring: damping ratio 0.2, stiffness 50
    pub const HIGH_BOUNCY: Self = Self {
        mass: 1.0,
        // 2 * 0.2 * sqrt(50 * 1)
        damping: 2.828_427_124_746_190_3,
        stiffness: 50.0,
    };

    /// Check if overdamped: 1.0 <= damping / (2.0 * sqrt(stiffness * mass))
    pub fn is_overdamped(&self) -> bool {
        1.0 <= self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// A single spring motion from `from` to `to`, starting at rest
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringMotion {
    from: Num,
    to: Num,
    params: SpringParams,
}

impl SpringMotion {
    pub fn new(from: Num, to: Num, params: SpringParams) -> Self {
        Self {
            from,
            to,
            params,
        }
    }

    /// Position `t` seconds after the motion started
    pub fn position(&self, t: Num) -> Num {
        if t <= 0.0 {
            return self.from;
        }

        let SpringParams {
            mass,
            damping,
            stiffness,
        } = self.params;
        let delta = self.to - self.from;

        if self.params.is_overdamped() {
            let angular_frequency = -(stiffness / mass).sqrt();
            let leftover = -angular_frequency * delta;
            self.to - (delta + t * leftover) * (t * angular_frequency).exp()
        } else {
            let damping_frequency = (4.0 * mass * stiffness - damping.powi(2)).sqrt();
            let leftover = damping * delta / damping_frequency;
            let dfm = 0.5 * damping_frequency / mass;
            let dm = -0.5 * damping / mass;
            self.to - ((t * dfm).cos() * delta + (t * dfm).sin() * leftover) * (t * dm).exp()
        }
    }

    /// Velocity at `t` (numerical derivative)
    pub fn velocity(&self, t: Num) -> Num {
        (self.position(t + H) - self.position(t - H)) / (2.0 * H)
    }

    /// Whether the spring is at rest within `threshold` at time `t`
    pub fn arrived(&self, t: Num, threshold: Num) -> bool {
        (self.to - self.position(t)).abs() < threshold && self.velocity(t).abs() < threshold
    }

    /// Time until the motion stays within the visibility threshold of its target
    ///
    /// Underdamped springs use the decay envelope, so passing through the
    /// target mid-bounce does not count as settling.
    pub fn settle_time(&self) -> Duration {
        let SpringParams {
            mass,
            damping,
            stiffness,
        } = self.params;
        let delta = self.to - self.from;

        if !self.params.is_overdamped() {
            let damping_frequency = (4.0 * mass * stiffness - damping.powi(2)).sqrt();
            let leftover = damping * delta / damping_frequency;
            let amplitude = (delta * delta + leftover * leftover).sqrt();
            if amplitude <= VISIBILITY_THRESHOLD {
                return Duration::ZERO;
            }
            let dm = -0.5 * damping / mass;
            let secs = (VISIBILITY_THRESHOLD / amplitude).ln() / dm;
            return Duration::from_secs_f64(secs.min(MAX_SETTLE_SECS));
        }

        let mut t = 0.0;
        while t < MAX_SETTLE_SECS {
            if self.arrived(t, VISIBILITY_THRESHOLD) {
                return Duration::from_secs_f64(t);
            }
            t += SETTLE_STEP;
        }
        Duration::from_secs_f64(MAX_SETTLE_SECS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Damping ratio 2.0 at stiffness 100
    const OVERDAMPED: SpringParams = SpringParams {
        mass: 1.0,
        damping: 40.0,
        stiffness: 100.0,
    };

    #[test]
    fn test_high_bouncy_params() {
        let params = SpringParams::HIGH_BOUNCY;
        let ratio = params.damping / (2.0 * (params.stiffness * params.mass).sqrt());
        assert!((ratio - 0.2).abs() < 1e-9);
        assert!(!params.is_overdamped());
        assert!(OVERDAMPED.is_overdamped());
    }

    #[test]
    fn test_starts_at_from() {
        let spring = SpringMotion::new(1.0, 1.05, SpringParams::HIGH_BOUNCY);
        assert_eq!(spring.position(0.0), 1.0);
        assert_eq!(spring.position(-1.0), 1.0);
    }

    #[test]
    fn test_bouncy_spring_overshoots() {
        let spring = SpringMotion::new(0.0, 1.0, SpringParams::HIGH_BOUNCY);
        let peak = (1..2000)
            .map(|ms| spring.position(ms as f64 / 1000.0))
            .fold(Num::MIN, Num::max);
        assert!(peak > 1.2, "expected overshoot, peak was {}", peak);
    }

    #[test]
    fn test_settles_at_target() {
        let spring = SpringMotion::new(1.0, 1.05, SpringParams::HIGH_BOUNCY);
        let settle = spring.settle_time().as_secs_f64();
        assert!(settle > 0.5 && settle < 2.0, "settle time {}", settle);
        // Stays inside the threshold from then on
        for ms in 0..3000 {
            let t = settle + ms as f64 / 1000.0;
            assert!((spring.position(t) - 1.05).abs() <= VISIBILITY_THRESHOLD);
        }
    }

    #[test]
    fn test_tiny_motion_settles_immediately() {
        let spring = SpringMotion::new(1.0, 1.001, SpringParams::HIGH_BOUNCY);
        assert_eq!(spring.settle_time(), Duration::ZERO);
    }

    #[test]
    fn test_overdamped_converges() {
        let spring = SpringMotion::new(0.0, 10.0, OVERDAMPED);
        assert!((spring.position(5.0) - 10.0).abs() < 0.01);
        // No overshoot when overdamped
        for ms in 1..3000 {
            assert!(spring.position(ms as f64 / 1000.0) <= 10.0 + 1e-9);
        }
        let settle = spring.settle_time().as_secs_f64();
        assert!(settle > 0.0 && settle < MAX_SETTLE_SECS);
    }
}
