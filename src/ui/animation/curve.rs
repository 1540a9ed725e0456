//! Easing curves for time-based tweens
//!
//! Curves are cubic beziers anchored at (0, 0) and (1, 1), evaluated the
//! same way CSS `cubic-bezier()` is: solve x(t) = progress for t, then
//! return y(t).

/// Newton iterations before falling back to bisection
const NEWTON_ITERATIONS: usize = 8;
const NEWTON_EPSILON: f32 = 1e-6;
const BISECTION_ITERATIONS: usize = 32;

/// Easing curve applied to a tween's linear progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    Linear,
    /// Quick start, long gentle landing (0.4, 0.0, 0.2, 1.0)
    FastOutSlowIn,
    /// Quick start, constant-speed finish (0.4, 0.0, 1.0, 1.0)
    FastOutLinearIn,
}

impl Curve {
    /// Map linear progress in [0, 1] to eased progress
    pub fn transform(&self, progress: f32) -> f32 {
        let x = progress.clamp(0.0, 1.0);
        match *self {
            Curve::Linear => x,
            Curve::FastOutSlowIn => cubic_bezier(0.4, 0.0, 0.2, 1.0, x),
            Curve::FastOutLinearIn => cubic_bezier(0.4, 0.0, 1.0, 1.0, x),
        }
    }
}

/// One coordinate of a bezier with endpoints 0 and 1
fn bezier(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
}

fn bezier_slope(p1: f32, p2: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let mut t = x;
    for _ in 0..NEWTON_ITERATIONS {
        let error = bezier(x1, x2, t) - x;
        if error.abs() < NEWTON_EPSILON {
            return bezier(y1, y2, t);
        }
        let slope = bezier_slope(x1, x2, t);
        if slope.abs() < NEWTON_EPSILON {
            break;
        }
        t -= error / slope;
    }

    // x(t) is monotonic for control points inside [0, 1]
    let (mut low, mut high) = (0.0_f32, 1.0_f32);
    t = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier(x1, x2, t);
        if (value - x).abs() < NEWTON_EPSILON {
            break;
        }
        if value < x {
            low = t;
        } else {
            high = t;
        }
        t = (low + high) * 0.5;
    }
    bezier(y1, y2, t)
}
