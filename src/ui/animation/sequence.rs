//! Selection change animation: elastic scale, blur release and crossfade
//!
//! Three independent tracks start together on every selection change:
//!
//! | Track     | Motion                                                     |
//! |-----------|------------------------------------------------------------|
//! | scale     | snap 1.0, spring to 1.05, then 300ms fast-out-slow-in to 1.0 |
//! | blur      | snap 16, 300ms fast-out-slow-in to 0                        |
//! | crossfade | old triple out / new triple in, 300ms fast-out-linear-in    |
//!
//! Restarting replaces every track with a fresh one, so whatever was in
//! flight is dropped and the latest change wins.

use std::time::{Duration, Instant};

use super::curve::Curve;
use super::spring::{SpringMotion, SpringParams};
use super::tween::Tween;
use crate::features::picker::Triple;

/// Duration shared by the tweened tracks
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

pub const SCALE_REST: f32 = 1.0;
pub const SCALE_PEAK: f32 = 1.05;

/// Blur radius in logical pixels right after a change
pub const BLUR_MAX: f32 = 16.0;

/// Old content fading out while the new content fades in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossfade {
    pub outgoing: Triple,
    /// Eased opacity of the incoming content; the outgoing one uses `1 - progress`
    pub progress: f32,
}

/// Sampled animation values for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationFrame {
    pub scale: f32,
    pub blur: f32,
    pub crossfade: Option<Crossfade>,
}

impl AnimationFrame {
    pub const REST: Self = Self {
        scale: SCALE_REST,
        blur: 0.0,
        crossfade: None,
    };
}

/// Spring up to the peak, then tween back down once the spring settles
#[derive(Debug, Clone, Copy)]
struct ScaleTrack {
    spring: SpringMotion,
    start: Instant,
    release: Tween,
}

impl ScaleTrack {
    fn new(now: Instant) -> Self {
        let spring = SpringMotion::new(
            SCALE_REST as f64,
            SCALE_PEAK as f64,
            SpringParams::HIGH_BOUNCY,
        );
        // The release tween starts exactly when the spring settles
        let release_start = now + spring.settle_time();
        Self {
            spring,
            start: now,
            release: Tween::new(
                SCALE_PEAK,
                SCALE_REST,
                release_start,
                TRANSITION_DURATION,
                Curve::FastOutSlowIn,
            ),
        }
    }

    fn sample(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start);
        let release_after = self.release.start().saturating_duration_since(self.start);
        if elapsed < release_after {
            self.spring.position(elapsed.as_secs_f64()) as f32
        } else {
            self.release.sample(now)
        }
    }

    fn is_finished(&self, now: Instant) -> bool {
        self.release.is_finished(now)
    }
}

/// Animation state for the picker card
#[derive(Debug, Clone)]
pub struct SelectionAnimation {
    scale: Option<ScaleTrack>,
    blur: Tween,
    crossfade: Option<(Triple, Tween)>,
    reduced_motion: bool,
}

impl SelectionAnimation {
    /// Idle animation resting at scale 1.0 and no blur
    pub fn new(now: Instant) -> Self {
        Self {
            scale: None,
            blur: Tween::settled(0.0, now),
            crossfade: None,
            reduced_motion: false,
        }
    }

    /// Snap every restart straight to rest values
    pub fn set_reduced_motion(&mut self, reduced_motion: bool) {
        self.reduced_motion = reduced_motion;
    }

    /// Replay all tracks from their reset values.
    ///
    /// `outgoing` is the triple shown before the change; `None` plays the
    /// scale and blur tracks without a crossfade (first appearance).
    pub fn restart(&mut self, now: Instant, outgoing: Option<Triple>) {
        if self.reduced_motion {
            *self = Self {
                reduced_motion: true,
                ..Self::new(now)
            };
            return;
        }

        self.scale = Some(ScaleTrack::new(now));
        self.blur = Tween::new(
            BLUR_MAX,
            0.0,
            now,
            TRANSITION_DURATION,
            Curve::FastOutSlowIn,
        );
        self.crossfade = outgoing.map(|triple| {
            (
                triple,
                Tween::new(0.0, 1.0, now, TRANSITION_DURATION, Curve::FastOutLinearIn),
            )
        });
    }

    pub fn sample(&self, now: Instant) -> AnimationFrame {
        AnimationFrame {
            scale: self
                .scale
                .as_ref()
                .map_or(SCALE_REST, |track| track.sample(now)),
            blur: self.blur.sample(now),
            crossfade: self.crossfade.as_ref().and_then(|(outgoing, tween)| {
                (!tween.is_finished(now)).then(|| Crossfade {
                    outgoing: *outgoing,
                    progress: tween.sample(now),
                })
            }),
        }
    }

    /// Whether any track still needs frames
    pub fn is_animating(&self, now: Instant) -> bool {
        self.scale
            .as_ref()
            .is_some_and(|track| !track.is_finished(now))
            || !self.blur.is_finished(now)
            || self
                .crossfade
                .as_ref()
                .is_some_and(|(_, tween)| !tween.is_finished(now))
    }
}
