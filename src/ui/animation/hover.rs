//! Hover highlight for the neighbor slots, driven by iced_anim
//!
//! At most one slot is hovered at a time, so only the hovered slot and the
//! one it just left (fading out) carry an animation.

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

use crate::features::picker::Slot;

/// Fade duration for the highlight
const HOVER_DURATION: Duration = Duration::from_millis(200);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

/// Exclusive hover state for the picker slots
#[derive(Debug)]
pub struct HoverHighlight {
    /// Currently hovered slot
    active: Option<Slot>,
    /// Animation for the active slot (fading in)
    active_anim: Animated<f32>,
    /// Slot the cursor just left (fading out)
    fading: Option<Slot>,
    fading_anim: Animated<f32>,
}

impl Default for HoverHighlight {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverHighlight {
    pub fn new() -> Self {
        Self {
            active: None,
            active_anim: Animated::transition(0.0, hover_easing()),
            fading: None,
            fading_anim: Animated::transition(0.0, hover_easing()),
        }
    }

    /// Move the highlight to `slot`, or clear it with `None`
    pub fn set_hovered(&mut self, slot: Option<Slot>) {
        if self.active == slot {
            return;
        }

        // Whatever was active starts fading from its current value
        if let Some(old) = self.active.take() {
            let current = *self.active_anim.value();
            self.fading = Some(old);
            self.fading_anim = Animated::transition(current, hover_easing());
            self.fading_anim.update(0.0.into());
        }

        if let Some(new) = slot {
            self.active = Some(new);
            self.active_anim = Animated::transition(0.0, hover_easing());
            self.active_anim.update(1.0.into());
        }
    }

    /// Highlight strength for `slot` in [0, 1]
    pub fn progress(&self, slot: Slot) -> f32 {
        if self.active == Some(slot) {
            *self.active_anim.value()
        } else if self.fading == Some(slot) {
            *self.fading_anim.value()
        } else {
            0.0
        }
    }

    pub fn hovered(&self) -> Option<Slot> {
        self.active
    }

    pub fn is_animating(&self) -> bool {
        self.active_anim.is_animating() || self.fading_anim.is_animating()
    }

    /// Advance both animations; call on every frame tick
    pub fn tick(&mut self, now: Instant) {
        self.active_anim.tick(now);
        self.fading_anim.tick(now);

        // Forget a finished fade-out
        if self.fading.is_some() && !self.fading_anim.is_animating() {
            self.fading = None;
        }
    }
}
