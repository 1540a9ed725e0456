// src/app/state.rs
//! Application state definitions

use iced::time::Instant;

use crate::features::Settings;
use crate::features::picker::Picker;
use crate::ui::animation::{AnimationFrame, HoverHighlight, SelectionAnimation};

/// Main application state
pub struct App {
    /// Core infrastructure (settings, window)
    pub core: CoreState,
    /// Selection over the value range
    pub picker: Picker,
    /// UI state (animations, frame clock)
    pub ui: UiState,
}

/// Core infrastructure
pub struct CoreState {
    pub settings: Settings,
    pub window_id: Option<iced::window::Id>,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            window_id: None,
        }
    }
}

/// UI state
pub struct UiState {
    /// Scale / blur / crossfade tracks of the card
    pub selection: SelectionAnimation,
    /// Hover highlight on the neighbor slots
    pub hover: HoverHighlight,
    /// Instant of the last frame; the view samples animations here
    pub now: Instant,
}

impl UiState {
    pub fn new(now: Instant, reduced_motion: bool) -> Self {
        let mut selection = SelectionAnimation::new(now);
        selection.set_reduced_motion(reduced_motion);
        Self {
            selection,
            hover: HoverHighlight::new(),
            now,
        }
    }

    /// Check if any animation still needs frames
    ///
    /// Judged at the last frame instant, the one the view samples, so frames
    /// keep coming until a tick has actually drawn the resting state.
    pub fn has_active_animations(&self) -> bool {
        self.selection.is_animating(self.now) || self.hover.is_animating()
    }

    /// Animation values at the current frame
    pub fn frame(&self) -> AnimationFrame {
        self.selection.sample(self.now)
    }
}
