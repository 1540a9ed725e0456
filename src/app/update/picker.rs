// src/app/update/picker.rs
//! Picker selection and animation message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::picker::Slot;

impl App {
    /// Handle picker-related messages
    pub fn handle_picker(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Activate(slot) => {
                self.activate(*slot, Instant::now());
                Some(Task::none())
            }

            Message::SlotHovered(slot) => {
                self.ui.hover.set_hovered(*slot);
                Some(Task::none())
            }

            Message::AnimationTick(now) => {
                self.ui.now = *now;
                self.ui.hover.tick(*now);
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Apply a slot activation at `now`. Animations restart only when the
    /// selection actually moved.
    pub(crate) fn activate(&mut self, slot: Slot, now: Instant) {
        let outgoing = self.picker.visible_triple();
        if !self.picker.activate(slot) {
            tracing::trace!("Activation of {:?} left selection unchanged", slot);
            return;
        }

        tracing::debug!(
            "Selection moved to index {} (value {})",
            self.picker.index(),
            self.picker.value()
        );

        self.ui.now = now;
        self.ui.selection.restart(now, Some(outgoing));

        // A neighbor that just emptied out can no longer be hovered
        if let Some(hovered) = self.ui.hover.hovered() {
            if self.picker.visible_triple().get(hovered).is_none() {
                self.ui.hover.set_hovered(None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::features::Settings;
    use crate::ui::animation::AnimationFrame;
    use crate::ui::animation::sequence::{BLUR_MAX, SCALE_REST};

    fn app() -> App {
        App::with_settings(Settings::default(), Instant::now())
    }

    #[test]
    fn test_next_restarts_animation() {
        let mut app = app();
        let now = Instant::now();
        app.activate(Slot::Next, now);

        assert_eq!(app.picker.index(), 16);
        assert!(app.ui.selection.is_animating(now));

        let frame = app.ui.frame();
        assert_eq!(frame.scale, SCALE_REST);
        assert_eq!(frame.blur, BLUR_MAX);
        assert_eq!(frame.crossfade.unwrap().outgoing.center, 16);
    }

    #[test]
    fn test_center_click_is_noop() {
        let mut app = app();
        let now = Instant::now();
        let _ = app.update(Message::Activate(Slot::Center));

        assert_eq!(app.picker.index(), 15);
        assert!(!app.ui.selection.is_animating(now));
    }

    #[test]
    fn test_boundary_click_does_not_restart() {
        let mut settings = Settings::default();
        settings.picker.initial_index = 0;
        let mut app = App::with_settings(settings, Instant::now());
        let now = Instant::now();

        app.activate(Slot::Previous, now);
        assert_eq!(app.picker.index(), 0);
        assert!(!app.ui.selection.is_animating(now));
    }

    #[test]
    fn test_latest_change_wins() {
        let mut app = app();
        let start = Instant::now();
        app.activate(Slot::Next, start);

        let later = start + Duration::from_millis(150);
        let _ = app.update(Message::AnimationTick(later));
        assert!(app.ui.frame().blur < BLUR_MAX);

        app.activate(Slot::Next, later);
        let frame = app.ui.frame();
        assert_eq!(frame.blur, BLUR_MAX);
        assert_eq!(frame.scale, SCALE_REST);
        assert_eq!(frame.crossfade.unwrap().outgoing.center, 17);
        assert_eq!(app.picker.value(), 18);
    }

    #[test]
    fn test_hover_cleared_when_neighbor_empties() {
        let mut settings = Settings::default();
        settings.picker.initial_index = 1;
        let mut app = App::with_settings(settings, Instant::now());

        let _ = app.update(Message::SlotHovered(Some(Slot::Previous)));
        assert_eq!(app.ui.hover.hovered(), Some(Slot::Previous));

        app.activate(Slot::Previous, Instant::now());
        assert_eq!(app.picker.index(), 0);
        assert_eq!(app.ui.hover.hovered(), None);
    }

    #[test]
    fn test_reduced_motion_skips_animation() {
        let mut settings = Settings::default();
        settings.display.power_saving_mode = true;
        let mut app = App::with_settings(settings, Instant::now());
        app.activate(Slot::Next, Instant::now());
        assert_eq!(app.picker.value(), 17);
        assert!(!app.ui.has_active_animations());
    }

    #[test]
    fn test_frames_stop_only_after_rest_is_drawn() {
        let mut app = app();
        let start = Instant::now();
        app.activate(Slot::Next, start);
        assert!(app.ui.has_active_animations());

        // A tick just short of the end still asks for another frame
        let settle = start + Duration::from_secs(2);
        let _ = app.update(Message::AnimationTick(start + Duration::from_millis(400)));
        assert!(app.ui.has_active_animations());
        assert_ne!(app.ui.frame(), AnimationFrame::REST);

        let _ = app.update(Message::AnimationTick(settle));
        assert!(!app.ui.has_active_animations());
        assert_eq!(app.ui.frame(), AnimationFrame::REST);
    }
}
