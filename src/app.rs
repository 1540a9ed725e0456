//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::time::Instant;
use iced::{Task, Theme};

use crate::features::Settings;
pub use message::Message;
pub use state::{App, CoreState, UiState};

/// Window size leaving generous room around the card
const WINDOW_SIZE: iced::Size = iced::Size::new(480.0, 320.0);

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let app = Self::with_settings(settings, Instant::now());

        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: WINDOW_SIZE,
            min_size: Some(iced::Size::new(320.0, 200.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "elastic-picker".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.map(Message::WindowOpened))
    }

    /// Build state from already loaded settings
    pub fn with_settings(settings: Settings, now: Instant) -> Self {
        let picker = settings.picker();
        let ui = UiState::new(now, settings.display.power_saving_mode);
        tracing::debug!(
            "Picker ready: {} values, starting at {}",
            picker.range().len(),
            picker.value()
        );

        Self {
            core: CoreState::new(settings),
            picker,
            ui,
        }
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        crate::ui::theme::for_mode(self.core.settings.display.dark_mode)
    }

    pub fn title(&self, _window_id: iced::window::Id) -> String {
        format!("Elastic Picker - {}", self.picker.value())
    }

    /// Subscriptions for animations, keyboard events, and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        // 1. Frame clock, only while something moves
        let animation_sub = if self.ui.has_active_animations() {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 3. Window close
        let close_event_sub = iced::window::close_events().map(Message::WindowClosed);

        iced::Subscription::batch([animation_sub, keyboard_sub, close_event_sub])
    }
}
