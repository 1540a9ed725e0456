// src/app/update/window.rs
//! Window lifecycle message handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowOpened(id) => {
                tracing::info!("Main window opened with id: {:?}", id);
                self.core.window_id = Some(*id);

                // Entrance: spring and un-blur once, nothing to crossfade from
                let now = Instant::now();
                self.ui.now = now;
                self.ui.selection.restart(now, None);
                Some(Task::none())
            }

            Message::WindowClosed(id) => {
                if self.core.window_id == Some(*id) {
                    tracing::info!("Main window closed, exiting");
                    return Some(iced::exit());
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}
