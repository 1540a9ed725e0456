// src/app/view.rs
//! Application view rendering

use iced::Element;

use super::App;
use super::message::Message;
use crate::ui::components;
use crate::ui::render;

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let frame = self.ui.frame();
        let render = render::render(&self.picker, &frame, &self.ui.hover);
        components::picker_card::view(render)
    }
}
