//! Application messages

use iced::keyboard::{Key, Modifiers};
use iced::time::Instant;

use crate::features::Action;
use crate::features::picker::Slot;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Picker ============
    /// A slot on the card was clicked (or activated from the keyboard)
    Activate(Slot),
    /// Cursor moved onto an enabled neighbor, or off all of them
    SlotHovered(Option<Slot>),

    // ============ Keyboard ============
    KeyPressed(Key, Modifiers),
    ExecuteAction(Action),

    // ============ Animation ============
    /// Frame clock tick while something is animating
    AnimationTick(Instant),

    // ============ Window ============
    WindowOpened(iced::window::Id),
    WindowClosed(iced::window::Id),
}
