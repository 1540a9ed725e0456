//! Feature modules - business logic separated from UI
//!
//! Features should not depend on UI components directly.

pub mod keybindings;
pub mod picker;
pub mod settings;

pub use keybindings::{Action, KeyBindings};
pub use settings::Settings;
