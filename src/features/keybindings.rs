//! Keyboard shortcuts for driving the picker
//!
//! Bindings are stored in the settings file, so users can remap the
//! keys that step the selection.

use std::collections::HashMap;

use iced::keyboard::{Key, Modifiers};
use serde::{Deserialize, Serialize};

use super::picker::Slot;

/// All bindable actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    SelectPrevious,
    SelectNext,
}

impl Action {
    /// Get all available actions
    pub fn all() -> &'static [Action] {
        &[Action::SelectPrevious, Action::SelectNext]
    }

    /// Slot activated by this action, same as clicking it
    pub fn slot(&self) -> Slot {
        match self {
            Action::SelectPrevious => Slot::Previous,
            Action::SelectNext => Slot::Next,
        }
    }
}

/// A keyboard shortcut consisting of modifiers and a key
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Modifier keys (Ctrl, Alt, Shift)
    #[serde(default)]
    pub modifiers: ModifierSet,
    /// The main key
    pub key: KeyCode,
}

impl KeyBinding {
    pub fn new(key: KeyCode) -> Self {
        Self {
            modifiers: ModifierSet::default(),
            key,
        }
    }

    /// Check if this keybinding matches the given key event
    pub fn matches(&self, key: &Key, modifiers: &Modifiers) -> bool {
        self.key.matches(key) && self.modifiers.matches(modifiers)
    }
}

/// Set of modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ModifierSet {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl ModifierSet {
    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        self.ctrl == modifiers.control()
            && self.alt == modifiers.alt()
            && self.shift == modifiers.shift()
    }
}

/// Supported key codes for binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    A,
    D,
    H,
    J,
    K,
    L,
    Minus,
    Plus,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
}

impl KeyCode {
    /// Check if this key code matches an iced Key
    pub fn matches(&self, key: &Key) -> bool {
        match key {
            Key::Character(c) => {
                let c = c.to_lowercase();
                matches!(
                    (self, c.as_str()),
                    (KeyCode::A, "a")
                        | (KeyCode::D, "d")
                        | (KeyCode::H, "h")
                        | (KeyCode::J, "j")
                        | (KeyCode::K, "k")
                        | (KeyCode::L, "l")
                        | (KeyCode::Minus, "-")
                        | (KeyCode::Plus, "+")
                        | (KeyCode::Plus, "=")
                )
            }
            Key::Named(named) => {
                use iced::keyboard::key::Named;
                matches!(
                    (self, named),
                    (KeyCode::Up, Named::ArrowUp)
                        | (KeyCode::Down, Named::ArrowDown)
                        | (KeyCode::Left, Named::ArrowLeft)
                        | (KeyCode::Right, Named::ArrowRight)
                        | (KeyCode::PageUp, Named::PageUp)
                        | (KeyCode::PageDown, Named::PageDown)
                )
            }
            Key::Unidentified => false,
        }
    }
}

/// The keybindings configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    /// Map from action to keybinding
    bindings: HashMap<Action, Vec<KeyBinding>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(
            Action::SelectPrevious,
            vec![KeyBinding::new(KeyCode::Left), KeyBinding::new(KeyCode::H)],
        );
        bindings.insert(
            Action::SelectNext,
            vec![KeyBinding::new(KeyCode::Right), KeyBinding::new(KeyCode::L)],
        );

        Self { bindings }
    }
}

impl KeyBindings {
    /// Find the action that matches the given key event
    pub fn find_action(&self, key: &Key, modifiers: &Modifiers) -> Option<Action> {
        // Iterate in a fixed order so overlapping bindings resolve the same way every run
        Action::all().iter().copied().find(|action| {
            self.bindings
                .get(action)
                .is_some_and(|list| list.iter().any(|b| b.matches(key, modifiers)))
        })
    }
}
