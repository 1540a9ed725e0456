//! Application settings persistence
//!
//! Handles saving and loading user preferences. The current selection is
//! deliberately not part of the settings and is never written to disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::KeyBindings;
use super::picker::{DEFAULT_FIRST, DEFAULT_INDEX, DEFAULT_LAST, Picker, PickerError, ValueRange};

/// Application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Range and starting point of the picker
    pub picker: PickerSettings,
    /// Display and interface settings
    pub display: DisplaySettings,
    /// Custom keybindings
    pub keybindings: KeyBindings,
}

/// Picker range settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// First selectable value
    pub first: i32,
    /// Last selectable value (inclusive)
    pub last: i32,
    /// Index selected when the window opens
    pub initial_index: usize,
}

impl PickerSettings {
    /// Build the picker described by these settings
    pub fn build(&self) -> Result<Picker, PickerError> {
        let range = ValueRange::inclusive(self.first, self.last)?;
        Picker::new(range, self.initial_index)
    }
}

/// Display and interface settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark page background
    pub dark_mode: bool,
    /// Power saving mode - selection changes snap without animating
    pub power_saving_mode: bool,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            first: DEFAULT_FIRST,
            last: DEFAULT_LAST,
            initial_index: DEFAULT_INDEX,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "elastic-picker", "ElasticPicker")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            tracing::warn!("Could not determine config directory, using default settings");
            return Self::default();
        };
        Self::load_or_init(&path)
    }

    /// Load settings from `path`; on first run write the defaults there
    pub fn load_or_init(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(settings) => {
                tracing::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) => {
                tracing::debug!("No settings at {} ({}), writing defaults", path.display(), e);
                let settings = Self::default();
                if let Err(e) = settings.save_to_file(path) {
                    tracing::warn!("Failed to write default settings: {}", e);
                }
                settings
            }
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Picker from the configured range, falling back to 1..=31
    pub fn picker(&self) -> Picker {
        match self.picker.build() {
            Ok(picker) => picker,
            Err(e) => {
                tracing::warn!(
                    "Invalid picker settings {:?}: {}, falling back to days of month",
                    self.picker,
                    e
                );
                Picker::days()
            }
        }
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use iced::keyboard::key::Named;
    use iced::keyboard::{Key, Modifiers};

    use super::*;
    use crate::features::Action;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("elastic-picker-test-{}-{}", std::process::id(), name))
            .join("settings.json")
    }

    #[test]
    fn test_defaults_match_day_picker() {
        let settings = Settings::default();
        assert_eq!(settings.picker.first, 1);
        assert_eq!(settings.picker.last, 31);
        assert_eq!(settings.picker.initial_index, 15);
        assert!(!settings.display.dark_mode);
        assert!(!settings.display.power_saving_mode);

        let picker = settings.picker();
        assert_eq!(picker.value(), 16);
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_settings_path("roundtrip");
        let mut settings = Settings::default();
        settings.picker.first = 2000;
        settings.picker.last = 2030;
        settings.picker.initial_index = 26;
        settings.display.power_saving_mode = true;

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded.picker, settings.picker);
        assert!(loaded.display.power_saving_mode);
        assert_eq!(loaded.picker().value(), 2026);
        assert_eq!(
            loaded.keybindings.find_action(&Key::Named(Named::ArrowRight), &Modifiers::empty()),
            Some(Action::SelectNext)
        );

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "display": { "dark_mode": true } }"#).unwrap();
        assert!(settings.display.dark_mode);
        assert_eq!(settings.picker, PickerSettings::default());
        assert_eq!(
            settings.keybindings.find_action(&Key::Named(Named::ArrowLeft), &Modifiers::empty()),
            Some(Action::SelectPrevious)
        );
    }

    #[test]
    fn test_invalid_range_falls_back() {
        let mut settings = Settings::default();
        settings.picker.first = 10;
        settings.picker.last = 5;
        assert_eq!(settings.picker.build().unwrap_err(), PickerError::EmptyRange);
        assert_eq!(settings.picker().value(), 16);

        settings.picker.last = 12;
        settings.picker.initial_index = 3;
        assert!(matches!(
            settings.picker.build(),
            Err(PickerError::IndexOutOfRange { index: 3, len: 3 })
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let path = temp_settings_path("missing");
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Io(_))
        ));
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let path = temp_settings_path("first-run");
        let _ = std::fs::remove_dir_all(path.parent().unwrap());

        let settings = Settings::load_or_init(&path);
        assert_eq!(settings.picker, PickerSettings::default());
        assert!(path.exists());

        let written = Settings::load_from_file(&path).unwrap();
        assert_eq!(written.picker, PickerSettings::default());
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_garbage_file_is_left_alone() {
        let path = temp_settings_path("keep-garbage");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let settings = Settings::load_or_init(&path);
        assert_eq!(settings.picker, PickerSettings::default());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_huge_range_falls_back() {
        let settings: Settings = serde_json::from_str(
            r#"{ "picker": { "first": -2147483648, "last": 2147483647, "initial_index": 0 } }"#,
        )
        .unwrap();
        assert!(matches!(
            settings.picker.build(),
            Err(PickerError::RangeTooLarge { .. })
        ));
        let picker = settings.picker();
        assert_eq!(picker.range(), Picker::days().range());
        assert_eq!(picker.value(), 16);
    }

    #[test]
    fn test_load_garbage_is_parse_error() {
        let path = temp_settings_path("garbage");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
