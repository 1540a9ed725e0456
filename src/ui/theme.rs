//! Colors and typography for the picker
//! The card is always black; only the page behind it follows the theme.

use iced::color;
use iced::{Color, Theme};

// ============================================================================
// Card palette
// ============================================================================

pub const CARD: Color = color!(0x000000);
pub const CENTER_TEXT: Color = color!(0xffffff);
pub const NEIGHBOR_TEXT: Color = color!(0x888888);

/// Highlight behind a hovered neighbor at full strength
pub const HOVER_HIGHLIGHT: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.08);

/// Drop shadow under the card
pub const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.35);

// ============================================================================
// Typography
// ============================================================================

pub const CENTER_SIZE: f32 = 36.0;
pub const NEIGHBOR_SIZE: f32 = 20.0;
pub const NEIGHBOR_OPACITY: f32 = 0.4;

pub const BOLD_WEIGHT: iced::font::Weight = iced::font::Weight::Bold;

// ============================================================================
// Page
// ============================================================================

/// Check if theme is dark mode
pub fn is_dark_theme(theme: &Theme) -> bool {
    theme.extended_palette().is_dark
}

/// Page background behind the card
pub fn background(theme: &Theme) -> Color {
    if is_dark_theme(theme) {
        color!(0x121212)
    } else {
        color!(0xffffff)
    }
}

/// Theme for the configured display mode
pub fn for_mode(dark_mode: bool) -> Theme {
    if dark_mode { Theme::Dark } else { Theme::Light }
}

/// Scale a color's alpha channel
pub fn with_opacity(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}
