//! Picker render description
//!
//! `render` turns the picker state and a sampled animation frame into a
//! plain description of what to paint. It is pure; the canvas program only
//! reads what it returns.

use iced::Color;

use crate::features::picker::{Picker, Slot, Triple};
use crate::ui::animation::{AnimationFrame, HoverHighlight};
use crate::ui::theme;

/// One text label on the card
#[derive(Debug, Clone, PartialEq)]
pub struct SlotLabel {
    pub slot: Slot,
    /// Empty for a missing neighbor
    pub text: String,
    pub size: f32,
    pub bold: bool,
    pub color: Color,
    pub opacity: f32,
    /// Whether clicking the label may change the selection
    pub enabled: bool,
    /// Hover highlight strength in [0, 1]
    pub highlight: f32,
}

/// A full triple drawn at `alpha`
#[derive(Debug, Clone, PartialEq)]
pub struct TripleLayer {
    pub labels: [SlotLabel; 3],
    pub alpha: f32,
}

impl TripleLayer {
    pub fn label(&self, slot: Slot) -> &SlotLabel {
        match slot {
            Slot::Previous => &self.labels[0],
            Slot::Center => &self.labels[1],
            Slot::Next => &self.labels[2],
        }
    }
}

/// Everything the card needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct PickerRender {
    /// Back to front; the last layer is the current selection
    pub layers: Vec<TripleLayer>,
    pub scale: f32,
    pub blur: f32,
}

impl PickerRender {
    /// Layer showing the current selection
    pub fn current(&self) -> &TripleLayer {
        // render() always pushes the current layer last
        &self.layers[self.layers.len() - 1]
    }

    /// Whether a click on `slot` should be forwarded
    pub fn accepts(&self, slot: Slot) -> bool {
        let label = self.current().label(slot);
        label.enabled || slot == Slot::Center
    }
}

pub fn render(picker: &Picker, frame: &AnimationFrame, hover: &HoverHighlight) -> PickerRender {
    let current = picker.visible_triple();

    let mut layers = Vec::with_capacity(2);
    let current_alpha = match frame.crossfade {
        Some(crossfade) => {
            layers.push(layer(&crossfade.outgoing, 1.0 - crossfade.progress, None));
            crossfade.progress
        }
        None => 1.0,
    };
    layers.push(layer(&current, current_alpha, Some(hover)));

    PickerRender {
        layers,
        scale: frame.scale,
        blur: frame.blur,
    }
}

fn layer(triple: &Triple, alpha: f32, hover: Option<&HoverHighlight>) -> TripleLayer {
    TripleLayer {
        labels: Slot::ALL.map(|slot| label(triple, slot, hover)),
        alpha: alpha.clamp(0.0, 1.0),
    }
}

fn label(triple: &Triple, slot: Slot, hover: Option<&HoverHighlight>) -> SlotLabel {
    let text = triple.get(slot).map(|v| v.to_string()).unwrap_or_default();

    match slot {
        Slot::Center => SlotLabel {
            slot,
            text,
            size: theme::CENTER_SIZE,
            bold: true,
            color: theme::CENTER_TEXT,
            opacity: 1.0,
            enabled: false,
            highlight: 0.0,
        },
        Slot::Previous | Slot::Next => {
            let enabled = !text.is_empty();
            SlotLabel {
                slot,
                text,
                size: theme::NEIGHBOR_SIZE,
                bold: false,
                color: theme::NEIGHBOR_TEXT,
                opacity: theme::NEIGHBOR_OPACITY,
                enabled,
                highlight: match hover {
                    Some(hover) if enabled => hover.progress(slot),
                    _ => 0.0,
                },
            }
        }
    }
}
