//! Animation system for the picker
//!
//! The selection change animation is built from explicit, time-sampled
//! state machines (`tween`, `spring`, `sequence`) so a frame can be
//! computed for any instant. Hover highlights use `iced_anim` transitions.

pub mod curve;
mod hover;
pub mod sequence;
pub mod spring;
pub mod tween;

pub use hover::HoverHighlight;
pub use sequence::{AnimationFrame, Crossfade, SelectionAnimation};
