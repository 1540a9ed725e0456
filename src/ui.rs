//! UI module for the picker
//!
//! # Architecture
//!
//! - **Animation** (`animation`): time-sampled tracks and hover state
//! - **Render** (`render`): pure picker state → paint description
//! - **Components** (`components`): canvas widgets that publish app messages

pub mod animation;
pub mod components;
pub mod render;
pub mod theme;
