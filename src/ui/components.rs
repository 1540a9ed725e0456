//! Business-specific UI with Message handling

pub mod picker_card;
