//! Picker selection logic
//!
//! Owns the ordered value range and the clamped selection index.
//! Nothing in here knows about animation or drawing; the UI layer
//! observes the `bool` returned by every transition and replays its
//! animations only when the selection actually moved.

mod controller;
mod range;

pub use controller::{DEFAULT_INDEX, Picker, Slot, Triple};
pub use range::{DEFAULT_FIRST, DEFAULT_LAST, ValueRange};

/// Errors raised while building a picker from configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerError {
    /// The range contains no values
    EmptyRange,
    /// A contiguous range spans more than `max` values
    RangeTooLarge { len: u64, max: usize },
    /// `values[position]` is not greater than the value before it
    NotIncreasing { position: usize },
    /// The initial index points past the end of the range
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for PickerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PickerError::EmptyRange => write!(f, "Value range is empty"),
            PickerError::RangeTooLarge { len, max } => {
                write!(f, "Value range holds {} values, at most {} allowed", len, max)
            }
            PickerError::NotIncreasing { position } => {
                write!(f, "Value range is not strictly increasing at position {}", position)
            }
            PickerError::IndexOutOfRange { index, len } => {
                write!(f, "Index {} is out of range for {} values", index, len)
            }
        }
    }
}

impl std::error::Error for PickerError {}
