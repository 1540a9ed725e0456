//! Clamped selection over a value range

use super::{PickerError, ValueRange};

/// Index selected when the picker is first shown (value 16 in 1..=31)
pub const DEFAULT_INDEX: usize = 15;

/// Logical click target on the picker card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Previous,
    Center,
    Next,
}

impl Slot {
    /// Slots in left-to-right display order
    pub const ALL: [Slot; 3] = [Slot::Previous, Slot::Center, Slot::Next];
}

/// The three values shown around the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triple {
    pub left: Option<i32>,
    pub center: i32,
    pub right: Option<i32>,
}

impl Triple {
    /// Value displayed in `slot`, `None` for an empty neighbor
    pub fn get(&self, slot: Slot) -> Option<i32> {
        match slot {
            Slot::Previous => self.left,
            Slot::Center => Some(self.center),
            Slot::Next => self.right,
        }
    }
}

/// Selection controller
///
/// Transitions are guarded so the index never leaves `0..len`. Each one
/// reports whether the selection moved; callers only treat `true` as a
/// selection change.
#[derive(Debug, Clone)]
pub struct Picker {
    range: ValueRange,
    index: usize,
}

impl Picker {
    pub fn new(range: ValueRange, index: usize) -> Result<Self, PickerError> {
        if index >= range.len() {
            return Err(PickerError::IndexOutOfRange {
                index,
                len: range.len(),
            });
        }
        Ok(Self { range, index })
    }

    /// Day-of-month picker starting at 16
    pub fn days() -> Self {
        Self {
            range: ValueRange::days(),
            index: DEFAULT_INDEX,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Currently selected value
    pub fn value(&self) -> i32 {
        // index < len is upheld by every constructor and transition
        self.range.as_slice()[self.index]
    }

    pub fn range(&self) -> &ValueRange {
        &self.range
    }

    pub fn select_previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn select_next(&mut self) -> bool {
        if self.index < self.range.last_index() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Dispatch a click on `slot`. The center is already selected and
    /// never moves the selection.
    pub fn activate(&mut self, slot: Slot) -> bool {
        match slot {
            Slot::Previous => self.select_previous(),
            Slot::Next => self.select_next(),
            Slot::Center => false,
        }
    }

    pub fn visible_triple(&self) -> Triple {
        Triple {
            left: self
                .index
                .checked_sub(1)
                .and_then(|i| self.range.get(i)),
            center: self.value(),
            right: self.range.get(self.index + 1),
        }
    }
}

impl Default for Picker {
    fn default() -> Self {
        Self::days()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picker_at(index: usize) -> Picker {
        Picker::new(ValueRange::days(), index).unwrap()
    }

    #[test]
    fn test_default_selection() {
        let picker = Picker::days();
        assert_eq!(picker.index(), 15);
        assert_eq!(picker.value(), 16);
    }

    #[test]
    fn test_next_from_middle() {
        let mut picker = Picker::days();
        assert!(picker.select_next());
        assert_eq!(picker.index(), 16);
        assert_eq!(
            picker.visible_triple(),
            Triple {
                left: Some(16),
                center: 17,
                right: Some(18),
            }
        );
    }

    #[test]
    fn test_previous_saturates_at_start() {
        let mut picker = picker_at(0);
        assert!(!picker.select_previous());
        assert_eq!(picker.index(), 0);
        assert_eq!(
            picker.visible_triple(),
            Triple {
                left: None,
                center: 1,
                right: Some(2),
            }
        );
    }

    #[test]
    fn test_next_saturates_at_end() {
        let mut picker = picker_at(30);
        assert!(!picker.select_next());
        assert_eq!(picker.index(), 30);
        assert_eq!(picker.visible_triple().center, 31);
        assert_eq!(picker.visible_triple().right, None);
    }

    #[test]
    fn test_center_is_noop() {
        let mut picker = Picker::days();
        assert!(!picker.activate(Slot::Center));
        assert_eq!(picker.index(), 15);
    }

    #[test]
    fn test_activate_neighbors() {
        let mut picker = Picker::days();
        assert!(picker.activate(Slot::Previous));
        assert_eq!(picker.value(), 15);
        assert!(picker.activate(Slot::Next));
        assert!(picker.activate(Slot::Next));
        assert_eq!(picker.value(), 17);
    }

    #[test]
    fn test_bounds_hold_for_any_sequence() {
        // Deterministic pseudo-random walk that hammers both ends
        for start in 0..31 {
            let mut picker = picker_at(start);
            let mut seed: u32 = 0x9e37_79b9 ^ start as u32;
            for _ in 0..200 {
                seed ^= seed << 13;
                seed ^= seed >> 17;
                seed ^= seed << 5;
                if seed % 2 == 0 {
                    picker.select_next();
                } else {
                    picker.select_previous();
                }
                assert!(picker.index() < picker.range().len());
            }
        }
    }

    #[test]
    fn test_neighbors_present_inside() {
        for index in 1..30 {
            let triple = picker_at(index).visible_triple();
            assert_eq!(triple.left, Some(index as i32));
            assert_eq!(triple.center, index as i32 + 1);
            assert_eq!(triple.right, Some(index as i32 + 2));
        }
    }

    #[test]
    fn test_index_out_of_range_rejected() {
        assert_eq!(
            Picker::new(ValueRange::days(), 31).unwrap_err(),
            PickerError::IndexOutOfRange { index: 31, len: 31 }
        );
    }

    #[test]
    fn test_single_value_range() {
        let mut picker = Picker::new(ValueRange::inclusive(7, 7).unwrap(), 0).unwrap();
        assert!(!picker.select_next());
        assert!(!picker.select_previous());
        assert_eq!(
            picker.visible_triple(),
            Triple {
                left: None,
                center: 7,
                right: None,
            }
        );
    }
}
