//! Ordered, immutable value range

use super::PickerError;

/// First day shown by the default picker
pub const DEFAULT_FIRST: i32 = 1;
/// Last day shown by the default picker
pub const DEFAULT_LAST: i32 = 31;
/// Upper bound on the number of values a configured range may hold
pub const MAX_RANGE_LEN: usize = 10_000;

/// Strictly increasing, non-empty sequence of selectable values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueRange {
    values: Vec<i32>,
}

impl ValueRange {
    /// Build a range from arbitrary values, validating the ordering
    pub fn new(values: Vec<i32>) -> Result<Self, PickerError> {
        if values.is_empty() {
            return Err(PickerError::EmptyRange);
        }
        if let Some(position) = values
            .windows(2)
            .position(|pair| pair[1] <= pair[0])
            .map(|i| i + 1)
        {
            return Err(PickerError::NotIncreasing { position });
        }
        Ok(Self { values })
    }

    /// Contiguous range `first..=last`, at most `MAX_RANGE_LEN` values
    pub fn inclusive(first: i32, last: i32) -> Result<Self, PickerError> {
        // Checked before collecting so a huge configured span never allocates
        let len = i64::from(last) - i64::from(first) + 1;
        if len > MAX_RANGE_LEN as i64 {
            return Err(PickerError::RangeTooLarge {
                len: len as u64,
                max: MAX_RANGE_LEN,
            });
        }
        Self::new((first..=last).collect())
    }

    /// Days of a month, 1..=31
    pub fn days() -> Self {
        Self {
            values: (DEFAULT_FIRST..=DEFAULT_LAST).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Index of the last value
    pub fn last_index(&self) -> usize {
        self.values.len() - 1
    }

    /// Value at `index`, `None` past either end
    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_range() {
        let range = ValueRange::days();
        assert_eq!(range.len(), 31);
        assert_eq!(range.get(0), Some(1));
        assert_eq!(range.get(30), Some(31));
        assert_eq!(range.get(31), None);
        assert_eq!(range.last_index(), 30);
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(ValueRange::new(Vec::new()), Err(PickerError::EmptyRange));
        assert_eq!(ValueRange::inclusive(5, 4), Err(PickerError::EmptyRange));
    }

    #[test]
    fn test_oversized_span_rejected() {
        assert_eq!(
            ValueRange::inclusive(i32::MIN, i32::MAX),
            Err(PickerError::RangeTooLarge {
                len: 1 << 32,
                max: MAX_RANGE_LEN,
            })
        );
        assert!(ValueRange::inclusive(0, MAX_RANGE_LEN as i32).is_err());

        let widest = ValueRange::inclusive(1, MAX_RANGE_LEN as i32).unwrap();
        assert_eq!(widest.len(), MAX_RANGE_LEN);
    }

    #[test]
    fn test_not_increasing_rejected() {
        assert_eq!(
            ValueRange::new(vec![1, 2, 2, 3]),
            Err(PickerError::NotIncreasing { position: 2 })
        );
        assert_eq!(
            ValueRange::new(vec![3, 1]),
            Err(PickerError::NotIncreasing { position: 1 })
        );
    }

    #[test]
    fn test_gaps_allowed() {
        let range = ValueRange::new(vec![0, 15, 30, 45]).unwrap();
        assert_eq!(range.len(), 4);
        assert_eq!(range.as_slice(), &[0, 15, 30, 45]);
    }
}
