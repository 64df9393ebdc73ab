use crate::GoalError;
use serde::{Deserialize, Serialize};

/// Open interval `(low, high)` used for region bounds.
///
/// `low < high` is checked on every construction path, including
/// deserialisation from a `[low, high]` pair.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f32; 2]", into = "[f32; 2]")]
pub struct ValueRange {
    low: f32,
    high: f32,
}

impl ValueRange {
    /// # Errors
    ///
    /// Returns [`GoalError::DegenerateRange`] unless `low < high` (NaN bounds
    /// are rejected too).
    pub fn new(low: f32, high: f32) -> Result<Self, GoalError> {
        if low < high {
            Ok(Self { low, high })
        } else {
            Err(GoalError::DegenerateRange { low, high })
        }
    }

    /// `(center - half_width, center + half_width)` for a positive width.
    pub(crate) fn around(center: f32, half_width: f32) -> Self {
        debug_assert!(half_width > 0.0);
        Self { low: center - half_width, high: center + half_width }
    }

    /// `(-half_width, half_width)` for a positive width.
    pub(crate) fn symmetric(half_width: f32) -> Self {
        Self::around(0.0, half_width)
    }

    #[must_use]
    pub fn low(&self) -> f32 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> f32 {
        self.high
    }

    /// Strict containment; both bounds are excluded.
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value > self.low && value < self.high
    }
}

impl TryFrom<[f32; 2]> for ValueRange {
    type Error = GoalError;

    fn try_from(pair: [f32; 2]) -> Result<Self, Self::Error> {
        Self::new(pair[0], pair[1])
    }
}

impl From<ValueRange> for [f32; 2] {
    fn from(range: ValueRange) -> Self {
        [range.low, range.high]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_ranges_are_rejected() {
        assert!(ValueRange::new(0.1, 0.1).is_err());
        assert!(ValueRange::new(0.2, -0.2).is_err());
        assert!(ValueRange::new(f32::NAN, 1.0).is_err());
        assert!(ValueRange::new(-0.1, 0.1).is_ok());
    }

    #[test]
    fn bounds_are_excluded() {
        let range = ValueRange::new(-1.0, 1.0).unwrap();
        assert!(range.contains(0.0));
        assert!(!range.contains(1.0));
        assert!(!range.contains(-1.0));
    }

    #[test]
    fn deserialisation_validates() {
        let ok: ValueRange = serde_json::from_str("[-0.07, 0.07]").unwrap();
        assert_eq!(ok, ValueRange::new(-0.07, 0.07).unwrap());
        assert!(serde_json::from_str::<ValueRange>("[0.5, 0.1]").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "[-0.07,0.07]");
    }
}
