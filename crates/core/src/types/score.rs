//! Rating score type.

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Score`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// The value is outside the accepted 1..=5 range.
    #[error("score must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Smallest accepted score.
        min: u8,
        /// Largest accepted score.
        max: u8,
        /// The rejected value.
        value: u8,
    },
}

/// A star rating between 1 and 5 inclusive.
///
/// Construction is fallible so an out-of-range score can never be submitted
/// to the backend or deserialized from it unnoticed.
///
/// ```
/// use raterly_core::Score;
///
/// assert!(Score::new(4).is_ok());
/// assert!(Score::new(0).is_err());
/// assert!(Score::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Score(u8);

impl Score {
    /// Smallest accepted score.
    pub const MIN: u8 = 1;
    /// Largest accepted score.
    pub const MAX: u8 = 5;

    /// Create a new score.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::OutOfRange` if `value` is not in 1..=5.
    pub const fn new(value: u8) -> Result<Self, ScoreError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(ScoreError::OutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                value,
            })
        }
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_full_range() {
        for value in 1..=5 {
            assert_eq!(Score::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(matches!(
            Score::new(0),
            Err(ScoreError::OutOfRange { value: 0, .. })
        ));
        assert!(matches!(
            Score::new(6),
            Err(ScoreError::OutOfRange { value: 6, .. })
        ));
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Score>("3").is_ok());
        assert!(serde_json::from_str::<Score>("0").is_err());
        assert!(serde_json::from_str::<Score>("9").is_err());
    }

    #[test]
    fn test_serde_serializes_as_number() {
        let score = Score::new(4).unwrap();
        assert_eq!(serde_json::to_string(&score).unwrap(), "4");
    }
}
