//! Score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// An integer score between 0 and 100 inclusive.
///
/// Used for competition scores and keyword relevance. Deserialization
/// rejects values outside the range instead of clamping them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    /// Lowest possible score.
    pub const MIN: Self = Self(0);

    /// Highest possible score.
    pub const MAX: Self = Self(100);

    /// Creates a Score, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::out_of_range("score", 0, 100, value));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Score {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_try_new_accepts_bounds() {
        assert_eq!(Score::try_new(0).unwrap(), Score::MIN);
        assert_eq!(Score::try_new(100).unwrap(), Score::MAX);
        assert_eq!(Score::try_new(42).unwrap().value(), 42);
    }

    #[test]
    fn score_try_new_rejects_out_of_range() {
        match Score::try_new(101) {
            Err(ValidationError::OutOfRange { field, min, max, actual }) => {
                assert_eq!(field, "score");
                assert_eq!(min, 0);
                assert_eq!(max, 100);
                assert_eq!(actual, 101);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
        assert!(Score::try_new(-1).is_err());
    }

    #[test]
    fn score_serializes_as_plain_number() {
        let json = serde_json::to_string(&Score::try_new(73).unwrap()).unwrap();
        assert_eq!(json, "73");
    }

    #[test]
    fn score_deserialization_enforces_range() {
        let ok: Score = serde_json::from_str("88").unwrap();
        assert_eq!(ok.value(), 88);

        assert!(serde_json::from_str::<Score>("250").is_err());
        assert!(serde_json::from_str::<Score>("-5").is_err());
        assert!(serde_json::from_str::<Score>("\"high\"").is_err());
    }
}
