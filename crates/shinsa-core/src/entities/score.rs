use std::borrow::Cow;
use std::fmt;

use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A review score, always within `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Build a score, rejecting anything outside `1..=5`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidScore` for out-of-range values.
    pub fn new(value: i64) -> Result<Self, CoreError> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
            .ok_or(CoreError::InvalidScore(value))
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based slot for score-distribution counters.
    #[must_use]
    pub const fn bucket(self) -> usize {
        (self.0 - Self::MIN) as usize
    }
}

impl TryFrom<i64> for Score {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::str::FromStr for Score {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| CoreError::Validation(format!("score '{s}' is not an integer")))?;
        Self::new(value)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl JsonSchema for Score {
    fn schema_name() -> Cow<'static, str> {
        "Score".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "type": "integer",
            "minimum": 1,
            "maximum": 5
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(-1)]
    #[case(300)]
    fn out_of_range_is_rejected(#[case] value: i64) {
        assert!(matches!(Score::new(value), Err(CoreError::InvalidScore(v)) if v == value));
    }

    #[test]
    fn buckets_are_zero_based() {
        assert_eq!(Score::new(1).unwrap().bucket(), 0);
        assert_eq!(Score::new(5).unwrap().bucket(), 4);
    }

    #[test]
    fn parses_from_text() {
        let score: Score = " 4 ".parse().unwrap();
        assert_eq!(score.get(), 4);
        assert!("four".parse::<Score>().is_err());
    }

    #[test]
    fn deserialization_enforces_range() {
        assert!(serde_json::from_str::<Score>("3").is_ok());
        assert!(serde_json::from_str::<Score>("7").is_err());
        assert_eq!(serde_json::to_string(&Score::new(2).unwrap()).unwrap(), "2");
    }
}
