use serde::{Deserialize, Serialize};

use crate::domain::errors::ValidationError;

/// Youngest age accepted for squad players and session participants
pub const PLAYER_MIN_AGE: u32 = 12;

const MAX_PLAUSIBLE_AGE: f64 = 130.0;

/// Age as submitted by a form or CSV cell: either a JSON number or text
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AgeInput {
    Number(f64),
    Text(String),
}

impl AgeInput {
    /// Returns the age in whole years, or `None` if the input is not a
    /// plausible whole number
    pub fn whole_years(&self) -> Option<u32> {
        let value = match self {
            AgeInput::Number(n) => *n,
            AgeInput::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        if !value.is_finite() || value.fract() != 0.0 || !(0.0..=MAX_PLAUSIBLE_AGE).contains(&value) {
            return None;
        }
        Some(value as u32)
    }
}

impl From<&str> for AgeInput {
    fn from(value: &str) -> Self {
        AgeInput::Text(value.to_string())
    }
}

/// Age in whole years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Age(u32);

impl Age {
    /// Parses an age that must be at least `min` years
    ///
    /// # Example
    /// ```
    /// use league_portal_api::domain::player::{Age, AgeInput};
    ///
    /// let age = Age::at_least(Some(&AgeInput::from("23")), 12).unwrap();
    /// assert_eq!(age.years(), 23);
    /// assert!(Age::at_least(Some(&AgeInput::Number(11.0)), 12).is_err());
    /// ```
    pub fn at_least(input: Option<&AgeInput>, min: u32) -> Result<Self, ValidationError> {
        input
            .and_then(AgeInput::whole_years)
            .filter(|years| *years >= min)
            .map(Age)
            .ok_or(ValidationError::AgeBelowMinimum { min })
    }

    /// Parses an age that must fall within `min..=max` years
    pub fn between(input: Option<&AgeInput>, min: u32, max: u32) -> Result<Self, ValidationError> {
        input
            .and_then(AgeInput::whole_years)
            .filter(|years| (min..=max).contains(years))
            .map(Age)
            .ok_or(ValidationError::AgeOutOfRange { min, max })
    }

    /// Wraps a stored age without validation
    pub fn from_years(years: u32) -> Self {
        Age(years)
    }

    /// Returns the age in years
    pub fn years(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_years_from_text_and_number() {
        assert_eq!(AgeInput::from(" 23 ").whole_years(), Some(23));
        assert_eq!(AgeInput::Number(19.0).whole_years(), Some(19));
    }

    #[test]
    fn fractional_or_garbage_is_rejected() {
        assert_eq!(AgeInput::from("23.5").whole_years(), None);
        assert_eq!(AgeInput::from("abc").whole_years(), None);
        assert_eq!(AgeInput::from("").whole_years(), None);
        assert_eq!(AgeInput::Number(-3.0).whole_years(), None);
        assert_eq!(AgeInput::from("1e9").whole_years(), None);
    }

    #[test]
    fn at_least_enforces_minimum() {
        assert!(Age::at_least(Some(&AgeInput::from("12")), PLAYER_MIN_AGE).is_ok());
        assert_eq!(
            Age::at_least(Some(&AgeInput::from("11")), PLAYER_MIN_AGE),
            Err(ValidationError::AgeBelowMinimum { min: 12 })
        );
        assert!(Age::at_least(None, PLAYER_MIN_AGE).is_err());
    }

    #[test]
    fn between_is_inclusive() {
        assert!(Age::between(Some(&AgeInput::from("16")), 16, 40).is_ok());
        assert!(Age::between(Some(&AgeInput::from("40")), 16, 40).is_ok());
        assert!(Age::between(Some(&AgeInput::from("15")), 16, 40).is_err());
        assert!(Age::between(Some(&AgeInput::from("41")), 16, 40).is_err());
    }

    #[test]
    fn deserializes_number_or_string() {
        let n: AgeInput = serde_json::from_str("21").unwrap();
        let s: AgeInput = serde_json::from_str("\"21\"").unwrap();
        assert_eq!(n.whole_years(), Some(21));
        assert_eq!(s.whole_years(), Some(21));
    }
}
