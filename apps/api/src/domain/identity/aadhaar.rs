use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::errors::ValidationError;

const AADHAAR_LEN: usize = 12;

// Verhoeff dihedral group multiplication table
const D: [[u8; 10]; 10] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 2, 3, 4, 0, 6, 7, 8, 9, 5],
    [2, 3, 4, 0, 1, 7, 8, 9, 5, 6],
    [3, 4, 0, 1, 2, 8, 9, 5, 6, 7],
    [4, 0, 1, 2, 3, 9, 5, 6, 7, 8],
    [5, 9, 8, 7, 6, 0, 4, 3, 2, 1],
    [6, 5, 9, 8, 7, 1, 0, 4, 3, 2],
    [7, 6, 5, 9, 8, 2, 1, 0, 4, 3],
    [8, 7, 6, 5, 9, 3, 2, 1, 0, 4],
    [9, 8, 7, 6, 5, 4, 3, 2, 1, 0],
];

// Verhoeff position permutation table
const P: [[u8; 10]; 8] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9],
    [1, 5, 7, 6, 2, 8, 3, 0, 9, 4],
    [5, 8, 0, 3, 7, 9, 6, 1, 4, 2],
    [8, 9, 1, 6, 0, 4, 3, 5, 2, 7],
    [9, 4, 5, 3, 1, 2, 6, 8, 7, 0],
    [4, 2, 8, 6, 5, 7, 3, 9, 0, 1],
    [2, 7, 9, 3, 8, 0, 6, 4, 1, 5],
    [7, 0, 4, 6, 9, 1, 3, 2, 5, 8],
];

const INV: [u8; 10] = [0, 4, 3, 2, 1, 5, 6, 7, 8, 9];

/// Aadhaar number value object
///
/// # Invariants
/// - Exactly 12 ASCII digits (surrounding whitespace is trimmed)
///
/// Construction only checks the format. The Verhoeff checksum is verified
/// separately through [`Aadhaar::has_valid_checksum`], since registration
/// forms accept any well-formed number.
///
/// # Example
/// ```
/// use league_portal_api::domain::identity::Aadhaar;
///
/// let aadhaar = Aadhaar::parse(" 234123412346 ").expect("12 digits");
/// assert_eq!(aadhaar.as_str(), "234123412346");
/// assert!(aadhaar.has_valid_checksum());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Aadhaar(String);

impl Aadhaar {
    /// Parses a 12-digit Aadhaar number
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.len() == AADHAAR_LEN && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Aadhaar(trimmed.to_string()))
        } else {
            Err(ValidationError::AadhaarFormat)
        }
    }

    /// Parses an optional form field, treating blank input as absent
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, ValidationError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => Self::parse(value).map(Some),
        }
    }

    /// Returns true if the number passes the Verhoeff checksum
    pub fn has_valid_checksum(&self) -> bool {
        verhoeff_valid(&self.0)
    }

    /// Returns the digits as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Aadhaar {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Aadhaar::parse(&value)
    }
}

impl From<Aadhaar> for String {
    fn from(value: Aadhaar) -> Self {
        value.0
    }
}

impl fmt::Display for Aadhaar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validates a digit string with the Verhoeff algorithm
///
/// Returns false for empty input or any non-digit character.
pub fn verhoeff_valid(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut checksum = 0u8;
    for (i, b) in digits.bytes().rev().enumerate() {
        if !b.is_ascii_digit() {
            return false;
        }
        let digit = (b - b'0') as usize;
        checksum = D[checksum as usize][P[i % 8][digit] as usize];
    }

    checksum == 0
}

/// Computes the Verhoeff check digit to append to `digits`
///
/// Returns `None` if `digits` contains a non-digit character.
pub fn verhoeff_check_digit(digits: &str) -> Option<u8> {
    let mut checksum = 0u8;
    for (i, b) in digits.bytes().rev().enumerate() {
        if !b.is_ascii_digit() {
            return None;
        }
        let digit = (b - b'0') as usize;
        checksum = D[checksum as usize][P[(i + 1) % 8][digit] as usize];
    }

    Some(INV[checksum as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_twelve_digits() {
        assert!(Aadhaar::parse("123456789012").is_ok());
    }

    #[test]
    fn parse_trims_whitespace() {
        let aadhaar = Aadhaar::parse("  499918623330\n").unwrap();
        assert_eq!(aadhaar.as_str(), "499918623330");
    }

    #[test]
    fn parse_rejects_short_and_long() {
        assert_eq!(Aadhaar::parse("12345"), Err(ValidationError::AadhaarFormat));
        assert_eq!(
            Aadhaar::parse("1234567890123"),
            Err(ValidationError::AadhaarFormat)
        );
    }

    #[test]
    fn parse_rejects_non_digits() {
        assert!(Aadhaar::parse("12345678901a").is_err());
        assert!(Aadhaar::parse("1234 5678 9012").is_err());
    }

    #[test]
    fn parse_optional_blank_is_none() {
        assert_eq!(Aadhaar::parse_optional(None), Ok(None));
        assert_eq!(Aadhaar::parse_optional(Some("   ")), Ok(None));
        assert!(Aadhaar::parse_optional(Some("99")).is_err());
    }

    #[test]
    fn verhoeff_known_values() {
        assert!(verhoeff_valid("2363"));
        assert!(verhoeff_valid("234123412346"));
        assert!(verhoeff_valid("499918623330"));
        assert!(!verhoeff_valid("123456789012"));
        assert!(!verhoeff_valid(""));
        assert!(!verhoeff_valid("23a3"));
    }

    #[test]
    fn check_digit_round_trips() {
        assert_eq!(verhoeff_check_digit("236"), Some(3));
        assert_eq!(verhoeff_check_digit("23412341234"), Some(6));
        assert_eq!(verhoeff_check_digit("12345678901"), Some(0));
        assert_eq!(verhoeff_check_digit("1x"), None);
    }

    #[test]
    fn single_digit_typo_is_detected() {
        // 234123412346 is valid; change one digit
        assert!(!verhoeff_valid("234123412356"));
    }

    #[test]
    fn adjacent_transposition_is_detected() {
        assert!(!verhoeff_valid("243123412346"));
    }

    #[test]
    fn checksum_on_value_object() {
        assert!(Aadhaar::parse("234123412346").unwrap().has_valid_checksum());
        assert!(!Aadhaar::parse("123456789012").unwrap().has_valid_checksum());
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<Aadhaar, _> = serde_json::from_str("\"234123412346\"");
        assert!(ok.is_ok());
        let bad: Result<Aadhaar, _> = serde_json::from_str("\"12\"");
        assert!(bad.is_err());
    }
}
