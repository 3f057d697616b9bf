//! VIN normalization and ISO 3779 check-digit verification.
//!
//! The check digit is the 9th character of a VIN. Every character is
//! transliterated to a number, multiplied by a positional weight and summed;
//! the sum modulo 11 is the expected check digit, with a remainder of 10
//! written as `X`.
//!
//! # Examples
//!
//! ```
//! use vinscout_core::{ValidationError, validate};
//!
//! let vin = validate(" wvwma63b1xe042415 ").unwrap();
//! assert_eq!(vin.as_str(), "WVWMA63B1XE042415");
//!
//! assert_eq!(
//!     validate("WVWMA63B2XE042415"),
//!     Err(ValidationError::InvalidCheckDigit { expected: '1', found: '2' })
//! );
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Number of characters in a VIN.
pub const VIN_LENGTH: usize = 17;

/// Zero-based index of the check digit.
pub const CHECK_DIGIT_POSITION: usize = 8;

/// Letters never used in a VIN (confusable with `1`, `0`, `0`).
const RESERVED_LETTERS: [char; 3] = ['I', 'O', 'Q'];

/// Positional weights. The check digit slot carries weight 0.
const WEIGHTS: [u32; VIN_LENGTH] = [8, 7, 6, 5, 4, 3, 2, 10, 0, 9, 8, 7, 6, 5, 4, 3, 2];

/// Check character for each remainder mod 11.
const CHECK_CHARACTERS: [char; 11] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'X'];

/// A normalized VIN whose shape and check digit have been verified.
///
/// The only ways to obtain a `Vin` are [`validate`], [`Vin::parse`] and
/// deserialization, all of which run the full check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vin(String);

impl Vin {
    /// Normalizes and validates `candidate`. Same as [`validate`].
    pub fn parse(candidate: &str) -> Result<Self, ValidationError> {
        validate(candidate)
    }

    /// Returns the normalized VIN.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the check digit character (position 9).
    pub fn check_digit(&self) -> char {
        // Validation only admits ASCII, so byte and char positions coincide.
        char::from(self.0.as_bytes()[CHECK_DIGIT_POSITION])
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Vin {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.0
    }
}

/// Validates a candidate VIN and returns it in normalized form.
///
/// The candidate is trimmed and uppercased first, so callers do not need to
/// pre-normalize user input. Checks run in order: length, reserved letters,
/// check digit.
pub fn validate(candidate: &str) -> Result<Vin, ValidationError> {
    let normalized = candidate.trim().to_uppercase();

    let length = normalized.chars().count();
    if length != VIN_LENGTH {
        return Err(ValidationError::InvalidLength { length });
    }

    if let Some((position, character)) = normalized
        .chars()
        .enumerate()
        .find(|(_, c)| RESERVED_LETTERS.contains(c))
    {
        return Err(ValidationError::IllegalCharacter {
            character,
            position,
        });
    }

    let expected = check_digit(&normalized)?;
    let Some(found) = normalized.chars().nth(CHECK_DIGIT_POSITION) else {
        return Err(ValidationError::InvalidLength { length });
    };

    if expected != found {
        return Err(ValidationError::InvalidCheckDigit { expected, found });
    }

    Ok(Vin(normalized))
}

/// Computes the expected check digit for a 17-character, uppercase VIN.
///
/// The character currently at position 9 is transliterated like every other
/// character but contributes nothing to the sum.
pub fn check_digit(vin: &str) -> Result<char, ValidationError> {
    let length = vin.chars().count();
    if length != VIN_LENGTH {
        return Err(ValidationError::InvalidLength { length });
    }

    let mut sum = 0;
    for ((position, character), weight) in vin.chars().enumerate().zip(WEIGHTS) {
        let value = transliterate(character).ok_or(ValidationError::IllegalCharacter {
            character,
            position,
        })?;
        sum += value * weight;
    }

    Ok(CHECK_CHARACTERS[(sum % 11) as usize])
}

/// Maps a VIN character to its numeric value.
const fn transliterate(character: char) -> Option<u32> {
    let value = match character {
        '0'..='9' => character as u32 - '0' as u32,
        'A' | 'J' => 1,
        'B' | 'K' | 'S' => 2,
        'C' | 'L' | 'T' => 3,
        'D' | 'M' | 'U' => 4,
        'E' | 'N' | 'V' => 5,
        'F' | 'W' => 6,
        'G' | 'P' | 'X' => 7,
        'H' | 'Y' => 8,
        'R' | 'Z' => 9,
        _ => return None,
    };
    Some(value)
}
