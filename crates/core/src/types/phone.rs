//! Phone number type.
//!
//! Accounts are keyed by phone number, so the type validates shape once at
//! the edge and the rest of the code can rely on it.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Phone`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PhoneError {
    /// The input string is empty.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input has too few digits.
    #[error("phone number must have at least {min} digits")]
    TooShort {
        /// Minimum number of digits.
        min: usize,
    },
    /// The input has too many digits.
    #[error("phone number must have at most {max} digits")]
    TooLong {
        /// Maximum number of digits.
        max: usize,
    },
    /// The input contains a character that is not a digit.
    #[error("phone number contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// A phone number.
///
/// ## Constraints
///
/// - Optional leading `+` for an international prefix
/// - 7-15 digits (ITU-T E.164 upper bound)
/// - Digits only; no separators
///
/// Comparison is exact: `"+919876543210"` and `"9876543210"` are distinct
/// numbers as far as lookups are concerned.
///
/// ## Examples
///
/// ```
/// use recircuit_core::Phone;
///
/// assert!(Phone::parse("9876543210").is_ok());
/// assert!(Phone::parse("+919876543210").is_ok());
///
/// assert!(Phone::parse("").is_err());          // empty
/// assert!(Phone::parse("12345").is_err());     // too short
/// assert!(Phone::parse("98-76-54").is_err());  // separators
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    /// Minimum number of digits.
    pub const MIN_DIGITS: usize = 7;

    /// Maximum number of digits (E.164).
    pub const MAX_DIGITS: usize = 15;

    /// Parse a `Phone` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, contains non-digit
    /// characters (other than one leading `+`), or has a digit count
    /// outside 7-15.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        let digits = s.strip_prefix('+').unwrap_or(s);

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
            return Err(PhoneError::InvalidCharacter(bad));
        }

        if digits.len() < Self::MIN_DIGITS {
            return Err(PhoneError::TooShort {
                min: Self::MIN_DIGITS,
            });
        }

        if digits.len() > Self::MAX_DIGITS {
            return Err(PhoneError::TooLong {
                max: Self::MAX_DIGITS,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the phone number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Phone` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_prefixed_numbers() {
        assert_eq!(Phone::parse("9876543210").unwrap().as_str(), "9876543210");
        assert_eq!(
            Phone::parse("+919876543210").unwrap().as_str(),
            "+919876543210"
        );
    }

    #[test]
    fn rejects_bad_shapes() {
        assert!(matches!(Phone::parse(""), Err(PhoneError::Empty)));
        assert!(matches!(
            Phone::parse("123456"),
            Err(PhoneError::TooShort { .. })
        ));
        assert!(matches!(
            Phone::parse("1234567890123456"),
            Err(PhoneError::TooLong { .. })
        ));
        assert!(matches!(
            Phone::parse("98 76 54 32 10"),
            Err(PhoneError::InvalidCharacter(' '))
        ));
        assert!(matches!(
            Phone::parse("987654+3210"),
            Err(PhoneError::InvalidCharacter('+'))
        ));
    }

    #[test]
    fn comparison_is_exact() {
        let bare = Phone::parse("9876543210").unwrap();
        let prefixed = Phone::parse("+919876543210").unwrap();
        assert_ne!(bare, prefixed);
    }
}
