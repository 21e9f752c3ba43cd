//! PhoneNumber value object and its tagged input type.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum length of a `+`-prefixed phone string.
const MIN_TEXT_LEN: usize = 11;
/// Maximum length of a `+`-prefixed phone string.
const MAX_TEXT_LEN: usize = 12;
/// Smallest accepted numeric phone value (9 digits).
const MIN_NUMERIC: u64 = 100_000_000;
/// Largest accepted numeric phone value (10 digits).
const MAX_NUMERIC: u64 = 9_999_999_999;

/// Input to phone validation, tagged by form.
///
/// Phones arrive either as an international `+`-prefixed string or as a raw
/// national number. Each form has its own validation and normalization rule,
/// dispatched in [`PhoneNumber::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneInput {
    /// A `+`-prefixed string, stored verbatim when valid.
    Text(String),
    /// A national number, stored with a leading `0` when valid.
    Numeric(u64),
}

impl From<&str> for PhoneInput {
    fn from(s: &str) -> Self {
        PhoneInput::Text(s.to_string())
    }
}

impl From<String> for PhoneInput {
    fn from(s: String) -> Self {
        PhoneInput::Text(s)
    }
}

impl From<u64> for PhoneInput {
    fn from(n: u64) -> Self {
        PhoneInput::Numeric(n)
    }
}

/// A type-safe wrapper for normalized phone numbers.
///
/// # Example
///
/// ```
/// use person_record::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+44444444444").unwrap();
/// assert_eq!(phone.as_str(), "+44444444444");
///
/// let phone = PhoneNumber::new(912_345_678_u64).unwrap();
/// assert_eq!(phone.as_str(), "0912345678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating and normalizing the input.
    ///
    /// # Validation Rules
    ///
    /// - Text form: must start with `+` and be 11 to 12 characters long;
    ///   stored verbatim. Empty strings are rejected.
    /// - Numeric form: must be between 100000000 and 9999999999 inclusive;
    ///   stored as the decimal digits prefixed with `0`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the input is invalid.
    pub fn new(input: impl Into<PhoneInput>) -> Result<Self, ValidationError> {
        match input.into() {
            PhoneInput::Text(s) => {
                if !s.starts_with('+') || s.len() < MIN_TEXT_LEN || s.len() > MAX_TEXT_LEN {
                    return Err(ValidationError::InvalidPhone(s));
                }
                Ok(Self(s))
            }
            PhoneInput::Numeric(n) => {
                if !(MIN_NUMERIC..=MAX_NUMERIC).contains(&n) {
                    return Err(ValidationError::InvalidPhone(n.to_string()));
                }
                Ok(Self(format!("0{}", n)))
            }
        }
    }

    /// Whether a string is already in one of the normalized forms.
    ///
    /// Used when reading a phone back from serialized data, where the
    /// numeric form has already been flattened to a `0`-prefixed string.
    fn is_normalized(s: &str) -> bool {
        if let Some(digits) = s.strip_prefix('0') {
            let len_ok = (MIN_NUMERIC.to_string().len()..=MAX_NUMERIC.to_string().len())
                .contains(&digits.len());
            return len_ok && digits.chars().all(|c| c.is_ascii_digit());
        }
        s.starts_with('+') && (MIN_TEXT_LEN..=MAX_TEXT_LEN).contains(&s.len())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the phone number with only digits (no `+` prefix).
    pub fn digits_only(&self) -> String {
        self.0.chars().filter(|c| c.is_ascii_digit()).collect()
    }
}

// Serde support - serialize as the normalized string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from a normalized string
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if !PhoneNumber::is_normalized(&s) {
            return Err(serde::de::Error::custom(ValidationError::InvalidPhone(s)));
        }
        Ok(PhoneNumber(s))
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
