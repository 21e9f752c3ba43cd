//! BirthYear value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Earliest birth year accepted by validation.
pub const MINIMUM_YEAR: i32 = 1900;

/// A type-safe wrapper for birth years.
///
/// # Example
///
/// ```
/// use person_record::domain::BirthYear;
///
/// let year = BirthYear::new(1990).unwrap();
/// assert_eq!(year.value(), 1990);
/// assert_eq!(year.age_at(2026), 36);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthYear(i32);

impl BirthYear {
    /// Create a new BirthYear.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthdayYear` for years before 1900.
    pub fn new(year: i32) -> Result<Self, ValidationError> {
        if year < MINIMUM_YEAR {
            return Err(ValidationError::InvalidBirthdayYear(year));
        }
        Ok(Self(year))
    }

    /// Get the year as a plain integer.
    pub fn value(&self) -> i32 {
        self.0
    }

    /// Age in the given calendar year.
    pub fn age_at(&self, current_year: i32) -> i32 {
        current_year - self.0
    }
}

// Serde support - serialize as integer
impl Serialize for BirthYear {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from integer with validation
impl<'de> Deserialize<'de> for BirthYear {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let year = i32::deserialize(deserializer)?;
        BirthYear::new(year).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for BirthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
