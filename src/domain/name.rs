//! PersonName value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for person names.
///
/// This ensures that names are validated at construction time. The check is
/// deliberately shallow: only the first character is inspected, everything
/// after it is stored verbatim.
///
/// # Example
///
/// ```
/// use person_record::domain::PersonName;
///
/// let name = PersonName::new("TranBaoNgoc").unwrap();
/// assert_eq!(name.as_str(), "TranBaoNgoc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName, validating the first character.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty
    /// - The first character must be an uppercase Unicode letter
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is invalid.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();

        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidName(name));
        }

        Ok(Self(name))
    }

    /// Validate the first character.
    fn is_valid(name: &str) -> bool {
        match name.chars().next() {
            Some(first) => first.is_uppercase() && first.is_alphabetic(),
            None => false,
        }
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PersonName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PersonName::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
