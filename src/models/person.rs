//! Person record holding the validated fields.

use crate::clock::{Clock, SystemClock};
use crate::domain::{
    BirthYear, EmailAddress, PersonName, PhoneInput, PhoneNumber, ValidationResult,
};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// An in-memory record of validated personal fields.
///
/// The record starts empty; each field is populated through its setter,
/// which validates the input before assignment. Setters may be called in
/// any order and may be called again, in which case the new input is
/// re-validated and silently replaces the old value.
///
/// Age is derived, not settable: a successful [`set_birthday_year`] stores
/// `current year - birth year` as of that call. It is not recomputed
/// afterwards, so it reflects the year of assignment.
///
/// [`set_birthday_year`]: Person::set_birthday_year
///
/// # Example
///
/// ```
/// use person_record::Person;
///
/// let mut person = Person::new();
/// person.set_name("TranBaoNgoc").unwrap();
/// person.set_email("ngoc@ngoc.ngoc").unwrap();
/// assert_eq!(person.name().unwrap().as_str(), "TranBaoNgoc");
/// ```
#[derive(Clone, Serialize)]
pub struct Person {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<PersonName>,

    #[serde(skip_serializing_if = "Option::is_none")]
    birthday_year: Option<BirthYear>,

    #[serde(skip_serializing_if = "Option::is_none")]
    age: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<EmailAddress>,

    #[serde(skip_serializing_if = "Option::is_none")]
    phone: Option<PhoneNumber>,

    #[serde(skip)]
    clock: Arc<dyn Clock>,
}

impl Person {
    /// Create an empty record using the system wall clock for age derivation.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create an empty record with an injected clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            name: None,
            birthday_year: None,
            age: None,
            email: None,
            phone: None,
            clock,
        }
    }

    /// Validate and store the name.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidName`](crate::domain::ValidationError::InvalidName) if the first character is
    /// not an uppercase letter, or the input is empty. The record is left
    /// unchanged on failure.
    pub fn set_name(&mut self, input: impl Into<String>) -> ValidationResult<()> {
        self.name = Some(PersonName::new(input)?);
        Ok(())
    }

    /// Validate and store the birthday year, deriving age as a side effect.
    ///
    /// On success the record also stores `age = current year - input`,
    /// read from the injected clock at call time.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidBirthdayYear`](crate::domain::ValidationError::InvalidBirthdayYear) for years before
    /// 1900. The record is left unchanged on failure.
    pub fn set_birthday_year(&mut self, input: i32) -> ValidationResult<()> {
        let year = BirthYear::new(input)?;
        self.birthday_year = Some(year);
        self.age = Some(year.age_at(self.clock.current_year()));
        Ok(())
    }

    /// Validate and store the email address.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEmail`](crate::domain::ValidationError::InvalidEmail) if the input does not
    /// match the accepted pattern. The record is left unchanged on failure.
    pub fn set_email(&mut self, input: impl Into<String>) -> ValidationResult<()> {
        self.email = Some(EmailAddress::new(input)?);
        Ok(())
    }

    /// Validate, normalize, and store the phone number.
    ///
    /// Accepts either input form via [`PhoneInput`]: a `+`-prefixed string
    /// (stored verbatim) or a national number (stored with a leading `0`).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPhone`](crate::domain::ValidationError::InvalidPhone) for malformed or
    /// out-of-range input. The record is left unchanged on failure.
    pub fn set_phone(&mut self, input: impl Into<PhoneInput>) -> ValidationResult<()> {
        self.phone = Some(PhoneNumber::new(input)?);
        Ok(())
    }

    /// The stored name, if set.
    pub fn name(&self) -> Option<&PersonName> {
        self.name.as_ref()
    }

    /// The stored birthday year, if set.
    pub fn birthday_year(&self) -> Option<BirthYear> {
        self.birthday_year
    }

    /// The derived age, if the birthday year has been set.
    pub fn age(&self) -> Option<i32> {
        self.age
    }

    /// The stored email address, if set.
    pub fn email(&self) -> Option<&EmailAddress> {
        self.email.as_ref()
    }

    /// The stored phone number, if set.
    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }
}

impl Default for Person {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Person")
            .field("name", &self.name)
            .field("birthday_year", &self.birthday_year)
            .field("age", &self.age)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .finish()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn opt(field: Option<&dyn fmt::Display>) -> String {
            field.map_or_else(|| "<unset>".to_string(), |v| v.to_string())
        }

        write!(
            f,
            "name={} birthday_year={} age={} email={} phone={}",
            opt(self.name.as_ref().map(|v| v as &dyn fmt::Display)),
            opt(self.birthday_year.as_ref().map(|v| v as &dyn fmt::Display)),
            opt(self.age.as_ref().map(|v| v as &dyn fmt::Display)),
            opt(self.email.as_ref().map(|v| v as &dyn fmt::Display)),
            opt(self.phone.as_ref().map(|v| v as &dyn fmt::Display)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::ValidationError;

    fn person_in(year: i32) -> Person {
        Person::with_clock(Arc::new(FixedClock(year)))
    }

    #[test]
    fn test_person_starts_empty() {
        let person = Person::new();
        assert!(person.name().is_none());
        assert!(person.birthday_year().is_none());
        assert!(person.age().is_none());
        assert!(person.email().is_none());
        assert!(person.phone().is_none());
    }

    #[test]
    fn test_set_name_stores_verbatim() {
        let mut person = Person::new();
        person.set_name("TranBaoNgoc").unwrap();
        assert_eq!(person.name().unwrap().as_str(), "TranBaoNgoc");
    }

    #[test]
    fn test_set_name_failure_leaves_record_unchanged() {
        let mut person = Person::new();
        person.set_name("Alice").unwrap();
        let err = person.set_name("bob").unwrap_err();
        assert_eq!(err, ValidationError::InvalidName("bob".to_string()));
        assert_eq!(person.name().unwrap().as_str(), "Alice");
    }

    #[test]
    fn test_set_birthday_year_derives_age() {
        let mut person = person_in(2026);
        person.set_birthday_year(1990).unwrap();
        assert_eq!(person.birthday_year().unwrap().value(), 1990);
        assert_eq!(person.age(), Some(36));
    }

    #[test]
    fn test_set_birthday_year_rejects_pre_1900() {
        let mut person = person_in(2026);
        let err = person.set_birthday_year(1899).unwrap_err();
        assert_eq!(err, ValidationError::InvalidBirthdayYear(1899));
        assert!(person.birthday_year().is_none());
        assert!(person.age().is_none());
    }

    #[test]
    fn test_age_is_captured_at_assignment_time() {
        // Age reflects the clock at the moment of the set, nothing else.
        let mut person = person_in(2020);
        person.set_birthday_year(1900).unwrap();
        assert_eq!(person.age(), Some(120));
    }

    #[test]
    fn test_setters_overwrite_on_repeat_call() {
        let mut person = person_in(2026);
        person.set_birthday_year(1990).unwrap();
        person.set_birthday_year(2000).unwrap();
        assert_eq!(person.birthday_year().unwrap().value(), 2000);
        assert_eq!(person.age(), Some(26));
    }

    #[test]
    fn test_set_phone_both_forms() {
        let mut person = Person::new();
        person.set_phone("+44444444444").unwrap();
        assert_eq!(person.phone().unwrap().as_str(), "+44444444444");

        person.set_phone(912_345_678_u64).unwrap();
        assert_eq!(person.phone().unwrap().as_str(), "0912345678");
    }

    #[test]
    fn test_display_reports_unset_fields() {
        let mut person = person_in(2026);
        person.set_name("Alice").unwrap();
        let text = person.to_string();
        assert!(text.contains("name=Alice"));
        assert!(text.contains("email=<unset>"));
    }

    #[test]
    fn test_serialization_skips_unset_fields() {
        let mut person = person_in(2026);
        person.set_name("Alice").unwrap();
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Alice" }));
    }

    #[test]
    fn test_serialization_full_record() {
        let mut person = person_in(2026);
        person.set_name("TranBaoNgoc").unwrap();
        person.set_email("ngoc@ngoc.ngoc").unwrap();
        person.set_birthday_year(1900).unwrap();
        person.set_phone("+44444444444").unwrap();
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "TranBaoNgoc",
                "birthday_year": 1900,
                "age": 126,
                "email": "ngoc@ngoc.ngoc",
                "phone": "+44444444444",
            })
        );
    }
}
