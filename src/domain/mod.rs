//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the validated person fields:
//! name, birth year, email address, and phone number. These value objects
//! provide validation at construction time and prevent invalid data from
//! being represented in the system.

pub mod birth_year;
pub mod email;
pub mod errors;
pub mod name;
pub mod phone;

pub use birth_year::{BirthYear, MINIMUM_YEAR};
pub use email::EmailAddress;
pub use errors::{ValidationError, ValidationResult};
pub use name::PersonName;
pub use phone::{PhoneInput, PhoneNumber};
