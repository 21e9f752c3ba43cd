//! person-record - A validated in-memory person record.
//!
//! This library holds a single [`Person`] record with four validated fields
//! (name, birth year, email, phone) and one derived field (age). Each field
//! has a setter that validates its input before assignment and returns a
//! named failure otherwise.
//!
//! # Architecture
//!
//! - **domain**: Type-safe value objects validated at construction
//! - **models**: The `Person` record and its setters
//! - **clock**: Calendar-year source, injectable for deterministic tests
//! - **error**: Crate-level error types
//! - **config**: Configuration for the demonstration binary

pub mod clock;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use domain::{
    BirthYear, EmailAddress, PersonName, PhoneInput, PhoneNumber, ValidationError,
};
pub use error::ConfigError;
pub use models::Person;
