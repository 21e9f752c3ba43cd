//! Data model for the person record.

pub mod person;

pub use person::Person;
