//! person-record - Main entry point
//!
//! Runs the fixed demonstration sequence: build an empty record, apply the
//! four setters in order, and print the populated record. The first failure
//! is reported and stops the sequence.

use anyhow::Result;
use person_record::{Config, Person};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so it can supply the default log level.
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded");

    let mut person = Person::new();

    if let Err(e) = person.set_name(config.demo_name.clone()) {
        error!("set_name failed: {}", e);
        return Ok(());
    }
    info!(name = %config.demo_name, "name set");

    if let Err(e) = person.set_email(config.demo_email.clone()) {
        error!("set_email failed: {}", e);
        return Ok(());
    }
    info!(email = %config.demo_email, "email set");

    if let Err(e) = person.set_birthday_year(config.demo_birth_year) {
        error!("set_birthday_year failed: {}", e);
        return Ok(());
    }
    info!(year = config.demo_birth_year, "birthday year set");

    if let Err(e) = person.set_phone(config.demo_phone.as_str()) {
        error!("set_phone failed: {}", e);
        return Ok(());
    }
    info!(phone = %config.demo_phone, "phone set");

    println!("{}", person);
    println!("{}", serde_json::to_string_pretty(&person)?);

    Ok(())
}
