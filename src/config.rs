//! Configuration for the demonstration binary.
//!
//! This module handles loading configuration from environment variables,
//! with an optional `.env` file. Every variable is optional; the defaults
//! reproduce the fixed demonstration inputs.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default demonstration inputs.
const DEFAULT_NAME: &str = "TranBaoNgoc";
const DEFAULT_EMAIL: &str = "ngoc@ngoc.ngoc";
const DEFAULT_BIRTH_YEAR: i32 = 1900;
const DEFAULT_PHONE: &str = "+44444444444";

/// Runtime configuration for the demonstration run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level filter directive (default: "info")
    pub log_level: String,

    /// Name input for the demonstration sequence
    pub demo_name: String,

    /// Email input for the demonstration sequence
    pub demo_email: String,

    /// Birth year input for the demonstration sequence
    pub demo_birth_year: i32,

    /// Phone input for the demonstration sequence
    pub demo_phone: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging filter (default: "info")
    /// - `DEMO_NAME`: Name input (default: "TranBaoNgoc")
    /// - `DEMO_EMAIL`: Email input (default: "ngoc@ngoc.ngoc")
    /// - `DEMO_BIRTH_YEAR`: Birth year input (default: 1900)
    /// - `DEMO_PHONE`: Phone input (default: "+44444444444")
    pub fn from_env() -> ConfigResult<Self> {
        // Load a .env file if present, without failing when absent.
        let _ = dotenvy::dotenv();

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let demo_name = env::var("DEMO_NAME").unwrap_or_else(|_| DEFAULT_NAME.to_string());
        let demo_email = env::var("DEMO_EMAIL").unwrap_or_else(|_| DEFAULT_EMAIL.to_string());
        let demo_birth_year = Self::parse_env_i32("DEMO_BIRTH_YEAR", DEFAULT_BIRTH_YEAR)?;
        let demo_phone = env::var("DEMO_PHONE").unwrap_or_else(|_| DEFAULT_PHONE.to_string());

        Ok(Config {
            log_level,
            demo_name,
            demo_email,
            demo_birth_year,
            demo_phone,
        })
    }

    /// Parse an environment variable as i32 with a default value.
    fn parse_env_i32(var_name: &str, default: i32) -> ConfigResult<i32> {
        match env::var(var_name) {
            Ok(val) => val.parse::<i32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            demo_name: DEFAULT_NAME.to_string(),
            demo_email: DEFAULT_EMAIL.to_string(),
            demo_birth_year: DEFAULT_BIRTH_YEAR,
            demo_phone: DEFAULT_PHONE.to_string(),
        }
    }
}
