//! Runtime configuration read from the environment (and `.env`).

use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_OUTPUT_DIR: &str = ".";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be true or false, got {value:?}")]
    InvalidBool { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Directory downloads are written to
    pub output_dir: PathBuf,
    /// Replace an existing certificate with the same name
    pub overwrite: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            overwrite: true,
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read `CERTIFICATE_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let output_dir = lookup("CERTIFICATE_OUTPUT_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let overwrite = match lookup("CERTIFICATE_OVERWRITE") {
            Some(value) => parse_bool("CERTIFICATE_OVERWRITE", &value)?,
            None => defaults.overwrite,
        };

        Ok(Self {
            output_dir,
            overwrite,
        })
    }
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            name,
            value: value.to_string(),
        }),
    }
}
