// src/config.rs

use std::{env, path::PathBuf};

use dotenvy::dotenv;
use thiserror::Error;

/// Errors raised while reading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    Invalid {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_dir: String,

    /// Fixed seed for the emissions perturbation. `None` draws from OS entropy.
    pub dataset_seed: Option<u64>,

    /// Optional JSON catalog replacing the built-in countries and questions.
    pub content_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            rust_log: "info".to_string(),
            log_dir: "logs".to_string(),
            dataset_seed: None,
            content_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let defaults = Self::default();

        let host = env::var("HOST").unwrap_or(defaults.host);

        let port = match env::var("PORT") {
            Ok(raw) => parse_var("PORT", "port number", raw)?,
            Err(_) => defaults.port,
        };

        let rust_log = env::var("RUST_LOG").unwrap_or(defaults.rust_log);

        let log_dir = env::var("LOG_DIR").unwrap_or(defaults.log_dir);

        let dataset_seed = env::var("DATASET_SEED")
            .ok()
            .map(|raw| parse_var("DATASET_SEED", "unsigned integer", raw))
            .transpose()?;

        let content_path = env::var("CONTENT_PATH").ok().map(PathBuf::from);

        Ok(Self {
            host,
            port,
            rust_log,
            log_dir,
            dataset_seed,
            content_path,
        })
    }
}

fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    expected: &'static str,
    raw: String,
) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { name, expected, value: raw })
}
