//! Session configuration.
//!
//! Loaded from an optional YAML file, overridden by command-line flags, then validated into
//! a [ValidatedConfig] before the session starts.

use gamblesim_types::STARTING_COINS;
use serde::{Deserialize, Serialize};
use std::{path::Path, str::FromStr};
use thiserror::Error;
use tracing::Level;

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Largest starting balance. Keeps every credit the ledger can grant (the store's loan
/// included) from overflowing the balance.
pub const MAX_STARTING_COINS: u64 = i64::MAX as u64;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid log level: {value}")]
    InvalidLogLevel { value: String },
    #[error("{field} must be > 0 (got {value})")]
    InvalidNonZero { field: &'static str, value: u64 },
    #[error("{field} must be <= {max} (got {value})")]
    TooLarge {
        field: &'static str,
        value: u64,
        max: u64,
    },
    #[error("failed to read config {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
}

fn default_starting_coins() -> u64 {
    STARTING_COINS
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_show_logo() -> bool {
    true
}

/// Raw configuration as written in the YAML file.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_starting_coins")]
    pub starting_coins: u64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Fixed RNG seed; sessions with the same seed and input replay exactly.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_show_logo")]
    pub show_logo: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            starting_coins: default_starting_coins(),
            log_level: default_log_level(),
            seed: None,
            show_logo: default_show_logo(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedConfig {
    pub starting_coins: u64,
    pub log_level: Level,
    pub seed: Option<u64>,
    pub show_logo: bool,
}

impl Config {
    pub fn parse(raw: &str, path: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        Self::parse(&raw, &display)
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.starting_coins == 0 {
            return Err(ConfigError::InvalidNonZero {
                field: "starting_coins",
                value: 0,
            });
        }
        if self.starting_coins > MAX_STARTING_COINS {
            return Err(ConfigError::TooLarge {
                field: "starting_coins",
                value: self.starting_coins,
                max: MAX_STARTING_COINS,
            });
        }
        let log_level =
            Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLogLevel {
                value: self.log_level.clone(),
            })?;
        Ok(ValidatedConfig {
            starting_coins: self.starting_coins,
            log_level,
            seed: self.seed,
            show_logo: self.show_logo,
        })
    }
}
