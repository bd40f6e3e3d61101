//! Optional TOML settings shared by the demo binaries.
//!
//! Every field has a default, so a missing file or a partial file is fine:
//!
//! ```toml
//! [logging]
//! level = "warn"
//!
//! [theater]
//! volume = 5
//! movie = "Inception"
//!
//! [bank]
//! initial_balance = 100.0
//! pin = "1234"
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];
pub const MAX_VOLUME: u8 = 10;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub theater: TheaterSettings,
    pub bank: BankSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingSettings {
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TheaterSettings {
    pub volume: u8,
    pub movie: String,
}

impl Default for TheaterSettings {
    fn default() -> Self {
        Self {
            volume: 5,
            movie: "Inception".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BankSettings {
    pub initial_balance: f64,
    pub pin: String,
}

impl Default for BankSettings {
    fn default() -> Self {
        Self {
            initial_balance: 100.0,
            pin: "1234".to_string(),
        }
    }
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Loads `path` when given, otherwise falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::invalid_value(
                "logging.level",
                format!("'{}' is not one of {}", self.logging.level, LOG_LEVELS.join(", ")),
            ));
        }
        if self.theater.volume > MAX_VOLUME {
            return Err(ConfigError::invalid_value(
                "theater.volume",
                format!("must be between 0 and {MAX_VOLUME}"),
            ));
        }
        if self.theater.movie.trim().is_empty() {
            return Err(ConfigError::invalid_value("theater.movie", "cannot be empty"));
        }
        if self.bank.pin.is_empty() {
            return Err(ConfigError::invalid_value("bank.pin", "cannot be empty"));
        }
        if !self.bank.initial_balance.is_finite() || self.bank.initial_balance < 0.0 {
            return Err(ConfigError::invalid_value(
                "bank.initial_balance",
                "must be a finite, non-negative amount",
            ));
        }
        Ok(())
    }
}
