use std::path::{Path, PathBuf};

use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;

/// Configuration for the library console.
///
/// This struct holds pricing and presentation settings. All fields have
/// defaults, so an empty (versioned) file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Versions")]
pub struct Config {
    /// The price charged per rental day.
    daily_rate: u32,

    /// The currency symbol shown when asking for payment.
    currency: String,

    /// The `strftime` pattern used to print return dates.
    ///
    /// Dates are rendered in the local time zone.
    /// For example, '%-m/%-d/%Y' (6/3/2024) or '%Y-%m-%d' (2024-06-03).
    date_format: String,
}

/// Errors that can occur when loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        /// Path of the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        source: std::io::Error,
    },
    /// The file is not a valid configuration.
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        /// Path of the configuration file.
        path: PathBuf,
        /// The underlying TOML error.
        source: toml::de::Error,
    },
}

/// Error returned when a date format is not a valid `strftime` pattern.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid date format '{0}'")]
pub struct InvalidDateFormat(String);

impl Default for Config {
    fn default() -> Self {
        Self {
            daily_rate: default_daily_rate(),
            currency: default_currency(),
            date_format: default_date_format(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the price charged per rental day.
    #[must_use]
    pub const fn daily_rate(&self) -> u32 {
        self.daily_rate
    }

    /// Returns the currency symbol.
    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns the `strftime` pattern for return dates.
    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Overrides the price charged per rental day.
    #[must_use]
    pub fn with_daily_rate(mut self, daily_rate: u32) -> Self {
        self.daily_rate = daily_rate;
        self
    }
}

const fn default_daily_rate() -> u32 {
    5
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%-m/%-d/%Y".to_string()
}

fn validate_date_format(format: String) -> Result<String, InvalidDateFormat> {
    if StrftimeItems::new(&format).any(|item| item == Item::Error) {
        return Err(InvalidDateFormat(format));
    }
    Ok(format)
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_daily_rate")]
        daily_rate: u32,

        #[serde(default = "default_currency")]
        currency: String,

        #[serde(default = "default_date_format")]
        date_format: String,
    },
}

impl TryFrom<Versions> for Config {
    type Error = InvalidDateFormat;

    fn try_from(versions: Versions) -> Result<Self, Self::Error> {
        match versions {
            Versions::V1 {
                daily_rate,
                currency,
                date_format,
            } => Ok(Self {
                daily_rate,
                currency,
                date_format: validate_date_format(date_format)?,
            }),
        }
    }
}
