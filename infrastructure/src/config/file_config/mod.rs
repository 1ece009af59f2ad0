//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod catalog;
mod logging;
mod menu;
mod output;
mod weather;

pub use catalog::FileCatalogConfig;
pub use logging::FileLoggingConfig;
pub use menu::FileMenuConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use weather::FileWeatherConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("menu.default_days must be at least 1")]
    InvalidDefaultDays,

    #[error("weather.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("catalog.path cannot be empty")]
    EmptyCatalogPath,

    #[error("weather.{field} is out of range: {value}")]
    InvalidCoordinate { field: &'static str, value: f64 },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Meal catalog storage
    pub catalog: FileCatalogConfig,
    /// Menu generation defaults
    pub menu: FileMenuConfig,
    /// Forecast location and provider settings
    pub weather: FileWeatherConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Log file settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every problem found.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.catalog.path.as_os_str().is_empty() {
            issues.push(ConfigValidationError::EmptyCatalogPath);
        }
        if self.menu.default_days == 0 {
            issues.push(ConfigValidationError::InvalidDefaultDays);
        }
        if self.weather.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if !(-90.0..=90.0).contains(&self.weather.latitude) {
            issues.push(ConfigValidationError::InvalidCoordinate {
                field: "latitude",
                value: self.weather.latitude,
            });
        }
        if !(-180.0..=180.0).contains(&self.weather.longitude) {
            issues.push(ConfigValidationError::InvalidCoordinate {
                field: "longitude",
                value: self.weather.longitude,
            });
        }

        issues
    }
}
