//! Configuration file loading for mealplan
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `MEALPLAN_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./mealplan.toml` or `./.mealplan.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/mealplan/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCatalogConfig, FileConfig, FileLoggingConfig, FileMenuConfig,
    FileOutputConfig, FileOutputFormat, FileWeatherConfig,
};
pub use loader::ConfigLoader;
