//! Infrastructure layer for mealplan
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;
pub mod weather;

// Re-export commonly used types
pub use catalog::JsonFileCatalog;
pub use config::{
    ConfigLoader, ConfigValidationError, FileCatalogConfig, FileConfig, FileLoggingConfig,
    FileMenuConfig, FileOutputConfig, FileOutputFormat, FileWeatherConfig,
};
#[cfg(feature = "weather")]
pub use weather::{ForecastError, OpenMeteoForecastProvider};
pub use weather::{StubForecastProvider, WeatherSettings};
