//! Weather configuration from TOML (`[weather]` section)

use mealplan_domain::TemperatureMode;
use serde::{Deserialize, Serialize};

/// Default forecast location: San Jose, CA
pub const DEFAULT_LATITUDE: f64 = 37.3382;
pub const DEFAULT_LONGITUDE: f64 = -121.8863;
pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Raw weather configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWeatherConfig {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone the provider reports local hours in
    pub timezone: String,
    /// `midday`, `max`, `min` or `mean`
    pub temp_mode: String,
    pub base_url: String,
    /// Request timeout for the forecast provider
    pub timeout_seconds: u64,
}

impl Default for FileWeatherConfig {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
            timezone: DEFAULT_TIMEZONE.to_string(),
            temp_mode: TemperatureMode::Midday.as_str().to_string(),
            base_url: DEFAULT_FORECAST_URL.to_string(),
            timeout_seconds: 10,
        }
    }
}

impl FileWeatherConfig {
    /// Parsed temperature mode; unknown values mean `max`.
    pub fn temperature_mode(&self) -> TemperatureMode {
        TemperatureMode::parse(&self.temp_mode)
    }
}
