//! Forecast provider settings

use crate::config::FileWeatherConfig;
use mealplan_domain::TemperatureMode;
use std::time::Duration;

/// Resolved settings for a forecast provider
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSettings {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub temp_mode: TemperatureMode,
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self::from(&FileWeatherConfig::default())
    }
}

impl From<&FileWeatherConfig> for WeatherSettings {
    fn from(config: &FileWeatherConfig) -> Self {
        Self {
            latitude: config.latitude,
            longitude: config.longitude,
            timezone: config.timezone.trim().to_string(),
            temp_mode: config.temperature_mode(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.timeout_seconds.max(1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_config() {
        let mut config = FileWeatherConfig::default();
        config.base_url = "http://localhost:8080/v1/forecast/".to_string();
        config.temp_mode = "min".to_string();
        config.timeout_seconds = 0;

        let settings = WeatherSettings::from(&config);
        assert_eq!(settings.base_url, "http://localhost:8080/v1/forecast");
        assert_eq!(settings.temp_mode, TemperatureMode::Min);
        assert_eq!(settings.timeout, Duration::from_secs(1));
        assert_eq!(settings.timezone, "America/Los_Angeles");
    }
}
