//! Weather forecast adapters
//!
//! [`OpenMeteoForecastProvider`] (feature `weather`) calls the Open-Meteo
//! API. [`StubForecastProvider`] never leaves the process and is used when
//! the HTTP client is compiled out.

#[cfg(feature = "weather")]
mod open_meteo;
mod settings;

#[cfg(feature = "weather")]
pub use open_meteo::{ForecastError, OpenMeteoForecastProvider, parse_forecast};
pub use settings::WeatherSettings;

use async_trait::async_trait;
use chrono::NaiveDate;
use mealplan_application::ForecastProvider;
use mealplan_domain::WeatherDay;
use mealplan_domain::weather::stub_forecast;

/// Forecast provider that always reports placeholder days
#[derive(Debug, Clone, Copy, Default)]
pub struct StubForecastProvider;

#[async_trait]
impl ForecastProvider for StubForecastProvider {
    async fn daily_forecast(&self, days: u32, start: NaiveDate) -> Vec<WeatherDay> {
        stub_forecast(start, days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealplan_domain::WeatherCondition;

    #[tokio::test]
    async fn test_stub_provider_returns_requested_days() {
        let start = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
        let days = StubForecastProvider.daily_forecast(3, start).await;

        assert_eq!(days.len(), 3);
        assert_eq!(days[2].date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert!(days.iter().all(|d| d.temp_f == 72));
        assert!(days.iter().all(|d| d.condition == WeatherCondition::Clear));
        assert_eq!(days[0].description, "clear sky");
    }
}
