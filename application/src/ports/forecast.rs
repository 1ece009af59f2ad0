//! Weather forecast port

use async_trait::async_trait;
use chrono::NaiveDate;
use mealplan_domain::WeatherDay;

/// Source of daily forecasts
///
/// Implementations always return exactly `days` entries starting at `start`,
/// substituting placeholder days when the upstream service fails. Callers
/// pass an already clamped day count.
#[async_trait]
pub trait ForecastProvider: Send + Sync {
    async fn daily_forecast(&self, days: u32, start: NaiveDate) -> Vec<WeatherDay>;
}
