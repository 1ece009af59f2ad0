//! Get Forecast use case

use crate::ports::forecast::ForecastProvider;
use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;
use mealplan_domain::WeatherDay;
use mealplan_domain::weather::clamp_forecast_days;
use std::sync::Arc;
use tracing::{info, warn};

/// Days forecast when the caller does not ask for a specific count
pub const DEFAULT_FORECAST_DAYS: i64 = 7;

/// Input for the GetForecast use case
#[derive(Debug, Clone, Default)]
pub struct GetForecastInput {
    pub days: Option<i64>,
    pub start: Option<NaiveDate>,
}

impl GetForecastInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_days(mut self, days: i64) -> Self {
        self.days = Some(days);
        self
    }

    pub fn with_start(mut self, start: NaiveDate) -> Self {
        self.start = Some(start);
        self
    }

    /// Clamp the day count and fill in the start date.
    fn resolve(&self, today: NaiveDate) -> (u32, NaiveDate) {
        let days = clamp_forecast_days(self.days.unwrap_or(DEFAULT_FORECAST_DAYS));
        (days, self.start.unwrap_or(today))
    }
}

/// Parse an IANA zone name; unknown names fall back to the system zone.
pub fn parse_timezone(name: &str) -> Option<Tz> {
    match name.trim().parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(_) => {
            warn!("Unknown timezone '{}', using the system zone", name);
            None
        }
    }
}

/// Calendar date of `now` in `zone`, or in the system zone when unset.
pub fn today_in(zone: Option<Tz>, now: DateTime<Utc>) -> NaiveDate {
    match zone {
        Some(tz) => now.with_timezone(&tz).date_naive(),
        None => now.with_timezone(&Local).date_naive(),
    }
}

/// Use case for fetching the daily forecast
pub struct GetForecastUseCase<F: ForecastProvider + 'static> {
    provider: Arc<F>,
    timezone: Option<Tz>,
}

impl<F: ForecastProvider + 'static> GetForecastUseCase<F> {
    pub fn new(provider: Arc<F>) -> Self {
        Self {
            provider,
            timezone: None,
        }
    }

    /// Resolve "today" in the forecast location's zone instead of the
    /// system zone.
    pub fn with_timezone(mut self, name: &str) -> Self {
        self.timezone = parse_timezone(name);
        self
    }

    /// Always returns the clamped number of days; provider failures surface
    /// as placeholder days, never as errors.
    pub async fn execute(&self, input: GetForecastInput) -> Vec<WeatherDay> {
        let (days, start) = input.resolve(today_in(self.timezone, Utc::now()));
        info!("Fetching {} day forecast from {}", days, start);
        self.provider.daily_forecast(days, start).await
    }
}
