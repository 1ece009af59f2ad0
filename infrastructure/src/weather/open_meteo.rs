//! Open-Meteo forecast adapter

use super::settings::WeatherSettings;
use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use mealplan_application::ForecastProvider;
use mealplan_domain::DomainError;
use mealplan_domain::WeatherDay;
use mealplan_domain::weather::{
    DailySeries, HourlySeries, TemperatureMode, assemble_forecast, stub_forecast,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Failures inside the provider. Never returned to callers; every one of
/// them turns into a placeholder forecast.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Open-Meteo returned status {0}")]
    Status(u16),

    #[error("Invalid forecast payload: {0}")]
    Payload(String),

    #[error(transparent)]
    Assembly(#[from] DomainError),
}

/// Forecast provider backed by `api.open-meteo.com`
pub struct OpenMeteoForecastProvider {
    client: reqwest::Client,
    settings: WeatherSettings,
}

impl OpenMeteoForecastProvider {
    pub fn new(settings: WeatherSettings) -> Result<Self, ForecastError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("mealplan/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, settings })
    }

    pub fn settings(&self) -> &WeatherSettings {
        &self.settings
    }

    /// Request URL for `days` days from `start`, temperatures in Fahrenheit.
    pub fn forecast_url(&self, days: u32, start: NaiveDate) -> String {
        let end = start
            .checked_add_days(Days::new(u64::from(days.saturating_sub(1))))
            .unwrap_or(start);
        format!(
            "{}?latitude={:.6}&longitude={:.6}\
             &daily={},weathercode\
             &hourly=weathercode,cloudcover,temperature_2m\
             &temperature_unit=fahrenheit\
             &timezone={}\
             &start_date={}&end_date={}",
            self.settings.base_url,
            self.settings.latitude,
            self.settings.longitude,
            self.settings.temp_mode.daily_field(),
            encode_timezone(&self.settings.timezone),
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d"),
        )
    }

    async fn fetch(&self, days: u32, start: NaiveDate) -> Result<Vec<WeatherDay>, ForecastError> {
        let url = self.forecast_url(days, start);
        info!(
            "Forecast: lat={}, lon={}, tz={}, temp_mode={}, start={}, days={}",
            self.settings.latitude,
            self.settings.longitude,
            self.settings.timezone,
            self.settings.temp_mode.as_str(),
            start,
            days
        );
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ForecastError::Status(status.as_u16()));
        }

        let body: Value = response.json().await?;
        let (daily, hourly) = parse_forecast(&body, self.settings.temp_mode)?;
        let forecast = assemble_forecast(start, days, self.settings.temp_mode, &daily, &hourly)?;

        for day in &forecast {
            debug!(
                "WX {}: {}°F, {} ({})",
                day.date, day.temp_f, day.condition, day.description
            );
        }
        Ok(forecast)
    }
}

#[async_trait]
impl ForecastProvider for OpenMeteoForecastProvider {
    async fn daily_forecast(&self, days: u32, start: NaiveDate) -> Vec<WeatherDay> {
        match self.fetch(days, start).await {
            Ok(forecast) => forecast,
            Err(e) => {
                warn!("Forecast unavailable, using placeholder days: {}", e);
                stub_forecast(start, days)
            }
        }
    }
}

/// Extract the daily and hourly series from an Open-Meteo response body.
///
/// Missing series come back empty; entries that are not numbers become
/// `None`. Only a body that is not a JSON object is an error.
pub fn parse_forecast(
    body: &Value,
    mode: TemperatureMode,
) -> Result<(DailySeries, HourlySeries), ForecastError> {
    if !body.is_object() {
        return Err(ForecastError::Payload("expected a JSON object".to_string()));
    }

    let daily = &body["daily"];
    let hourly = &body["hourly"];

    let daily = DailySeries {
        time: strings(&daily["time"]),
        temperature: floats(&daily[mode.daily_field()]),
        weathercode: ints(&daily["weathercode"]),
    };
    let hourly = HourlySeries {
        time: strings(&hourly["time"]),
        weathercode: ints(&hourly["weathercode"]),
        cloudcover: ints(&hourly["cloudcover"]),
        temperature: floats(&hourly["temperature_2m"]),
    };

    Ok((daily, hourly))
}

fn array(value: &Value) -> &[Value] {
    value.as_array().map(Vec::as_slice).unwrap_or(&[])
}

fn strings(value: &Value) -> Vec<String> {
    array(value)
        .iter()
        .map(|v| v.as_str().unwrap_or_default().to_string())
        .collect()
}

fn floats(value: &Value) -> Vec<Option<f64>> {
    array(value).iter().map(Value::as_f64).collect()
}

fn ints(value: &Value) -> Vec<Option<i32>> {
    array(value)
        .iter()
        .map(|v| v.as_f64().map(|n| n.round() as i32))
        .collect()
}

fn encode_timezone(tz: &str) -> String {
    tz.replace('/', "%2F").replace(' ', "%20")
}
