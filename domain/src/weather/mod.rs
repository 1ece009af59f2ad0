//! Weather forecast domain.
//!
//! Pure mapping from forecast series to [`WeatherDay`] values. Fetching the
//! series is an infrastructure concern.

pub mod condition;
pub mod forecast;

pub use condition::{WeatherCondition, describe_wmo};
pub use forecast::{
    DailySeries, HourlySeries, MAX_FORECAST_DAYS, MiddayPick, TemperatureMode, WeatherDay,
    assemble_forecast, clamp_forecast_days, pick_sunniest_midday, stub_forecast,
};
