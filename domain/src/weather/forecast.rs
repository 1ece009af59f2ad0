//! Daily forecast assembly

use crate::core::error::DomainError;
use crate::weather::condition::{DEFAULT_CLOUD_COVER, WeatherCondition, describe_wmo};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Longest forecast the provider is asked for.
pub const MAX_FORECAST_DAYS: u32 = 14;

/// Temperature used for placeholder days.
pub const STUB_TEMP_F: i32 = 72;

/// Local hours considered "midday" when picking a day's icon.
const MIDDAY_HOURS: [&str; 5] = ["11", "12", "13", "14", "15"];

/// One day of forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherDay {
    pub date: NaiveDate,
    pub temp_f: i32,
    pub condition: WeatherCondition,
    pub description: String,
}

impl WeatherDay {
    /// Placeholder used when the provider is unreachable or returns too little.
    pub fn stub(date: NaiveDate) -> Self {
        Self {
            date,
            temp_f: STUB_TEMP_F,
            condition: WeatherCondition::Clear,
            description: describe_wmo(0).to_string(),
        }
    }
}

/// Which temperature a day reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemperatureMode {
    /// Temperature of the sunniest midday hour, daily max as fallback
    #[default]
    Midday,
    Max,
    Min,
    Mean,
}

impl TemperatureMode {
    /// Lenient parse: unknown values fall back to [`TemperatureMode::Max`].
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "" | "midday" | "daytime" => TemperatureMode::Midday,
            "min" => TemperatureMode::Min,
            "mean" | "avg" | "average" => TemperatureMode::Mean,
            _ => TemperatureMode::Max,
        }
    }

    /// Open-Meteo daily variable holding this mode's temperature.
    pub fn daily_field(&self) -> &'static str {
        match self {
            TemperatureMode::Min => "temperature_2m_min",
            TemperatureMode::Mean => "temperature_2m_mean",
            TemperatureMode::Midday | TemperatureMode::Max => "temperature_2m_max",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TemperatureMode::Midday => "midday",
            TemperatureMode::Max => "max",
            TemperatureMode::Min => "min",
            TemperatureMode::Mean => "mean",
        }
    }
}

/// Daily series aligned by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    /// ISO dates (`YYYY-MM-DD`)
    pub time: Vec<String>,
    pub temperature: Vec<Option<f64>>,
    pub weathercode: Vec<Option<i32>>,
}

/// Hourly series aligned by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlySeries {
    /// Local timestamps (`YYYY-MM-DDTHH:MM`)
    pub time: Vec<String>,
    pub weathercode: Vec<Option<i32>>,
    pub cloudcover: Vec<Option<i32>>,
    pub temperature: Vec<Option<f64>>,
}

/// The midday hour chosen for a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddayPick {
    pub hour: String,
    pub code: i32,
    pub cloud_cover: i32,
    pub temp_f: Option<i32>,
}

/// Clamp a requested forecast length to `1..=14`.
pub fn clamp_forecast_days(days: i64) -> u32 {
    // clamp keeps the value inside u32 range
    days.clamp(1, i64::from(MAX_FORECAST_DAYS)) as u32
}

/// `days` placeholder days starting at `start`.
pub fn stub_forecast(start: NaiveDate, days: u32) -> Vec<WeatherDay> {
    (0..days)
        .map(|offset| WeatherDay::stub(offset_date(start, u64::from(offset))))
        .collect()
}

/// Pick the hour between 11:00 and 15:00 with the lowest cloud cover.
///
/// Cloud cover and temperature are only trusted when their series line up
/// with the timestamps. Returns `None` when there are no hourly codes or no
/// midday hours for `date`.
pub fn pick_sunniest_midday(date: NaiveDate, hourly: &HourlySeries) -> Option<MiddayPick> {
    if hourly.time.is_empty() || hourly.weathercode.is_empty() {
        return None;
    }

    let prefix = format!("{}T", date.format("%Y-%m-%d"));
    let clouds_aligned = hourly.cloudcover.len() == hourly.time.len();
    let temps_aligned = hourly.temperature.len() == hourly.time.len();

    let mut best: Option<(usize, i32)> = None;
    for (i, stamp) in hourly.time.iter().enumerate() {
        let is_midday = stamp.starts_with(&prefix)
            && stamp
                .get(11..13)
                .is_some_and(|hour| MIDDAY_HOURS.contains(&hour));
        if !is_midday {
            continue;
        }
        let cover = if clouds_aligned {
            hourly.cloudcover[i].unwrap_or(DEFAULT_CLOUD_COVER)
        } else {
            DEFAULT_CLOUD_COVER
        };
        if best.is_none_or(|(_, best_cover)| cover < best_cover) {
            best = Some((i, cover));
        }
    }

    let (index, cloud_cover) = best?;
    let temp_f = if temps_aligned {
        hourly.temperature[index].map(|t| t.round() as i32)
    } else {
        None
    };

    Some(MiddayPick {
        hour: hourly.time[index].clone(),
        code: hourly.weathercode.get(index).copied().flatten().unwrap_or(0),
        cloud_cover,
        temp_f,
    })
}

/// Turn provider series into exactly `days` forecast days.
///
/// Days the series does not cover are padded with placeholders dated from
/// `start`. A malformed date aborts the whole assembly so the caller can fall
/// back to a stub forecast.
pub fn assemble_forecast(
    start: NaiveDate,
    days: u32,
    mode: TemperatureMode,
    daily: &DailySeries,
    hourly: &HourlySeries,
) -> Result<Vec<WeatherDay>, DomainError> {
    let wanted = days as usize;
    let available = daily
        .time
        .len()
        .min(daily.temperature.len())
        .min(daily.weathercode.len());

    let mut out = Vec::with_capacity(wanted);
    for i in 0..available.min(wanted) {
        let date = NaiveDate::parse_from_str(&daily.time[i], "%Y-%m-%d").map_err(|e| {
            DomainError::InvalidForecast(format!("bad date '{}': {}", daily.time[i], e))
        })?;

        let daily_temp = daily.temperature[i].map(|t| t.round() as i32).unwrap_or(0);
        let pick = pick_sunniest_midday(date, hourly);
        let code = pick
            .as_ref()
            .map(|p| p.code)
            .unwrap_or_else(|| daily.weathercode[i].unwrap_or(0));

        let temp_f = match (mode, pick.as_ref().and_then(|p| p.temp_f)) {
            (TemperatureMode::Midday, Some(midday)) => midday,
            _ => daily_temp,
        };

        out.push(WeatherDay {
            date,
            temp_f,
            condition: WeatherCondition::from_wmo(code, pick.as_ref().map(|p| p.cloud_cover)),
            description: describe_wmo(code).to_string(),
        });
    }

    while out.len() < wanted {
        out.push(WeatherDay::stub(offset_date(start, out.len() as u64)));
    }

    Ok(out)
}

fn offset_date(start: NaiveDate, offset: u64) -> NaiveDate {
    start.checked_add_days(Days::new(offset)).unwrap_or(start)
}
