//! WMO weather code mapping

use serde::{Deserialize, Serialize};

/// Cloud cover (percent) at or below which a dry day counts as clear.
pub const SUNNY_CLOUD_THRESHOLD: i32 = 35;

/// Cloud cover assumed when the series has no value.
pub const DEFAULT_CLOUD_COVER: i32 = 50;

/// Icon category shown next to a day's menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Mist,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
}

impl WeatherCondition {
    /// Map a WMO code to a condition, biased towards sunny.
    ///
    /// Precipitation and fog keep their category. Anything else is decided by
    /// cloud cover alone.
    pub fn from_wmo(code: i32, cloud_cover: Option<i32>) -> Self {
        match code {
            45 | 48 => WeatherCondition::Mist,
            51..=57 => WeatherCondition::Drizzle,
            61..=67 | 80..=82 => WeatherCondition::Rain,
            71..=77 | 85..=86 => WeatherCondition::Snow,
            95 | 96 | 99 => WeatherCondition::Thunderstorm,
            _ => {
                let cover = cloud_cover.unwrap_or(DEFAULT_CLOUD_COVER).clamp(0, 100);
                if cover <= SUNNY_CLOUD_THRESHOLD {
                    WeatherCondition::Clear
                } else {
                    WeatherCondition::Clouds
                }
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Clouds => "Clouds",
            WeatherCondition::Mist => "Mist",
            WeatherCondition::Drizzle => "Drizzle",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Thunderstorm => "Thunderstorm",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Short lowercase description of a WMO code.
pub fn describe_wmo(code: i32) -> &'static str {
    match code {
        0 => "clear sky",
        1 => "mainly clear",
        2 => "partly cloudy",
        3 => "overcast",
        45 | 48 => "fog",
        51 | 53 | 55 => "drizzle",
        56 | 57 => "freezing drizzle",
        61 | 63 | 65 => "rain",
        66 | 67 => "freezing rain",
        71 | 73 | 75 => "snow",
        77 => "snow grains",
        80..=82 => "rain showers",
        85 | 86 => "snow showers",
        95 => "thunderstorm",
        96 | 99 => "thunderstorm with hail",
        _ => "cloudy",
    }
}
