//! JSON output

use crate::output::formatter::OutputFormatter;
use crate::output::health::HealthReport;
use mealplan_domain::{FilterOptions, MealRecord, MenuResult, WeatherDay};
use serde::Serialize;

/// Formats results as pretty-printed JSON using the catalog's wire names
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_menu(&self, menu: &MenuResult) -> String {
        Self::to_json(menu)
    }

    fn format_meals(&self, meals: &[MealRecord]) -> String {
        Self::to_json(meals)
    }

    fn format_meal(&self, meal: &MealRecord) -> String {
        Self::to_json(meal)
    }

    fn format_filters(&self, filters: &FilterOptions) -> String {
        Self::to_json(filters)
    }

    fn format_forecast(&self, days: &[WeatherDay]) -> String {
        Self::to_json(days)
    }

    fn format_health(&self, health: &HealthReport) -> String {
        Self::to_json(health)
    }
}
