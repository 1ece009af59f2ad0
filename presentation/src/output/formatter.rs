//! Output formatter trait

use crate::output::health::HealthReport;
use mealplan_domain::{FilterOptions, MealRecord, MenuResult, WeatherDay};

/// Trait for rendering command results
pub trait OutputFormatter {
    fn format_menu(&self, menu: &MenuResult) -> String;

    fn format_meals(&self, meals: &[MealRecord]) -> String;

    fn format_meal(&self, meal: &MealRecord) -> String;

    fn format_filters(&self, filters: &FilterOptions) -> String;

    fn format_forecast(&self, days: &[WeatherDay]) -> String;

    fn format_health(&self, health: &HealthReport) -> String;
}
