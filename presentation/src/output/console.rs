//! Console output formatter for menus, meals and forecasts

use crate::output::formatter::OutputFormatter;
use crate::output::health::HealthReport;
use colored::{ColoredString, Colorize};
use mealplan_domain::core::string::{or_dash, truncate_label};
use mealplan_domain::{FilterOptions, MealRecord, MenuResult, WeatherCondition, WeatherDay};

const NAME_WIDTH: usize = 32;
const LABEL_WIDTH: usize = 14;

/// Formats results as aligned tables for terminal display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a generated menu, one row per day
    pub fn format_menu(menu: &MenuResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Weekly Menu"));
        output.push('\n');

        if menu.is_empty() {
            output.push_str(&format!("\n{}\n", "No meals available in the catalog.".dimmed()));
            output.push_str(&Self::footer());
            return output;
        }

        output.push_str(&format!(
            "\n{}\n",
            Self::row(&["Day", "Meal", "Protein", "Cuisine", "Cook time"]).bold()
        ));
        for (day, meal) in menu.meals().iter().enumerate() {
            output.push_str(&format!(
                "{}\n",
                Self::row(&[
                    &format!("{}", day + 1),
                    &meal.name,
                    &meal.protein,
                    &meal.cuisine,
                    &meal.cook_time,
                ])
            ));
        }

        output.push_str(&format!(
            "\n{} {}\n",
            "Proteins:".cyan().bold(),
            menu.summary()
        ));
        output.push_str(&Self::footer());

        output
    }

    /// Format a catalog listing
    pub fn format_meals(meals: &[MealRecord]) -> String {
        if meals.is_empty() {
            return format!("{}\n", "The catalog is empty.".dimmed());
        }

        let mut output = format!(
            "{}\n",
            Self::row(&["ID", "Meal", "Protein", "Cuisine", "Cook time", "Method"]).bold()
        );
        for meal in meals {
            output.push_str(&format!(
                "{}\n",
                Self::row(&[
                    &meal.id.to_string(),
                    &meal.name,
                    &meal.protein,
                    &meal.cuisine,
                    &meal.cook_time,
                    &meal.cook_method,
                ])
            ));
        }
        output.push_str(&format!("\n{} meals\n", meals.len()).dimmed().to_string());
        output
    }

    /// Format a single meal as labelled fields
    pub fn format_meal(meal: &MealRecord) -> String {
        let fields = [
            ("ID", meal.id.to_string()),
            ("Name", meal.name.clone()),
            ("Protein", meal.protein.clone()),
            ("Cuisine", meal.cuisine.clone()),
            ("Cook time", meal.cook_time.clone()),
            ("Cook method", meal.cook_method.clone()),
            ("Source", meal.source.clone()),
        ];

        fields
            .iter()
            .map(|(label, value)| {
                format!(
                    "{} {}\n",
                    format!("{:<12}", format!("{}:", label)).cyan().bold(),
                    or_dash(value)
                )
            })
            .collect()
    }

    pub fn format_filters(filters: &FilterOptions) -> String {
        if filters.proteins.is_empty() {
            return format!("{}\n", "No protein categories in the catalog.".dimmed());
        }

        let mut output = format!("{}\n", "Proteins:".cyan().bold());
        for protein in &filters.proteins {
            output.push_str(&format!("  * {}\n", protein));
        }
        output
    }

    pub fn format_forecast(days: &[WeatherDay]) -> String {
        let mut output = format!(
            "{}\n",
            format!(
                "{:<16} {:>5}  {:<13} {}",
                "Date", "Temp", "Condition", "Description"
            )
            .bold()
        );
        for day in days {
            output.push_str(&format!(
                "{:<16} {:>5}  {} {}\n",
                day.date.format("%a %Y-%m-%d").to_string(),
                format!("{}°F", day.temp_f),
                Self::condition_label(day.condition),
                day.description
            ));
        }
        output
    }

    pub fn format_health(health: &HealthReport) -> String {
        format!(
            "{} {} ({} meals in {}) at {}\n",
            "Status:".cyan().bold(),
            health.status.green().bold(),
            health.meals,
            health.catalog,
            health.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )
    }

    fn condition_label(condition: WeatherCondition) -> ColoredString {
        let padded = format!("{:<13}", condition.as_str());
        match condition {
            WeatherCondition::Clear => padded.yellow(),
            WeatherCondition::Clouds | WeatherCondition::Mist => padded.white(),
            WeatherCondition::Drizzle | WeatherCondition::Rain => padded.blue(),
            WeatherCondition::Snow => padded.bright_white(),
            WeatherCondition::Thunderstorm => padded.magenta(),
        }
    }

    /// Lay out cells; the first column is narrow, the second holds names.
    fn row(cells: &[&str]) -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let width = match i {
                    0 => 4,
                    1 => NAME_WIDTH,
                    _ => LABEL_WIDTH,
                };
                let text = if i == 0 {
                    cell.to_string()
                } else {
                    truncate_label(or_dash(cell), width)
                };
                format!("{:<width$}", text, width = width)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_menu(&self, menu: &MenuResult) -> String {
        Self::format_menu(menu)
    }

    fn format_meals(&self, meals: &[MealRecord]) -> String {
        Self::format_meals(meals)
    }

    fn format_meal(&self, meal: &MealRecord) -> String {
        Self::format_meal(meal)
    }

    fn format_filters(&self, filters: &FilterOptions) -> String {
        Self::format_filters(filters)
    }

    fn format_forecast(&self, days: &[WeatherDay]) -> String {
        Self::format_forecast(days)
    }

    fn format_health(&self, health: &HealthReport) -> String {
        Self::format_health(health)
    }
}
