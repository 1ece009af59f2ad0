//! Output formatting for command results

pub mod console;
pub mod formatter;
pub mod health;
pub mod json;

use formatter::OutputFormatter;
use mealplan_domain::OutputFormat;

/// Formatter for the chosen output format
pub fn formatter_for(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Table => Box::new(console::ConsoleFormatter),
        OutputFormat::Json => Box::new(json::JsonFormatter),
    }
}
