//! Application layer for mealplan
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::MenuConfig;
pub use ports::{
    catalog::{CatalogError, MealCatalog, MealRepository},
    forecast::ForecastProvider,
    progress::{MenuProgressNotifier, NoMenuProgress},
};
pub use use_cases::generate_menu::{GenerateMenuError, GenerateMenuInput, GenerateMenuUseCase};
pub use use_cases::get_forecast::{
    DEFAULT_FORECAST_DAYS, GetForecastInput, GetForecastUseCase, parse_timezone, today_in,
};
pub use use_cases::manage_meals::{ManageMealsError, ManageMealsUseCase};
