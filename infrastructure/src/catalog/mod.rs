//! Meal catalog adapters
//!
//! [`JsonFileCatalog`] keeps the catalog in a single JSON document and
//! implements both [`MealCatalog`](mealplan_application::MealCatalog) and
//! [`MealRepository`](mealplan_application::MealRepository).

mod document;
mod json_file;

pub use document::{CATALOG_SCHEMA_VERSION, CatalogDocument};
pub use json_file::JsonFileCatalog;
