//! Domain layer for mealplan
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Menu generation
//!
//! A menu request carries per-category quotas and a day count. Generation
//! honors quotas where the catalog allows, tops up with random unique meals,
//! and returns a shorter menu rather than failing when the catalog runs out.
//! See [`menu`] for the pipeline.
//!
//! ## Catalog
//!
//! [`MealRecord`] is a catalog entry. Its `protein` label is the category
//! quotas are matched against, by exact string equality.

pub mod config;
pub mod core;
pub mod meal;
pub mod menu;
pub mod weather;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use meal::{
    category::{normalize, similar_categories},
    entities::{MealId, MealRecord, NewMeal},
    filter::{FilterOptions, MATCH_ALL, MealFilter},
};
pub use menu::{
    DEFAULT_MENU_DAYS, MAX_QUOTA_TOTAL, MenuDraft, MenuPhase, MenuPlan, MenuResult, MenuSummary,
    QuotaRequest,
};
pub use weather::{TemperatureMode, WeatherCondition, WeatherDay};
