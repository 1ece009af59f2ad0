//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_menu;
pub mod get_forecast;
pub mod manage_meals;
