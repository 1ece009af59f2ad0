//! Meal catalog domain.
//!
//! - [`entities::MealRecord`] — a catalog entry as stored
//! - [`entities::NewMeal`] — meal fields without an identity (create/update)
//! - [`filter::FilterOptions`] — distinct protein labels offered to the user
//! - [`filter::MealFilter`] — exact-match field filter for catalog listings
//! - [`category`] — diagnostic-only label normalization

pub mod category;
pub mod entities;
pub mod filter;
