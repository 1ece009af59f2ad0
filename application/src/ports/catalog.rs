//! Meal catalog ports
//!
//! [`MealCatalog`] is the read-only view menu generation depends on.
//! [`MealRepository`] adds the CRUD operations used by catalog management.

use async_trait::async_trait;
use mealplan_domain::{MealId, MealRecord, NewMeal};
use std::collections::BTreeSet;
use thiserror::Error;

/// Errors raised by catalog adapters
///
/// Menu generation never handles these; they propagate to the boundary.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Catalog data is corrupt: {0}")]
    Corrupt(String),

    #[error("Catalog write failed: {0}")]
    WriteFailed(String),
}

/// Read-only access to the meal catalog
///
/// Adapters may apply their own read-consistency policy; callers must not
/// assume two reads see the same contents.
#[async_trait]
pub trait MealCatalog: Send + Sync {
    /// All meals, in no particular order.
    async fn fetch_all(&self) -> Result<Vec<MealRecord>, CatalogError>;

    /// Meals whose protein label equals `category` exactly.
    async fn fetch_by_category_exact(
        &self,
        category: &str,
    ) -> Result<Vec<MealRecord>, CatalogError>;

    /// Distinct raw protein labels, sorted.
    ///
    /// Default implementation derives the labels from [`fetch_all`](Self::fetch_all).
    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        let labels: BTreeSet<String> = self
            .fetch_all()
            .await?
            .into_iter()
            .map(|meal| meal.protein)
            .collect();
        Ok(labels.into_iter().collect())
    }
}

/// Catalog with write access
#[async_trait]
pub trait MealRepository: MealCatalog {
    async fn get(&self, id: MealId) -> Result<Option<MealRecord>, CatalogError>;

    /// Store a new meal under a freshly allocated id.
    async fn add(&self, meal: NewMeal) -> Result<MealRecord, CatalogError>;

    /// Replace every field of an existing meal. Returns `None` if `id` is unknown.
    async fn update(&self, id: MealId, meal: NewMeal)
    -> Result<Option<MealRecord>, CatalogError>;

    /// Remove a meal. Returns whether it existed. Its id is never handed out again.
    async fn delete(&self, id: MealId) -> Result<bool, CatalogError>;
}
