//! Catalog management use case
//!
//! CRUD over the meal catalog plus the filter options offered to menu
//! requests.

use crate::ports::catalog::{CatalogError, MealRepository};
use mealplan_domain::{FilterOptions, MealFilter, MealId, MealRecord, NewMeal};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while managing the catalog
#[derive(Error, Debug)]
pub enum ManageMealsError {
    #[error("Meal {0} not found")]
    NotFound(MealId),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl ManageMealsError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, ManageMealsError::NotFound(_))
    }
}

/// Use case for reading and editing catalog entries
pub struct ManageMealsUseCase<R: MealRepository + 'static> {
    repository: Arc<R>,
}

impl<R: MealRepository + 'static> ManageMealsUseCase<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// All meals ordered by name, then id
    pub async fn list(&self) -> Result<Vec<MealRecord>, ManageMealsError> {
        let mut meals = self.repository.fetch_all().await?;
        sort_by_name(&mut meals);
        debug!("Listing {} meals", meals.len());
        Ok(meals)
    }

    /// Meals whose fields match `filter` exactly, ordered like [`list`](Self::list)
    pub async fn filter(&self, filter: &MealFilter) -> Result<Vec<MealRecord>, ManageMealsError> {
        let mut meals: Vec<MealRecord> = self
            .repository
            .fetch_all()
            .await?
            .into_iter()
            .filter(|meal| filter.matches(meal))
            .collect();
        sort_by_name(&mut meals);
        debug!("Filter {:?} matched {} meals", filter, meals.len());
        Ok(meals)
    }

    pub async fn get(&self, id: MealId) -> Result<MealRecord, ManageMealsError> {
        self.repository
            .get(id)
            .await?
            .ok_or(ManageMealsError::NotFound(id))
    }

    pub async fn add(&self, meal: NewMeal) -> Result<MealRecord, ManageMealsError> {
        let record = self.repository.add(meal).await?;
        info!(
            "Added meal {} '{}' (protein: '{}')",
            record.id, record.name, record.protein
        );
        Ok(record)
    }

    /// Replace every field of an existing meal
    pub async fn update(&self, id: MealId, meal: NewMeal) -> Result<MealRecord, ManageMealsError> {
        let record = self
            .repository
            .update(id, meal)
            .await?
            .ok_or(ManageMealsError::NotFound(id))?;
        info!("Updated meal {} '{}'", record.id, record.name);
        Ok(record)
    }

    /// Delete a meal. Deleting an unknown id is not an error.
    ///
    /// Returns whether a meal was removed.
    pub async fn delete(&self, id: MealId) -> Result<bool, ManageMealsError> {
        let removed = self.repository.delete(id).await?;
        if removed {
            info!("Deleted meal {}", id);
        } else {
            debug!("Delete of unknown meal {} ignored", id);
        }
        Ok(removed)
    }

    /// Distinct trimmed protein labels for building quota requests
    pub async fn filter_options(&self) -> Result<FilterOptions, ManageMealsError> {
        let labels = self.repository.categories().await?;
        Ok(FilterOptions::from_labels(labels.iter().map(String::as_str)))
    }
}

fn sort_by_name(meals: &mut [MealRecord]) {
    meals.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
}
