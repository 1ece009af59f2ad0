//! On-disk catalog document

use mealplan_domain::{MealId, MealRecord, NewMeal};
use serde::{Deserialize, Serialize};

pub const CATALOG_SCHEMA_VERSION: u32 = 1;

/// The whole catalog as persisted
///
/// `next_id` only ever grows, so a deleted meal's id is never handed out
/// again, even across restarts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default = "first_id")]
    pub next_id: u64,
    #[serde(default)]
    pub meals: Vec<MealRecord>,
}

fn default_schema_version() -> u32 {
    CATALOG_SCHEMA_VERSION
}

fn first_id() -> u64 {
    1
}

impl Default for CatalogDocument {
    fn default() -> Self {
        Self {
            schema_version: CATALOG_SCHEMA_VERSION,
            next_id: first_id(),
            meals: Vec::new(),
        }
    }
}

impl CatalogDocument {
    /// Repair a freshly loaded document.
    ///
    /// Hand-edited files may carry a `nextId` at or below an existing id.
    pub fn normalized(mut self) -> Self {
        let max_id = self.meals.iter().map(|m| m.id.value()).max().unwrap_or(0);
        self.next_id = self.next_id.max(max_id + 1).max(1);
        self.meals.sort_by_key(|m| m.id);
        self
    }

    pub fn get(&self, id: MealId) -> Option<&MealRecord> {
        self.meals.iter().find(|m| m.id == id)
    }

    pub fn insert(&mut self, meal: NewMeal) -> MealRecord {
        let record = meal.into_record(MealId::new(self.next_id));
        self.next_id += 1;
        self.meals.push(record.clone());
        record
    }

    pub fn replace(&mut self, id: MealId, meal: NewMeal) -> Option<MealRecord> {
        let slot = self.meals.iter_mut().find(|m| m.id == id)?;
        *slot = meal.into_record(id);
        Some(slot.clone())
    }

    pub fn remove(&mut self, id: MealId) -> bool {
        let before = self.meals.len();
        self.meals.retain(|m| m.id != id);
        self.meals.len() != before
    }

    pub fn by_category(&self, category: &str) -> Vec<MealRecord> {
        self.meals
            .iter()
            .filter(|m| m.is_in_category(category))
            .cloned()
            .collect()
    }
}
