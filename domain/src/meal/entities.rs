//! Meal entities

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of a catalog entry.
///
/// Ids are allocated by the catalog store and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealId(u64);

impl MealId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MealId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// A meal in the catalog (Entity)
///
/// `protein` is the category label used by quota selection. It is matched
/// by exact string equality, so `"Chicken"` and `"chicken "` are different
/// categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealRecord {
    pub id: MealId,
    pub name: String,
    pub protein: String,
    /// Not used by menu generation.
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub cook_time: String,
    #[serde(default)]
    pub cook_method: String,
    #[serde(default)]
    pub source: String,
}

impl MealRecord {
    /// Shorthand used by fixtures and seeders; the remaining labels are empty.
    pub fn new(id: impl Into<MealId>, name: impl Into<String>, protein: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            protein: protein.into(),
            cuisine: String::new(),
            cook_time: String::new(),
            cook_method: String::new(),
            source: String::new(),
        }
    }

    /// Check whether this meal belongs to `category` (exact match).
    pub fn is_in_category(&self, category: &str) -> bool {
        self.protein == category
    }
}

/// Meal fields without an identity, used to add or replace a catalog entry.
///
/// Missing fields deserialize to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewMeal {
    pub name: String,
    pub protein: String,
    pub cuisine: String,
    pub cook_time: String,
    pub cook_method: String,
    pub source: String,
}

impl NewMeal {
    pub fn new(name: impl Into<String>, protein: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            protein: protein.into(),
            ..Default::default()
        }
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    pub fn with_cook_time(mut self, cook_time: impl Into<String>) -> Self {
        self.cook_time = cook_time.into();
        self
    }

    pub fn with_cook_method(mut self, cook_method: impl Into<String>) -> Self {
        self.cook_method = cook_method.into();
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Attach an identity, producing the stored record.
    pub fn into_record(self, id: MealId) -> MealRecord {
        MealRecord {
            id,
            name: self.name,
            protein: self.protein,
            cuisine: self.cuisine,
            cook_time: self.cook_time,
            cook_method: self.cook_method,
            source: self.source,
        }
    }
}

impl From<MealRecord> for NewMeal {
    fn from(meal: MealRecord) -> Self {
        Self {
            name: meal.name,
            protein: meal.protein,
            cuisine: meal.cuisine,
            cook_time: meal.cook_time,
            cook_method: meal.cook_method,
            source: meal.source,
        }
    }
}
