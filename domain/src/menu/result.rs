//! Generated menu value objects

use crate::meal::entities::{MealId, MealRecord};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A generated menu: one meal per day, no repeated ids (Value Object)
///
/// Serializes as a plain JSON array of meals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuResult {
    meals: Vec<MealRecord>,
}

impl MenuResult {
    /// Wrap an already selected sequence.
    ///
    /// Generation builds results through [`MenuDraft::finalize`](crate::menu::MenuDraft::finalize),
    /// which guarantees unique ids; other callers must keep that property.
    pub fn new(meals: Vec<MealRecord>) -> Self {
        Self { meals }
    }

    pub fn meals(&self) -> &[MealRecord] {
        &self.meals
    }

    pub fn into_meals(self) -> Vec<MealRecord> {
        self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Check that no two meals share an id.
    pub fn has_unique_ids(&self) -> bool {
        let mut seen = HashSet::<MealId>::with_capacity(self.meals.len());
        self.meals.iter().all(|meal| seen.insert(meal.id))
    }

    /// Count meals per protein category.
    pub fn summary(&self) -> MenuSummary {
        let mut counts = BTreeMap::new();
        for meal in &self.meals {
            *counts.entry(meal.protein.clone()).or_insert(0) += 1;
        }
        MenuSummary { counts }
    }
}

impl IntoIterator for MenuResult {
    type Item = MealRecord;
    type IntoIter = std::vec::IntoIter<MealRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.meals.into_iter()
    }
}

/// Per-category counts of a generated menu
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuSummary {
    pub counts: BTreeMap<String, usize>,
}

impl MenuSummary {
    pub fn count_for(&self, category: &str) -> usize {
        self.counts.get(category).copied().unwrap_or(0)
    }
}

impl std::fmt::Display for MenuSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .counts
            .iter()
            .map(|(category, count)| format!("{}: {}", category, count))
            .collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
