//! Filter options offered to menu requests and field filters over the catalog

use super::entities::MealRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Distinct labels a user can pick quotas from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Trimmed, non-empty, sorted, distinct protein labels
    pub proteins: Vec<String>,
    /// Always empty; kept so existing clients keep deserializing
    pub cuisines: Vec<String>,
}

impl FilterOptions {
    /// Build options from raw catalog labels.
    pub fn from_labels<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let proteins: BTreeSet<String> = labels
            .into_iter()
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            proteins: proteins.into_iter().collect(),
            cuisines: Vec::new(),
        }
    }
}

/// Value that disables a field filter
pub const MATCH_ALL: &str = "all";

/// Exact-match filter over catalog fields.
///
/// Unset fields, empty values and [`MATCH_ALL`] match every meal. Set
/// fields compare exactly against the stored value, without trimming or
/// case folding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealFilter {
    pub protein: Option<String>,
    pub cuisine: Option<String>,
    pub cook_time: Option<String>,
    pub cook_method: Option<String>,
}

impl MealFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_protein(mut self, protein: impl Into<String>) -> Self {
        self.protein = Some(protein.into());
        self
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = Some(cuisine.into());
        self
    }

    pub fn with_cook_time(mut self, cook_time: impl Into<String>) -> Self {
        self.cook_time = Some(cook_time.into());
        self
    }

    pub fn with_cook_method(mut self, cook_method: impl Into<String>) -> Self {
        self.cook_method = Some(cook_method.into());
        self
    }

    /// True when no field restricts the result
    pub fn is_unrestricted(&self) -> bool {
        [&self.protein, &self.cuisine, &self.cook_time, &self.cook_method]
            .into_iter()
            .all(|wanted| active(wanted).is_none())
    }

    pub fn matches(&self, meal: &MealRecord) -> bool {
        field_matches(&self.protein, &meal.protein)
            && field_matches(&self.cuisine, &meal.cuisine)
            && field_matches(&self.cook_time, &meal.cook_time)
            && field_matches(&self.cook_method, &meal.cook_method)
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty() && *v != MATCH_ALL)
}

fn field_matches(wanted: &Option<String>, actual: &str) -> bool {
    active(wanted).is_none_or(|wanted| wanted == actual)
}
