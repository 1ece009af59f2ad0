//! Quota request and validation

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Upper bound on the sum of positive quotas, independent of the day count.
pub const MAX_QUOTA_TOTAL: i64 = 7;

/// Day count used when a request does not specify one.
pub const DEFAULT_MENU_DAYS: u32 = 7;

/// A caller's menu request (Value Object)
///
/// Quotas map a protein category to a requested count. Non-positive counts
/// are accepted and ignored. Categories are kept in a `BTreeMap`, which makes
/// runs reproducible under a fixed seed; the processing order is still not a
/// contract of generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaRequest {
    quotas: BTreeMap<String, i64>,
    days: Option<i64>,
}

impl QuotaRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a request from an optional quota mapping and an optional day count.
    pub fn from_parts<I>(quotas: Option<I>, days: Option<i64>) -> Self
    where
        I: IntoIterator<Item = (String, i64)>,
    {
        Self {
            quotas: quotas.map(|q| q.into_iter().collect()).unwrap_or_default(),
            days,
        }
    }

    /// Set the count for a category, replacing any previous value.
    pub fn with_quota(mut self, category: impl Into<String>, count: i64) -> Self {
        self.quotas.insert(category.into(), count);
        self
    }

    pub fn with_days(mut self, days: i64) -> Self {
        self.days = Some(days);
        self
    }

    pub fn quotas(&self) -> &BTreeMap<String, i64> {
        &self.quotas
    }

    pub fn days(&self) -> Option<i64> {
        self.days
    }

    /// Sum of all positive counts.
    pub fn positive_total(&self) -> i64 {
        self.quotas
            .values()
            .filter(|count| **count > 0)
            .fold(0i64, |acc, count| acc.saturating_add(*count))
    }

    /// Check the request and resolve it into a [`MenuPlan`].
    ///
    /// The quota cap is checked first, then the day count. An absent day
    /// count becomes `default_days`. Day counts below 1 are rejected; large
    /// values pass through and are bounded later by the catalog size.
    pub fn validate(&self, default_days: u32) -> Result<MenuPlan, DomainError> {
        let total = self.positive_total();
        if total > MAX_QUOTA_TOTAL {
            return Err(DomainError::QuotaExceeded {
                total,
                cap: MAX_QUOTA_TOTAL,
            });
        }

        let days = self.days.unwrap_or(i64::from(default_days));
        if days < 1 {
            return Err(DomainError::InvalidDayCount(days));
        }

        let quotas = self
            .quotas
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(category, count)| {
                (category.clone(), usize::try_from(*count).unwrap_or(usize::MAX))
            })
            .collect();

        Ok(MenuPlan {
            quotas,
            target_days: usize::try_from(days).unwrap_or(usize::MAX),
            quota_total: total,
        })
    }
}

/// A validated request: positive quotas only and a concrete target length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuPlan {
    quotas: Vec<(String, usize)>,
    target_days: usize,
    quota_total: i64,
}

impl MenuPlan {
    /// Categories with a positive count.
    pub fn quotas(&self) -> &[(String, usize)] {
        &self.quotas
    }

    pub fn target_days(&self) -> usize {
        self.target_days
    }

    pub fn quota_total(&self) -> i64 {
        self.quota_total
    }

    pub fn has_quotas(&self) -> bool {
        !self.quotas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_total_ignores_zero_and_negative() {
        let request = QuotaRequest::new()
            .with_quota("Chicken", 3)
            .with_quota("Beef", 0)
            .with_quota("Fish", -4)
            .with_quota("Pork", 2);
        assert_eq!(request.positive_total(), 5);
    }

    #[test]
    fn test_total_over_cap_is_rejected() {
        let request = QuotaRequest::new()
            .with_quota("Chicken", 4)
            .with_quota("Beef", 4);
        assert_eq!(
            request.validate(DEFAULT_MENU_DAYS),
            Err(DomainError::QuotaExceeded { total: 8, cap: 7 })
        );
    }

    #[test]
    fn test_total_at_cap_is_accepted() {
        let request = QuotaRequest::new().with_quota("Chicken", 7);
        let plan = request.validate(DEFAULT_MENU_DAYS).unwrap();
        assert_eq!(plan.quota_total(), 7);
        assert_eq!(plan.quotas(), &[("Chicken".to_string(), 7)]);
    }

    #[test]
    fn test_cap_is_independent_of_days() {
        let request = QuotaRequest::new().with_quota("Chicken", 8).with_days(14);
        assert!(matches!(
            request.validate(DEFAULT_MENU_DAYS),
            Err(DomainError::QuotaExceeded { total: 8, .. })
        ));
    }

    #[test]
    fn test_negative_counts_do_not_offset_the_total() {
        let request = QuotaRequest::new()
            .with_quota("Chicken", 8)
            .with_quota("Beef", -5);
        assert!(request.validate(DEFAULT_MENU_DAYS).is_err());
    }

    #[test]
    fn test_absent_days_use_default() {
        let plan = QuotaRequest::new().validate(DEFAULT_MENU_DAYS).unwrap();
        assert_eq!(plan.target_days(), 7);
        assert!(!plan.has_quotas());

        let plan = QuotaRequest::new().validate(5).unwrap();
        assert_eq!(plan.target_days(), 5);
    }

    #[test]
    fn test_non_positive_days_are_rejected() {
        assert_eq!(
            QuotaRequest::new().with_days(0).validate(DEFAULT_MENU_DAYS),
            Err(DomainError::InvalidDayCount(0))
        );
        assert_eq!(
            QuotaRequest::new().with_days(-3).validate(DEFAULT_MENU_DAYS),
            Err(DomainError::InvalidDayCount(-3))
        );
    }

    #[test]
    fn test_quota_error_takes_precedence_over_day_error() {
        let request = QuotaRequest::new().with_quota("Fish", 9).with_days(0);
        assert!(matches!(
            request.validate(DEFAULT_MENU_DAYS),
            Err(DomainError::QuotaExceeded { .. })
        ));
    }

    #[test]
    fn test_large_days_pass_through() {
        let plan = QuotaRequest::new()
            .with_days(365)
            .validate(DEFAULT_MENU_DAYS)
            .unwrap();
        assert_eq!(plan.target_days(), 365);
    }

    #[test]
    fn test_plan_drops_non_positive_quotas() {
        let plan = QuotaRequest::new()
            .with_quota("Chicken", 2)
            .with_quota("Tofu", 0)
            .validate(DEFAULT_MENU_DAYS)
            .unwrap();
        assert_eq!(plan.quotas(), &[("Chicken".to_string(), 2)]);
    }

    #[test]
    fn test_from_parts_with_absent_quota() {
        let request = QuotaRequest::from_parts(None::<Vec<(String, i64)>>, Some(3));
        assert!(request.quotas().is_empty());
        assert_eq!(request.days(), Some(3));
    }
}
