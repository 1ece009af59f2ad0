//! Generate Menu use case
//!
//! Runs the menu pipeline against a catalog:
//!
//! 1. **Validate** — quota cap and day count; failure ends the call before
//!    any catalog read
//! 2. **Category fill** — one exact-match catalog query per positive quota
//! 3. **Random fill** — one full catalog read if slots remain
//! 4. **Finalize** — reshuffle and truncate
//!
//! Empty categories and short catalogs are normal outcomes. Catalog errors
//! abort the call and no partial menu is returned.

use crate::config::MenuConfig;
use crate::ports::catalog::{CatalogError, MealCatalog};
use crate::ports::progress::{MenuProgressNotifier, NoMenuProgress};
use mealplan_domain::{
    DomainError, MenuDraft, MenuPhase, MenuPlan, MenuResult, QuotaRequest, similar_categories,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use thiserror::Error;
use tracing::{Level, debug, info, warn};

/// Errors that can occur during menu generation
#[derive(Error, Debug)]
pub enum GenerateMenuError {
    /// The request was rejected by validation (client error)
    #[error(transparent)]
    Rejected(#[from] DomainError),

    /// The catalog failed (server error)
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl GenerateMenuError {
    pub fn is_client_error(&self) -> bool {
        match self {
            GenerateMenuError::Rejected(e) => e.is_client_error(),
            GenerateMenuError::Catalog(_) => false,
        }
    }
}

/// Input for the GenerateMenu use case
#[derive(Debug, Clone, Default)]
pub struct GenerateMenuInput {
    pub request: QuotaRequest,
}

impl GenerateMenuInput {
    pub fn new(request: QuotaRequest) -> Self {
        Self { request }
    }

    /// Build from an optional quota mapping and an optional day count.
    pub fn from_parts<I>(quotas: Option<I>, days: Option<i64>) -> Self
    where
        I: IntoIterator<Item = (String, i64)>,
    {
        Self {
            request: QuotaRequest::from_parts(quotas, days),
        }
    }
}

/// Use case for generating a menu
pub struct GenerateMenuUseCase<C: MealCatalog + 'static> {
    catalog: Arc<C>,
    config: MenuConfig,
}

impl<C: MealCatalog + 'static> GenerateMenuUseCase<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            config: MenuConfig::default(),
        }
    }

    pub fn with_config(mut self, config: MenuConfig) -> Self {
        self.config = config;
        self
    }

    /// Execute with fresh entropy and no progress reporting
    pub async fn execute(&self, input: GenerateMenuInput) -> Result<MenuResult, GenerateMenuError> {
        let mut rng = StdRng::from_entropy();
        self.execute_with(input, &mut rng, &NoMenuProgress).await
    }

    /// Execute with a caller-supplied randomness source
    ///
    /// Two calls with equally seeded sources, equal inputs and an unchanged
    /// catalog return the same sequence.
    pub async fn execute_with_rng<R>(
        &self,
        input: GenerateMenuInput,
        rng: &mut R,
    ) -> Result<MenuResult, GenerateMenuError>
    where
        R: Rng + Send + ?Sized,
    {
        self.execute_with(input, rng, &NoMenuProgress).await
    }

    /// Execute with a randomness source and progress callbacks
    pub async fn execute_with<R>(
        &self,
        input: GenerateMenuInput,
        rng: &mut R,
        progress: &dyn MenuProgressNotifier,
    ) -> Result<MenuResult, GenerateMenuError>
    where
        R: Rng + Send + ?Sized,
    {
        info!(
            "Generating menu: quotas={:?}, days={:?}",
            input.request.quotas(),
            input.request.days()
        );

        progress.on_phase_start(MenuPhase::Validate);
        let plan = match input.request.validate(self.config.default_days) {
            Ok(plan) => plan,
            Err(e) => {
                warn!("Menu request rejected: {}", e);
                return Err(e.into());
            }
        };
        progress.on_phase_complete(MenuPhase::Validate, 0);
        info!(
            "Target days: {} (quota total: {})",
            plan.target_days(),
            plan.quota_total()
        );

        let mut draft = MenuDraft::new(plan.target_days());

        self.category_fill(&plan, &mut draft, rng, progress).await?;
        self.random_fill(&mut draft, rng, progress).await?;

        progress.on_phase_start(MenuPhase::Finalize);
        let result = draft.finalize(rng);
        progress.on_phase_complete(MenuPhase::Finalize, result.len());

        info!(
            "Menu generated: {} meals, distribution {}",
            result.len(),
            result.summary()
        );
        for (day, meal) in result.meals().iter().enumerate() {
            debug!(
                "  {}. {} (id: {}, protein: '{}')",
                day + 1,
                meal.name,
                meal.id,
                meal.protein
            );
        }

        Ok(result)
    }

    /// Phase 2: satisfy quotas category by category
    async fn category_fill<R>(
        &self,
        plan: &MenuPlan,
        draft: &mut MenuDraft,
        rng: &mut R,
        progress: &dyn MenuProgressNotifier,
    ) -> Result<(), CatalogError>
    where
        R: Rng + Send + ?Sized,
    {
        if !plan.has_quotas() {
            debug!("No quotas requested, skipping category fill");
            return Ok(());
        }

        progress.on_phase_start(MenuPhase::CategoryFill);
        for (category, count) in plan.quotas() {
            let candidates = self.catalog.fetch_by_category_exact(category).await?;
            debug!("Found {} meals for category '{}'", candidates.len(), category);

            if candidates.is_empty() {
                warn!("No meals found for category '{}'", category);
                self.log_similar_categories(category).await;
                continue;
            }

            let before = draft.len();
            let added = draft.fill_category(candidates, *count, rng);
            Self::report_added(MenuPhase::CategoryFill, &draft.meals()[before..], progress);
            info!("Added {}/{} meals for category '{}'", added, count, category);
        }
        progress.on_phase_complete(MenuPhase::CategoryFill, draft.len());

        Ok(())
    }

    /// Phase 3: top up from the whole catalog
    async fn random_fill<R>(
        &self,
        draft: &mut MenuDraft,
        rng: &mut R,
        progress: &dyn MenuProgressNotifier,
    ) -> Result<(), CatalogError>
    where
        R: Rng + Send + ?Sized,
    {
        let needed = draft.remaining();
        if needed == 0 {
            debug!("Draft already full, skipping random fill");
            return Ok(());
        }

        progress.on_phase_start(MenuPhase::RandomFill);
        info!("Need {} more meals, filling with random options", needed);

        let catalog = self.catalog.fetch_all().await?;
        let before = draft.len();
        let added = draft.fill_random(catalog, rng);
        Self::report_added(MenuPhase::RandomFill, &draft.meals()[before..], progress);

        if added < needed {
            info!(
                "Catalog exhausted: filled {} of {} remaining slots",
                added, needed
            );
        } else {
            info!("Filled {} additional slots", added);
        }
        progress.on_phase_complete(MenuPhase::RandomFill, draft.len());

        Ok(())
    }

    fn report_added(
        phase: MenuPhase,
        added: &[mealplan_domain::MealRecord],
        progress: &dyn MenuProgressNotifier,
    ) {
        for meal in added {
            debug!(
                "{}: added '{}' (id: {}, protein: '{}')",
                phase, meal.name, meal.id, meal.protein
            );
            progress.on_meal_selected(phase, meal);
        }
    }

    /// Explain an empty category in the logs. Never affects selection.
    ///
    /// Only runs when debug logging is enabled, since it costs a catalog read.
    async fn log_similar_categories(&self, requested: &str) {
        if !tracing::enabled!(Level::DEBUG) {
            return;
        }

        match self.catalog.categories().await {
            Ok(labels) => {
                let similar = similar_categories(requested, labels.iter().map(String::as_str));
                if similar.is_empty() {
                    debug!("No similar categories to '{}' in catalog", requested);
                } else {
                    debug!("Categories similar to '{}': {:?}", requested, similar);
                }
            }
            Err(e) => {
                debug!("Could not list categories for diagnostics: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mealplan_domain::{MealId, MealRecord};
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ==================== Test Mocks ====================

    struct MockCatalog {
        meals: Vec<MealRecord>,
        fail: bool,
        fetch_all_calls: AtomicUsize,
        category_queries: Mutex<Vec<String>>,
    }

    impl MockCatalog {
        fn new(meals: Vec<MealRecord>) -> Self {
            Self {
                meals,
                fail: false,
                fetch_all_calls: AtomicUsize::new(0),
                category_queries: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::new(vec![])
            }
        }

        fn total_calls(&self) -> usize {
            self.fetch_all_calls.load(Ordering::SeqCst)
                + self.category_queries.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl MealCatalog for MockCatalog {
        async fn fetch_all(&self) -> Result<Vec<MealRecord>, CatalogError> {
            self.fetch_all_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CatalogError::Unavailable("connection refused".to_string()));
            }
            Ok(self.meals.clone())
        }

        async fn fetch_by_category_exact(
            &self,
            category: &str,
        ) -> Result<Vec<MealRecord>, CatalogError> {
            self.category_queries
                .lock()
                .unwrap()
                .push(category.to_string());
            if self.fail {
                return Err(CatalogError::Unavailable("connection refused".to_string()));
            }
            Ok(self
                .meals
                .iter()
                .filter(|m| m.is_in_category(category))
                .cloned()
                .collect())
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl MenuProgressNotifier for RecordingProgress {
        fn on_phase_start(&self, phase: MenuPhase) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start:{}", phase.as_str()));
        }

        fn on_meal_selected(&self, phase: MenuPhase, meal: &MealRecord) {
            self.events
                .lock()
                .unwrap()
                .push(format!("meal:{}:{}", phase.as_str(), meal.id));
        }

        fn on_phase_complete(&self, phase: MenuPhase, selected: usize) {
            self.events
                .lock()
                .unwrap()
                .push(format!("done:{}:{}", phase.as_str(), selected));
        }
    }

    // ==================== Helpers ====================

    fn catalog_with(counts: &[(&str, u64)]) -> Vec<MealRecord> {
        let mut next_id = 1;
        let mut meals = Vec::new();
        for (protein, count) in counts {
            for _ in 0..*count {
                meals.push(MealRecord::new(
                    next_id,
                    format!("{} dish {}", protein, next_id),
                    *protein,
                ));
                next_id += 1;
            }
        }
        meals
    }

    fn quota(pairs: &[(&str, i64)], days: Option<i64>) -> GenerateMenuInput {
        GenerateMenuInput::from_parts(
            Some(pairs.iter().map(|(c, n)| (c.to_string(), *n))),
            days,
        )
    }

    fn count_protein(result: &MenuResult, protein: &str) -> usize {
        result.meals().iter().filter(|m| m.protein == protein).count()
    }

    async fn run(catalog: MockCatalog, input: GenerateMenuInput, seed: u64) -> MenuResult {
        let use_case = GenerateMenuUseCase::new(Arc::new(catalog));
        let mut rng = StdRng::seed_from_u64(seed);
        use_case.execute_with_rng(input, &mut rng).await.unwrap()
    }

    // ==================== Validation ====================

    #[tokio::test]
    async fn test_quota_over_cap_never_touches_catalog() {
        let catalog = Arc::new(MockCatalog::new(catalog_with(&[("Chicken", 10)])));
        let use_case = GenerateMenuUseCase::new(Arc::clone(&catalog));

        let err = use_case
            .execute(quota(&[("Chicken", 5), ("Beef", 3)], None))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GenerateMenuError::Rejected(DomainError::QuotaExceeded { total: 8, cap: 7 })
        ));
        assert!(err.is_client_error());
        assert!(err.to_string().contains('8'));
        assert!(err.to_string().contains('7'));
        assert_eq!(catalog.total_calls(), 0);
    }

    #[tokio::test]
    async fn test_invalid_days_never_touches_catalog() {
        let catalog = Arc::new(MockCatalog::new(catalog_with(&[("Chicken", 10)])));
        let use_case = GenerateMenuUseCase::new(Arc::clone(&catalog));

        let err = use_case.execute(quota(&[], Some(0))).await.unwrap_err();

        assert!(matches!(
            err,
            GenerateMenuError::Rejected(DomainError::InvalidDayCount(0))
        ));
        assert_eq!(catalog.total_calls(), 0);
    }

    // ==================== Selection ====================

    #[tokio::test]
    async fn test_no_quota_returns_requested_days() {
        let catalog = MockCatalog::new(catalog_with(&[("Chicken", 4), ("Beef", 4)]));
        let input = GenerateMenuInput::from_parts(None::<Vec<(String, i64)>>, Some(5));
        let result = run(catalog, input, 1).await;

        assert_eq!(result.len(), 5);
        assert!(result.has_unique_ids());
    }

    #[tokio::test]
    async fn test_default_days_is_seven() {
        let catalog = MockCatalog::new(catalog_with(&[("Fish", 12)]));
        let result = run(catalog, GenerateMenuInput::default(), 2).await;
        assert_eq!(result.len(), 7);
    }

    #[tokio::test]
    async fn test_configured_default_days() {
        let catalog = Arc::new(MockCatalog::new(catalog_with(&[("Fish", 12)])));
        let use_case = GenerateMenuUseCase::new(catalog).with_config(MenuConfig::new(4));
        let mut rng = StdRng::seed_from_u64(2);
        let result = use_case
            .execute_with_rng(GenerateMenuInput::default(), &mut rng)
            .await
            .unwrap();
        assert_eq!(result.len(), 4);
    }

    #[tokio::test]
    async fn test_quota_satisfied_when_catalog_allows() {
        for seed in 0..20 {
            let catalog = MockCatalog::new(catalog_with(&[("Chicken", 2), ("Beef", 10)]));
            let result = run(catalog, quota(&[("Chicken", 2)], None), seed).await;
            assert_eq!(result.len(), 7);
            assert_eq!(count_protein(&result, "Chicken"), 2);
        }
    }

    #[tokio::test]
    async fn test_quota_partially_satisfied_with_single_match() {
        let catalog = MockCatalog::new(catalog_with(&[("Chicken", 1), ("Beef", 10)]));
        let result = run(catalog, quota(&[("Chicken", 2)], None), 3).await;

        assert_eq!(result.len(), 7);
        assert_eq!(count_protein(&result, "Chicken"), 1);
    }

    #[tokio::test]
    async fn test_category_match_is_exact() {
        let catalog = MockCatalog::new(catalog_with(&[("Chicken", 3)]));
        let catalog = Arc::new(catalog);
        let use_case = GenerateMenuUseCase::new(Arc::clone(&catalog));
        let mut rng = StdRng::seed_from_u64(4);

        let result = use_case
            .execute_with_rng(quota(&[("chicken", 2)], Some(2)), &mut rng)
            .await
            .unwrap();

        // Lowercase request finds nothing, random fill still supplies meals
        assert_eq!(result.len(), 2);
        assert_eq!(
            catalog.category_queries.lock().unwrap().as_slice(),
            &["chicken".to_string()]
        );
        assert_eq!(catalog.fetch_all_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_category_falls_back_to_random_fill() {
        let catalog = MockCatalog::new(catalog_with(&[("Chicken", 5), ("Beef", 5)]));
        let result = run(catalog, quota(&[("Tofu", 3)], None), 5).await;

        assert_eq!(result.len(), 7);
        assert_eq!(count_protein(&result, "Tofu"), 0);
        assert!(result.has_unique_ids());
    }

    #[tokio::test]
    async fn test_small_catalog_is_exhausted_without_error() {
        let catalog = MockCatalog::new(catalog_with(&[("Pork", 3)]));
        let result = run(catalog, GenerateMenuInput::default(), 6).await;

        assert_eq!(result.len(), 3);
        assert!(result.has_unique_ids());
    }

    #[tokio::test]
    async fn test_empty_catalog_returns_empty_menu() {
        let catalog = MockCatalog::new(vec![]);
        let result = run(catalog, quota(&[("Chicken", 2)], None), 7).await;
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_quota_larger_than_days_is_truncated() {
        for seed in 0..10 {
            let catalog = MockCatalog::new(catalog_with(&[("Chicken", 5), ("Beef", 5)]));
            let result = run(catalog, quota(&[("Chicken", 4), ("Beef", 3)], Some(3)), seed).await;
            assert_eq!(result.len(), 3);
            assert!(result.has_unique_ids());
        }
    }

    #[tokio::test]
    async fn test_full_quota_skips_random_fill() {
        let catalog = Arc::new(MockCatalog::new(catalog_with(&[("Chicken", 4), ("Beef", 4)])));
        let use_case = GenerateMenuUseCase::new(Arc::clone(&catalog));
        let mut rng = StdRng::seed_from_u64(8);

        let result = use_case
            .execute_with_rng(quota(&[("Chicken", 4), ("Beef", 3)], None), &mut rng)
            .await
            .unwrap();

        assert_eq!(result.len(), 7);
        assert_eq!(count_protein(&result, "Chicken"), 4);
        assert_eq!(count_protein(&result, "Beef"), 3);
        assert_eq!(catalog.fetch_all_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_non_positive_quotas_are_not_queried() {
        let catalog = Arc::new(MockCatalog::new(catalog_with(&[("Chicken", 8)])));
        let use_case = GenerateMenuUseCase::new(Arc::clone(&catalog));
        let mut rng = StdRng::seed_from_u64(9);

        use_case
            .execute_with_rng(quota(&[("Beef", 0), ("Fish", -2)], None), &mut rng)
            .await
            .unwrap();

        assert!(catalog.category_queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_no_duplicates_across_many_requests() {
        let meals = catalog_with(&[("Chicken", 3), ("Beef", 2), ("Fish", 4), ("Tofu", 1)]);
        for seed in 0..30 {
            let catalog = MockCatalog::new(meals.clone());
            let days = (seed % 12) as i64 + 1;
            let result = run(
                catalog,
                quota(&[("Chicken", 3), ("Fish", 2), ("Tofu", 2)], Some(days)),
                seed,
            )
            .await;
            let ids: HashSet<MealId> = result.meals().iter().map(|m| m.id).collect();
            assert_eq!(ids.len(), result.len());
            assert_eq!(result.len(), (days as usize).min(meals.len()));
        }
    }

    #[tokio::test]
    async fn test_same_seed_same_menu() {
        let meals = catalog_with(&[("Chicken", 6), ("Beef", 6), ("Fish", 6)]);
        let input = quota(&[("Chicken", 2), ("Fish", 1)], Some(6));

        let first = run(MockCatalog::new(meals.clone()), input.clone(), 99).await;
        let second = run(MockCatalog::new(meals), input, 99).await;

        assert_eq!(first, second);
    }

    // ==================== Failures ====================

    #[tokio::test]
    async fn test_catalog_failure_propagates() {
        let use_case = GenerateMenuUseCase::new(Arc::new(MockCatalog::failing()));

        let err = use_case
            .execute(quota(&[("Chicken", 2)], None))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            GenerateMenuError::Catalog(CatalogError::Unavailable(_))
        ));
        assert!(!err.is_client_error());
    }

    #[tokio::test]
    async fn test_random_fill_failure_propagates() {
        let use_case = GenerateMenuUseCase::new(Arc::new(MockCatalog::failing()));
        let err = use_case.execute(GenerateMenuInput::default()).await.unwrap_err();
        assert!(matches!(err, GenerateMenuError::Catalog(_)));
    }

    // ==================== Progress ====================

    #[tokio::test]
    async fn test_progress_reports_phases_in_order() {
        let catalog = Arc::new(MockCatalog::new(catalog_with(&[("Chicken", 1), ("Beef", 1)])));
        let use_case = GenerateMenuUseCase::new(catalog);
        let progress = RecordingProgress::default();
        let mut rng = StdRng::seed_from_u64(10);

        use_case
            .execute_with(quota(&[("Chicken", 1)], Some(2)), &mut rng, &progress)
            .await
            .unwrap();

        let events = progress.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                "start:validate",
                "done:validate:0",
                "start:category_fill",
                "meal:category_fill:1",
                "done:category_fill:1",
                "start:random_fill",
                "meal:random_fill:2",
                "done:random_fill:2",
                "start:finalize",
                "done:finalize:2",
            ]
        );
    }
}
