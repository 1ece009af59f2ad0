//! Menu draft: the accumulator threaded through the fill phases.

use crate::meal::entities::{MealId, MealRecord};
use crate::menu::result::MenuResult;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Meals selected so far plus the set of ids already used.
///
/// Each generation call owns its own draft, so concurrent calls never share
/// selection state.
#[derive(Debug, Clone)]
pub struct MenuDraft {
    meals: Vec<MealRecord>,
    used: HashSet<MealId>,
    target: usize,
}

impl MenuDraft {
    pub fn new(target: usize) -> Self {
        Self {
            meals: Vec::new(),
            used: HashSet::new(),
            target,
        }
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Slots still open before the target length is reached.
    pub fn remaining(&self) -> usize {
        self.target.saturating_sub(self.meals.len())
    }

    pub fn contains(&self, id: MealId) -> bool {
        self.used.contains(&id)
    }

    pub fn meals(&self) -> &[MealRecord] {
        &self.meals
    }

    /// Take up to `count` meals from one category's candidates.
    ///
    /// Candidates are shuffled first. A candidate whose id is already in the
    /// draft is skipped without consuming a slot. The target length is not
    /// consulted here; any overshoot is cut by [`finalize`](Self::finalize).
    /// Returns the number of meals added.
    pub fn fill_category<R>(
        &mut self,
        mut candidates: Vec<MealRecord>,
        count: usize,
        rng: &mut R,
    ) -> usize
    where
        R: Rng + ?Sized,
    {
        candidates.shuffle(rng);
        self.take_unique(candidates, count)
    }

    /// Top the draft up to its target from the whole catalog.
    ///
    /// Running out of unused meals leaves the draft short; that is a normal
    /// outcome. Returns the number of meals added.
    pub fn fill_random<R>(&mut self, mut catalog: Vec<MealRecord>, rng: &mut R) -> usize
    where
        R: Rng + ?Sized,
    {
        let needed = self.remaining();
        if needed == 0 {
            return 0;
        }
        catalog.shuffle(rng);
        self.take_unique(catalog, needed)
    }

    /// Reshuffle the whole selection and cut it to the target length.
    pub fn finalize<R>(mut self, rng: &mut R) -> MenuResult
    where
        R: Rng + ?Sized,
    {
        self.meals.shuffle(rng);
        self.meals.truncate(self.target);
        MenuResult::new(self.meals)
    }

    fn take_unique(&mut self, pool: Vec<MealRecord>, limit: usize) -> usize {
        let mut added = 0;
        for meal in pool {
            if added >= limit {
                break;
            }
            if self.used.insert(meal.id) {
                self.meals.push(meal);
                added += 1;
            }
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn meals(ids: std::ops::RangeInclusive<u64>, protein: &str) -> Vec<MealRecord> {
        ids.map(|id| MealRecord::new(id, format!("{} #{}", protein, id), protein))
            .collect()
    }

    fn ids(meals: &[MealRecord]) -> Vec<u64> {
        meals.iter().map(|m| m.id.value()).collect()
    }

    #[test]
    fn test_fill_category_takes_requested_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut draft = MenuDraft::new(7);
        let added = draft.fill_category(meals(1..=5, "Chicken"), 2, &mut rng);
        assert_eq!(added, 2);
        assert_eq!(draft.len(), 2);
        assert!(draft.meals().iter().all(|m| m.protein == "Chicken"));
    }

    #[test]
    fn test_fill_category_stops_when_candidates_run_out() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut draft = MenuDraft::new(7);
        let added = draft.fill_category(meals(1..=1, "Chicken"), 3, &mut rng);
        assert_eq!(added, 1);
        assert_eq!(draft.remaining(), 6);
    }

    #[test]
    fn test_fill_category_skips_used_ids_without_consuming_slots() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut draft = MenuDraft::new(7);
        draft.fill_category(meals(1..=2, "Chicken"), 2, &mut rng);

        // Same ids offered again under another label, plus two fresh ones
        let mut overlap = meals(1..=2, "Poultry");
        overlap.extend(meals(3..=4, "Poultry"));
        let added = draft.fill_category(overlap, 2, &mut rng);

        assert_eq!(added, 2);
        let mut got = ids(draft.meals());
        got.sort();
        assert_eq!(got, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_fill_category_may_exceed_target() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut draft = MenuDraft::new(2);
        draft.fill_category(meals(1..=5, "Beef"), 4, &mut rng);
        assert_eq!(draft.len(), 4);
        assert_eq!(draft.remaining(), 0);
    }

    #[test]
    fn test_fill_random_tops_up_to_target() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut draft = MenuDraft::new(5);
        draft.fill_category(meals(1..=2, "Fish"), 2, &mut rng);
        let mut catalog = meals(1..=2, "Fish");
        catalog.extend(meals(3..=10, "Beef"));

        let added = draft.fill_random(catalog, &mut rng);
        assert_eq!(added, 3);
        assert_eq!(draft.len(), 5);
    }

    #[test]
    fn test_fill_random_exhausted_catalog_leaves_draft_short() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut draft = MenuDraft::new(7);
        let added = draft.fill_random(meals(1..=3, "Pork"), &mut rng);
        assert_eq!(added, 3);
        assert_eq!(draft.remaining(), 4);
    }

    #[test]
    fn test_fill_random_noop_when_full() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut draft = MenuDraft::new(1);
        draft.fill_category(meals(1..=1, "Pork"), 1, &mut rng);
        assert_eq!(draft.fill_random(meals(2..=9, "Beef"), &mut rng), 0);
    }

    #[test]
    fn test_finalize_truncates_to_target() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut draft = MenuDraft::new(3);
        draft.fill_category(meals(1..=6, "Beef"), 6, &mut rng);
        let result = draft.finalize(&mut rng);
        assert_eq!(result.len(), 3);
        assert!(result.has_unique_ids());
    }

    #[test]
    fn test_finalize_keeps_all_selected_meals_when_short() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut draft = MenuDraft::new(7);
        draft.fill_random(meals(1..=4, "Tofu"), &mut rng);
        let result = draft.finalize(&mut rng);
        let mut got = ids(result.meals());
        got.sort();
        assert_eq!(got, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let run = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut draft = MenuDraft::new(5);
            draft.fill_category(meals(1..=6, "Chicken"), 2, &mut rng);
            draft.fill_random(meals(1..=20, "Mixed"), &mut rng);
            ids(draft.finalize(&mut rng).meals())
        };
        assert_eq!(run(42), run(42));
    }
}
