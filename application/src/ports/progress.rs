//! Progress notification port
//!
//! Defines the interface for reporting progress during menu generation.

use mealplan_domain::{MealRecord, MenuPhase};

/// Callback for progress updates during menu generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain log lines, nothing).
pub trait MenuProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: MenuPhase);

    /// Called for each meal a fill phase adds
    fn on_meal_selected(&self, _phase: MenuPhase, _meal: &MealRecord) {}

    /// Called when a phase completes; `selected` is the draft size afterwards
    fn on_phase_complete(&self, phase: MenuPhase, selected: usize);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoMenuProgress;

impl MenuProgressNotifier for NoMenuProgress {
    fn on_phase_start(&self, _phase: MenuPhase) {}
    fn on_phase_complete(&self, _phase: MenuPhase, _selected: usize) {}
}
