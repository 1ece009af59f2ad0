//! Progress reporting for menu generation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use mealplan_application::MenuProgressNotifier;
use mealplan_domain::{MealRecord, MenuPhase};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner per phase, drawn on stderr
pub struct ProgressReporter {
    current: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn phase_step(phase: MenuPhase) -> &'static str {
        match phase {
            MenuPhase::Validate => "Step 1",
            MenuPhase::CategoryFill => "Step 2",
            MenuPhase::RandomFill => "Step 3",
            MenuPhase::Finalize => "Step 4",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: MenuPhase) {
        let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(format!("{}: {}", Self::phase_step(phase), phase.display_name()));
        pb.set_message("...");
        pb.enable_steady_tick(Duration::from_millis(80));

        if let Ok(mut current) = self.current.lock()
            && let Some(previous) = current.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_meal_selected(&self, _phase: MenuPhase, meal: &MealRecord) {
        if let Ok(current) = self.current.lock()
            && let Some(pb) = current.as_ref()
        {
            pb.set_message(format!("{} {}", "+".green(), meal.name));
        }
    }

    fn on_phase_complete(&self, phase: MenuPhase, selected: usize) {
        if let Ok(mut current) = self.current.lock()
            && let Some(pb) = current.take()
        {
            pb.finish_with_message(format!(
                "{} ({} selected)",
                format!("{} done", Self::phase_step(phase)).green(),
                selected
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl MenuProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: MenuPhase) {
        eprintln!(
            "{} {}",
            "->".cyan(),
            format!("{}: {}", ProgressReporter::phase_step(phase), phase.display_name()).bold()
        );
    }

    fn on_meal_selected(&self, _phase: MenuPhase, meal: &MealRecord) {
        eprintln!("  {} {} ({})", "+".green(), meal.name, meal.protein);
    }

    fn on_phase_complete(&self, _phase: MenuPhase, selected: usize) {
        eprintln!("  {} selected so far", selected);
    }
}
