//! Menu generation phases

use serde::{Deserialize, Serialize};

/// Step of a menu generation run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MenuPhase {
    /// Quota cap and day count checks
    Validate,
    /// Quota-driven selection per category
    CategoryFill,
    /// Top-up from the whole catalog
    RandomFill,
    /// Final reshuffle and truncation
    Finalize,
}

impl MenuPhase {
    pub fn as_str(&self) -> &str {
        match self {
            MenuPhase::Validate => "validate",
            MenuPhase::CategoryFill => "category_fill",
            MenuPhase::RandomFill => "random_fill",
            MenuPhase::Finalize => "finalize",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            MenuPhase::Validate => "Validate Quotas",
            MenuPhase::CategoryFill => "Category Fill",
            MenuPhase::RandomFill => "Random Fill",
            MenuPhase::Finalize => "Finalize",
        }
    }
}

impl std::fmt::Display for MenuPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
