//! Application-level configuration.
//!
//! Settings that control how use cases behave, independent of where they
//! were loaded from.

use mealplan_domain::DEFAULT_MENU_DAYS;

/// Menu generation behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuConfig {
    /// Day count used when a request omits one.
    pub default_days: u32,
}

impl MenuConfig {
    pub fn new(default_days: u32) -> Self {
        Self { default_days }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            default_days: DEFAULT_MENU_DAYS,
        }
    }
}
