//! Menu configuration from TOML (`[menu]` section)

use mealplan_application::MenuConfig;
use mealplan_domain::DEFAULT_MENU_DAYS;
use serde::{Deserialize, Serialize};

/// Raw menu configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMenuConfig {
    /// Day count used when a request does not give one
    pub default_days: u32,
}

impl Default for FileMenuConfig {
    fn default() -> Self {
        Self {
            default_days: DEFAULT_MENU_DAYS,
        }
    }
}

impl FileMenuConfig {
    pub fn to_menu_config(&self) -> MenuConfig {
        MenuConfig::new(self.default_days)
    }
}
