//! Health report

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of `mealplan health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub catalog: String,
    pub meals: usize,
}

impl HealthReport {
    pub fn ok(catalog: impl Into<String>, meals: usize) -> Self {
        Self {
            status: "OK".to_string(),
            timestamp: Utc::now(),
            catalog: catalog.into(),
            meals,
        }
    }
}
