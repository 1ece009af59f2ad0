//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Total protein selections cannot exceed {cap}. Current total: {total}")]
    QuotaExceeded { total: i64, cap: i64 },

    #[error("Day count must be at least 1, got {0}")]
    InvalidDayCount(i64),

    #[error("Invalid forecast data: {0}")]
    InvalidForecast(String),
}

impl DomainError {
    /// Check if this error was caused by the caller's request rather than by
    /// the system (maps to a client error at the boundary).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            DomainError::QuotaExceeded { .. } | DomainError::InvalidDayCount(_)
        )
    }
}
