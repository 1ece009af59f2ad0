//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — domain-level errors
//! - [`string`] — small text helpers used by formatters

pub mod error;
pub mod string;
