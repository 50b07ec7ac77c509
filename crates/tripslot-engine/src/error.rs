//! Error types for tripslot-engine parsing and boundary helpers.
//!
//! The availability operations themselves never fail; malformed schedule data
//! surfaces as [`OpenResult::Unknown`](crate::availability::OpenResult::Unknown).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HoursError {
    #[error("Invalid time of day: '{0}' (expected HH:MM, 24-hour)")]
    InvalidTime(String),

    #[error("Invalid date: '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Unknown place category: '{0}'")]
    UnknownCategory(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, HoursError>;
