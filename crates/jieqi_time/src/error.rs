//! Error types for calendar parsing and validation.

use thiserror::Error;

/// Errors from calendar input handling.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar field is outside its valid range.
    #[error("invalid calendar date: {0}")]
    InvalidDate(&'static str),
    /// A date string could not be parsed.
    #[error("date parse error: {0}")]
    Parse(String),
}
