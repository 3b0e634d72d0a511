//! Error types for name day lookups.
//!
//! Validation and transport failures stay distinct here; the CLI decides how
//! coarsely to collapse them for display.

use thiserror::Error;

use crate::types::Month;

/// Main error type for the name day library.
#[derive(Debug, Error)]
pub enum NameDayError {
    /// Month string is not one of the twelve recognized names.
    #[error("month must be one of: {}", Month::names().join(", "))]
    InvalidMonth(String),

    /// Day is not a real calendar day for the month in the checked year.
    #[error("day out of range: {month} has no day {day} in {year}")]
    InvalidRange { month: Month, day: i64, year: i32 },

    /// Day argument is not an integer.
    #[error("day of month must be an integer, got '{0}'")]
    InvalidDay(String),

    /// Building the HTTP client failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to fetch the name day page.
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl NameDayError {
    /// Name of the input field the usage message should ask for.
    #[must_use]
    pub fn usage_field(&self) -> &'static str {
        match self {
            Self::InvalidMonth(_) => "month",
            Self::InvalidRange { .. } | Self::InvalidDay(_) => "day of month",
            Self::Http(_) | Self::Fetch { .. } | Self::Json(_) => "month and day",
        }
    }

    /// Whether the error was caused by user input rather than I/O.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidMonth(_) | Self::InvalidRange { .. } | Self::InvalidDay(_)
        )
    }
}

/// Result type alias for name day operations.
pub type Result<T> = std::result::Result<T, NameDayError>;
