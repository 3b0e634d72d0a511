//! Configuration constants and URL building.

use crate::types::NameDayQuery;

/// Base URL of the name day calendar site.
pub const DEFAULT_BASE_URL: &str = "http://www.namedaycalendar.com";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "NAMEDAY_BASE_URL";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Width of the dashed separator lines in text output.
pub const SEPARATOR_WIDTH: usize = 20;

/// Build the page URL for a query.
///
/// # Examples
/// ```
/// use nameday_calendar::config::page_url;
/// use nameday_calendar::validate::validate_in_year;
///
/// let query = validate_in_year("March", 25, 2025).unwrap();
/// assert_eq!(
///     page_url("http://www.namedaycalendar.com", &query),
///     "http://www.namedaycalendar.com/march/25"
/// );
/// ```
pub fn page_url(base_url: &str, query: &NameDayQuery) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        query.month(),
        query.day()
    )
}
