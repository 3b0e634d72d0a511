//! Name day lookup service tying validation, fetching and extraction together.

use reqwest::blocking::Client;

use crate::config::page_url;
use crate::error::Result;
use crate::extract::parse_name_days;
use crate::http::{create_client, fetch_page};
use crate::types::{CountryNames, NameDayQuery};
use crate::validate::validate;

/// Validate a month and day, then fetch and extract its name days.
///
/// # Arguments
/// * `base_url` - Site base URL (e.g., [`crate::config::DEFAULT_BASE_URL`])
/// * `month` - Month name, case-insensitive
/// * `day` - Day of month
///
/// # Returns
/// The validated query and the country to names mapping for it
pub fn lookup(base_url: &str, month: &str, day: i64) -> Result<(NameDayQuery, CountryNames)> {
    // Validate before making HTTP requests
    let query = validate(month, day)?;
    let client = create_client()?;
    let name_days = fetch_name_days(&client, base_url, &query)?;
    Ok((query, name_days))
}

/// Fetch and extract name days for an already validated query.
pub fn fetch_name_days(
    client: &Client,
    base_url: &str,
    query: &NameDayQuery,
) -> Result<CountryNames> {
    let url = page_url(base_url, query);
    let body = fetch_page(client, &url)?;
    let name_days = parse_name_days(&body);

    if name_days.is_empty() {
        tracing::warn!(url = %url, "No name days found on page");
    } else {
        tracing::debug!(url = %url, countries = name_days.len(), "Extracted name days");
    }

    Ok(name_days)
}
