//! HTTP client wrapper for fetching name day pages.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::{NameDayError, Result};

/// User agent string identifying this client.
const USER_AGENT: &str = concat!("nameday-calendar/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with timeout and user agent.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}

/// Fetch a page and return its body as text.
///
/// Network errors and non-2xx responses are reported as
/// [`NameDayError::Fetch`]. No retries are attempted.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `url` - URL to fetch
pub fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let fetch_error = |source| NameDayError::Fetch {
        url: url.to_string(),
        source,
    };

    tracing::debug!(url, "Fetching page");
    let response = client
        .get(url)
        .send()
        .and_then(reqwest::blocking::Response::error_for_status)
        .map_err(fetch_error)?;

    let status = response.status();
    let body = response.text().map_err(fetch_error)?;
    tracing::debug!(url, status = %status, bytes = body.len(), "Fetched page");

    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client() {
        let client = create_client();
        assert!(client.is_ok());
    }

    #[test]
    fn test_fetch_page_invalid_url() {
        let client = create_client().unwrap();
        let err = fetch_page(&client, "not a url").unwrap_err();
        assert!(matches!(err, NameDayError::Fetch { ref url, .. } if url == "not a url"));
    }
}
