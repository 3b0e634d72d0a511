//! Name day calendar - look up the names celebrated per country on a date.
//!
//! Pages from namedaycalendar.com are fetched and their markup is turned
//! into an ordered mapping from country to celebrated names.
//!
//! # Example
//!
//! ```
//! use nameday_calendar::{extract, validate};
//!
//! let query = validate::validate_in_year("march", 25, 2025).unwrap();
//! assert_eq!(query.day(), 25);
//!
//! let html = r#"<table><tr><td class="calendarday">
//!     <div class="country"><div class="countryname"><b>Croatia</b></div><div>Irenej</div></div>
//! </td></tr></table>"#;
//! let name_days = extract::parse_name_days(html);
//! assert_eq!(name_days.get("Croatia"), Some(&["Irenej".to_string()][..]));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants and URL building
//! - [`types`]: Core data types (Month, NameDayQuery, CountryNames)
//! - [`error`]: Error types and Result alias
//! - [`validate`]: Month and day validation
//! - [`extract`]: HTML extraction of country blocks
//! - [`http`]: HTTP client for fetching pages
//! - [`calendar`]: Lookup service
//! - [`render`]: Text and JSON output
//! - [`cli`]: Command-line interface

pub mod calendar;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod http;
pub mod render;
pub mod types;
pub mod validate;

// Re-export main functions
pub use calendar::{fetch_name_days, lookup};

// Re-export commonly used items
pub use error::{NameDayError, Result};
pub use extract::{extract, is_unclassed, parse_name_days};
pub use types::{CountryNames, Month, NameDayQuery};
pub use validate::{validate, validate_in_year};
