//! Output rendering for name day results.

use serde::Serialize;

use crate::config::SEPARATOR_WIDTH;
use crate::error::Result;
use crate::types::{CountryNames, Month, NameDayQuery};

/// Render a lookup result as plain text.
///
/// ```text
/// MARCH/25
/// --------------------
/// | Austria => Verkündung des Herrn
/// | Bulgaria => Blaga, Blago, Blagovest
/// --------------------
/// ```
pub fn render_text(query: &NameDayQuery, name_days: &CountryNames) -> String {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = format!(
        "{}/{}\n{separator}\n",
        query.month().as_str().to_uppercase(),
        query.day()
    );
    for (country, names) in name_days.iter() {
        out.push_str(&format!("| {country} => {}\n", names.join(", ")));
    }
    out.push_str(&separator);
    out.push('\n');
    out
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    month: Month,
    day: u32,
    name_days: &'a CountryNames,
}

/// Render a lookup result as pretty-printed JSON.
pub fn render_json(query: &NameDayQuery, name_days: &CountryNames) -> Result<String> {
    let output = JsonOutput {
        month: query.month(),
        day: query.day(),
        name_days,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Two-line usage message asking the user to correct `field`.
pub fn usage(program: &str, field: &str) -> String {
    format!("usage: {program} MONTH DAY\nplease enter correct {field}.\n")
}
