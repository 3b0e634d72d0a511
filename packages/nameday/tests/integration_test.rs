//! End-to-end tests for extraction and rendering.
//!
//! Uses a saved calendar page for March 25.

use std::fs;
use std::path::Path;

use nameday_calendar::extract::{extract, is_unclassed, parse_name_days};
use nameday_calendar::render::render_text;
use nameday_calendar::types::CountryNames;
use nameday_calendar::validate::validate_in_year;
use pretty_assertions::assert_eq;
use scraper::Html;

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn to_vec(names: &CountryNames) -> Vec<(String, Vec<String>)> {
    names
        .iter()
        .map(|(country, names)| (country.to_string(), names.to_vec()))
        .collect()
}

#[test]
fn test_fixture_countries_in_document_order() {
    let name_days = parse_name_days(&load_fixture("march_25.html"));

    assert_eq!(
        to_vec(&name_days),
        vec![
            (
                "Austria".to_string(),
                vec!["Verkündung des Herrn".to_string()]
            ),
            (
                "Bulgaria".to_string(),
                vec![
                    "Blaga".to_string(),
                    "Blago".to_string(),
                    "Blagovest".to_string()
                ]
            ),
            ("Croatia".to_string(), vec!["Irenej".to_string()]),
        ]
    );
}

#[test]
fn test_fixture_excludes_classed_divs() {
    let name_days = parse_name_days(&load_fixture("march_25.html"));

    for (_, names) in name_days.iter() {
        assert!(names.iter().all(|n| !n.is_empty()));
    }
    assert_eq!(name_days.get("Nowhere"), None);
}

#[test]
fn test_extract_is_idempotent() {
    let document = Html::parse_document(&load_fixture("march_25.html"));

    let first = extract(&document, is_unclassed);
    let second = extract(&document, is_unclassed);
    assert_eq!(first, second);
}

#[test]
fn test_accept_all_predicate_keeps_structural_divs() {
    let document = Html::parse_document(&load_fixture("march_25.html"));
    let name_days = extract(&document, |_| true);

    assert_eq!(
        name_days.get("Croatia"),
        Some(
            &[
                "Croatia".to_string(),
                "Irenej".to_string(),
                String::new()
            ][..]
        )
    );
}

#[test]
fn test_render_fixture() {
    let query = validate_in_year("March", 25, 2025).unwrap();
    let name_days = parse_name_days(&load_fixture("march_25.html"));

    assert_eq!(
        render_text(&query, &name_days),
        "MARCH/25\n\
         --------------------\n\
         | Austria => Verkündung des Herrn\n\
         | Bulgaria => Blaga, Blago, Blagovest\n\
         | Croatia => Irenej\n\
         --------------------\n"
    );
}
