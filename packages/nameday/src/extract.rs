//! Name day extraction from calendar page HTML.
//!
//! The page has no machine-readable schema. Each country appears as a
//! `div.country` inside a `td.calendarday` cell:
//!
//! ```html
//! <td class="calendarday">
//!   <div class="country">
//!     <div class="countryname"><b>Bulgaria</b></div>
//!     <div>Blaga</div>
//!     <div>Blago</div>
//!     <div class="clear"></div>
//!   </div>
//! </td>
//! ```
//!
//! The country name is the first `<b>` in the block. Person names are the
//! descendant `<div>`s accepted by a name predicate; the default predicate
//! [`is_unclassed`] rejects any div carrying a `class` attribute.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::types::CountryNames;

/// Country block selector.
#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static COUNTRY_BLOCK: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("td.calendarday div.country").expect("valid selector")
});

/// Returns `true` if the element has no `class` attribute.
///
/// An empty `class=""` still counts as carrying the attribute.
pub fn is_unclassed(element: &ElementRef<'_>) -> bool {
    element.value().attr("class").is_none()
}

/// Parse a page body and extract name days using [`is_unclassed`].
pub fn parse_name_days(body: &str) -> CountryNames {
    let document = Html::parse_document(body);
    extract(&document, is_unclassed)
}

/// Extract the country to names mapping from a parsed page.
///
/// Country blocks are processed in document order. A block without a `<b>`
/// element has no display name and is skipped. A document without country
/// blocks yields an empty mapping.
///
/// # Arguments
/// * `document` - Parsed HTML page
/// * `is_name` - Decides which descendant `<div>`s of a block hold a name
pub fn extract<P>(document: &Html, is_name: P) -> CountryNames
where
    P: Fn(&ElementRef<'_>) -> bool,
{
    let mut name_days = CountryNames::new();

    for block in document.select(&COUNTRY_BLOCK) {
        let Some(country) = descendant_elements(block).find(|e| e.value().name() == "b") else {
            tracing::warn!(html = %block.html(), "Country block without a name, skipping");
            continue;
        };
        let country = element_text(country);

        let names = name_days.start_country(&country);
        for div in descendant_elements(block).filter(|e| e.value().name() == "div") {
            if is_name(&div) {
                names.push(element_text(div));
            }
        }

        tracing::debug!(country = %country, names = names.len(), "Extracted country block");
    }

    name_days
}

/// Descendant elements of `element` in document order, excluding itself.
fn descendant_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Concatenated text of all descendant text nodes, trimmed.
fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
