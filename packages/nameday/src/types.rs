//! Core data types for name day lookups.

use std::fmt;

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// One of the twelve calendar months, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Month; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Lowercase month name as used in page URLs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::January => "january",
            Self::February => "february",
            Self::March => "march",
            Self::April => "april",
            Self::May => "may",
            Self::June => "june",
            Self::July => "july",
            Self::August => "august",
            Self::September => "september",
            Self::October => "october",
            Self::November => "november",
            Self::December => "december",
        }
    }

    /// 1-based month number (january = 1).
    #[must_use]
    pub fn number(&self) -> u32 {
        match self {
            Self::January => 1,
            Self::February => 2,
            Self::March => 3,
            Self::April => 4,
            Self::May => 5,
            Self::June => 6,
            Self::July => 7,
            Self::August => 8,
            Self::September => 9,
            Self::October => 10,
            Self::November => 11,
            Self::December => 12,
        }
    }

    /// Look up a month by name, ignoring case.
    ///
    /// # Examples
    /// ```
    /// use nameday_calendar::types::Month;
    ///
    /// assert_eq!(Month::from_name("March"), Some(Month::March));
    /// assert_eq!(Month::from_name("mar"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL.into_iter().find(|m| m.as_str() == lower)
    }

    /// Names of all months, for display in error messages.
    #[must_use]
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Month::as_str).collect()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated (month, day) lookup key.
///
/// Only [`crate::validate::validate`] and [`crate::validate::validate_in_year`]
/// construct it, so a value of this type always names a real calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameDayQuery {
    month: Month,
    day: u32,
}

impl NameDayQuery {
    pub(crate) fn new(month: Month, day: u32) -> Self {
        Self { month, day }
    }

    #[must_use]
    pub fn month(&self) -> Month {
        self.month
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.day
    }
}

/// Country name to celebrated names, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountryNames {
    entries: Vec<(String, Vec<String>)>,
}

impl CountryNames {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh, empty name list for `country` and return it.
    ///
    /// A country already present keeps its position but loses its names.
    pub fn start_country(&mut self, country: &str) -> &mut Vec<String> {
        let idx = match self.entries.iter().position(|(c, _)| c == country) {
            Some(idx) => {
                self.entries[idx].1.clear();
                idx
            }
            None => {
                self.entries.push((country.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// Names for a country, if the country is present.
    #[must_use]
    pub fn get(&self, country: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(c, _)| c == country)
            .map(|(_, names)| names.as_slice())
    }

    /// Country names in insertion order.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(c, _)| c.as_str())
    }

    /// Iterate `(country, names)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(c, names)| (c.as_str(), names.as_slice()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CountryNames {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (country, names) in &self.entries {
            map.serialize_entry(country, names)?;
        }
        map.end()
    }
}
