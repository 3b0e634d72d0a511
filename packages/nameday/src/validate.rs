//! Input validation for name day queries.

use chrono::{Datelike, NaiveDate};

use crate::error::{NameDayError, Result};
use crate::types::{Month, NameDayQuery};

/// Validate a month name and day against the current calendar year.
///
/// # Arguments
/// * `month` - Month name, compared case-insensitively
/// * `day` - Day of month
///
/// # Returns
/// * `Ok(NameDayQuery)` if the pair names a real date this year
/// * `Err(NameDayError::InvalidMonth)` for an unknown month name
/// * `Err(NameDayError::InvalidRange)` for a day outside the month
pub fn validate(month: &str, day: i64) -> Result<NameDayQuery> {
    let year = chrono::Local::now().year();
    validate_in_year(month, day, year)
}

/// Validate a month name and day against an explicit year.
///
/// February 29 is only accepted in leap years.
///
/// # Examples
/// ```
/// use nameday_calendar::validate::validate_in_year;
///
/// assert!(validate_in_year("february", 29, 2024).is_ok());
/// assert!(validate_in_year("february", 29, 2025).is_err());
/// assert!(validate_in_year("smarch", 1, 2025).is_err());
/// ```
pub fn validate_in_year(month: &str, day: i64, year: i32) -> Result<NameDayQuery> {
    let month =
        Month::from_name(month).ok_or_else(|| NameDayError::InvalidMonth(month.to_string()))?;

    let out_of_range = || NameDayError::InvalidRange { month, day, year };
    let day_u32 = u32::try_from(day).map_err(|_| out_of_range())?;
    NaiveDate::from_ymd_opt(year, month.number(), day_u32).ok_or_else(out_of_range)?;

    Ok(NameDayQuery::new(month, day_u32))
}
