//! Calendar handling
//!
//! Invoice dates are calendar dates in the office's local timezone. This
//! module holds the timezone wrapper, the canonical `YYYY-MM-DD` text form
//! used on disk, and the month arithmetic used for payment due dates.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use crate::error::CoreError;

/// Canonical on-disk date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Timezone wrapper for the issuing office
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Timezone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s.trim())
            .map(Timezone)
            .map_err(|_| CoreError::parse("timezone", s))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Returns the local calendar date of a UTC instant
    pub fn date_of(&self, utc: DateTime<Utc>) -> NaiveDate {
        utc.with_timezone(&self.0).date_naive()
    }

    /// Returns today's local calendar date
    pub fn today(&self) -> NaiveDate {
        self.date_of(Utc::now())
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::America::St_Johns)
    }
}

/// Returns the first day of the month following `date`
///
/// December rolls over to January of the next year.
pub fn first_of_next_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    // day 1 exists in every month
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(date)
}

/// Formats a date in the canonical `YYYY-MM-DD` form
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a date from the canonical `YYYY-MM-DD` form
pub fn parse_date(text: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| CoreError::parse("date", text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of_next_month() {
        let mid_july = NaiveDate::from_ymd_opt(2023, 7, 26).unwrap();
        assert_eq!(
            first_of_next_month(mid_july),
            NaiveDate::from_ymd_opt(2023, 8, 1).unwrap()
        );
    }

    #[test]
    fn test_first_of_next_month_rolls_year() {
        let december = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        assert_eq!(
            first_of_next_month(december),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_timezone_parse() {
        let tz: Timezone = "America/Toronto".parse().unwrap();
        assert_eq!(tz.0, chrono_tz::America::Toronto);
        assert!("Mars/Olympus".parse::<Timezone>().is_err());
    }
}
