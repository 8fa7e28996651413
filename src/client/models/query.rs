//! Query parameter types for generation and billing-unit endpoints

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Date format accepted by every date parameter of the API
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Bucket granularity for `/api-sz/generation/period`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

impl Period {
    /// All granularities accepted by the API.
    pub const ALL: [Period; 4] = [Period::Day, Period::Week, Period::Month, Period::Year];

    /// Wire value of the `period` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ApiError::InvalidInput(format!(
                    "Unknown period '{}'. Expected one of: day, week, month, year",
                    s
                ))
            })
    }
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ApiError> {
    // chrono accepts signs, spaces and unpadded fields, the API does not
    if !is_iso_date_shape(value) {
        return Err(invalid_date(value));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid_date(value))
}

/// Exactly `DDDD-DD-DD` with ASCII digits.
fn is_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

fn invalid_date(value: &str) -> ApiError {
    ApiError::InvalidInput(format!("Invalid date '{}'. Expected YYYY-MM-DD", value))
}

/// Inclusive date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range from two dates, rejecting reversed ranges.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ApiError> {
        if start > end {
            return Err(ApiError::InvalidInput(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Parse both ends from `YYYY-MM-DD` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, ApiError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// `start`/`end` query pairs in wire format.
    pub fn to_query(&self) -> [(&'static str, String); 2] {
        [
            ("start", self.start.format(DATE_FORMAT).to_string()),
            ("end", self.end.format(DATE_FORMAT).to_string()),
        ]
    }
}

/// Boolean flags travel as lowercase strings.
pub(crate) fn flag(value: bool) -> String {
    String::from(if value { "true" } else { "false" })
}
