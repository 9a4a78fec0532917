//! Canonical `YYYY-MM` period identifiers.

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

/// A calendar month identified by year and 1-indexed month.
///
/// Field order makes the derived ordering chronological, and the rendered
/// `YYYY-MM` text sorts the same way for four-digit years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PeriodId {
    year: i32,
    month: u32,
}

impl PeriodId {
    pub fn new(year: i32, month: u32) -> Result<Self, PeriodParseError> {
        if !(1..=12).contains(&month) {
            return Err(PeriodParseError::MonthOutOfRange(month));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(PeriodParseError::YearOutOfRange(year));
        }
        Ok(Self { year, month })
    }

    /// Returns the period that contains `date`.
    ///
    /// Dates outside years 0..=9999 map to the nearest representable period.
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year().clamp(MIN_YEAR, MAX_YEAR),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First calendar day of the period.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Returns the chronologically preceding period, stepping the year back from January.
    ///
    /// `0000-01` has no predecessor and returns itself.
    pub fn previous(&self) -> Self {
        let (year, month) = match self.month {
            1 => (self.year - 1, 12),
            month => (self.year, month - 1),
        };
        Self::new(year, month).unwrap_or(*self)
    }

    /// Returns the chronologically following period. `9999-12` returns itself.
    pub fn next(&self) -> Self {
        let (year, month) = match self.month {
            12 => (self.year + 1, 1),
            month => (self.year, month + 1),
        };
        Self::new(year, month).unwrap_or(*self)
    }

    /// Long-form label such as `October 2025`.
    pub fn display_label(&self) -> String {
        self.first_day()
            .map(|first| first.format("%B %Y").to_string())
            .unwrap_or_else(|| self.to_string())
    }
}

impl fmt::Display for PeriodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for PeriodId {
    type Err = PeriodParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (year, month) = value
            .split_once('-')
            .ok_or_else(|| PeriodParseError::Malformed(value.to_string()))?;
        if !is_digits(year, 4) || !is_digits(month, 2) {
            return Err(PeriodParseError::Malformed(value.to_string()));
        }
        let year = year
            .parse::<i32>()
            .map_err(|_| PeriodParseError::Malformed(value.to_string()))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| PeriodParseError::Malformed(value.to_string()))?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for PeriodId {
    type Error = PeriodParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PeriodId> for String {
    fn from(period: PeriodId) -> Self {
        period.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors that can occur when constructing [`PeriodId`] values.
pub enum PeriodParseError {
    Malformed(String),
    MonthOutOfRange(u32),
    YearOutOfRange(i32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::Malformed(value) => {
                write!(f, "period `{value}` is not in YYYY-MM form")
            }
            PeriodParseError::MonthOutOfRange(month) => {
                write!(f, "month {month} is outside 1..=12")
            }
            PeriodParseError::YearOutOfRange(year) => {
                write!(f, "year {year} is not a four-digit year")
            }
        }
    }
}

impl std::error::Error for PeriodParseError {}

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}
