//! Month availability types returned by
//! `GET /providers/{id}/month-availability`

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{GoBarberError, Result};

/// Bookable status of one day within a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthAvailabilityItem {
    /// Day of month, 1-31
    pub day: u32,
    pub available: bool,
}

impl MonthAvailabilityItem {
    /// Concrete date of this item in `month`, or `None` when the day does not
    /// exist there (day 0, April 31st, ...).
    pub fn date_in(&self, month: CalendarMonth) -> Option<NaiveDate> {
        month.day(self.day)
    }
}

/// A (year, month) pair, month 1-based
///
/// Always refers to a representable month, so the first day is stored
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "MonthParts", into = "MonthParts")]
pub struct CalendarMonth {
    first: NaiveDate,
}

#[derive(Serialize, Deserialize)]
struct MonthParts {
    year: i32,
    month: u32,
}

impl CalendarMonth {
    /// # Errors
    /// Returns `GoBarberError::InvalidInput` when `month` is outside 1-12 or
    /// the year is not representable.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| Self { first }).ok_or_else(|| {
            GoBarberError::InvalidInput(format!("invalid calendar month {year}-{month}"))
        })
    }

    /// Month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        let first = date.with_day(1).unwrap_or(date);
        Self { first }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        self.days().last().unwrap_or(self.first)
    }

    /// Date for a day of this month, if it exists.
    pub fn day(&self, day: u32) -> Option<NaiveDate> {
        self.first.with_day(day)
    }

    /// Every date of the month in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let month = self.first.month();
        self.first.iter_days().take_while(move |date| date.month() == month)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn next(&self) -> Option<Self> {
        self.first.checked_add_months(Months::new(1)).map(|first| Self { first })
    }

    pub fn previous(&self) -> Option<Self> {
        self.first.checked_sub_months(Months::new(1)).map(|first| Self { first })
    }
}

impl TryFrom<MonthParts> for CalendarMonth {
    type Error = GoBarberError;

    fn try_from(parts: MonthParts) -> Result<Self> {
        Self::new(parts.year, parts.month)
    }
}

impl From<CalendarMonth> for MonthParts {
    fn from(month: CalendarMonth) -> Self {
        Self { year: month.year(), month: month.month() }
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for CalendarMonth {
    type Err = GoBarberError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GoBarberError::InvalidInput(format!("expected YYYY-MM, got '{s}'"));
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}
