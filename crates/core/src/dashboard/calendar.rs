//! Availability-driven calendar rules
//!
//! The disabled set of a displayed month is always
//! `{weekends} ∪ {days whose availability flag is false}`. A day can be
//! selected only when it carries the "available" modifier: a weekday outside
//! the disabled set.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Weekday};
use gobarber_domain::{CalendarMonth, MonthAvailabilityItem};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Saturday or Sunday
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Weekend dates of `month`.
pub fn weekend_days(month: CalendarMonth) -> BTreeSet<NaiveDate> {
    month.days().filter(|date| is_weekend(*date)).collect()
}

/// Dates of `month` flagged unavailable by the server.
///
/// Items naming a day that does not exist in `month` are skipped.
pub fn unavailable_days(month: CalendarMonth, items: &[MonthAvailabilityItem]) -> BTreeSet<NaiveDate> {
    items
        .iter()
        .filter(|item| !item.available)
        .filter_map(|item| {
            let date = item.date_in(month);
            if date.is_none() {
                debug!(%month, day = item.day, "ignoring availability item outside month");
            }
            date
        })
        .collect()
}

/// Every disabled date of `month`.
pub fn disabled_days(month: CalendarMonth, items: &[MonthAvailabilityItem]) -> BTreeSet<NaiveDate> {
    let mut disabled = weekend_days(month);
    disabled.extend(unavailable_days(month, items));
    disabled
}

/// True when `date` carries the "available" modifier.
pub fn is_selectable(date: NaiveDate, disabled: &BTreeSet<NaiveDate>) -> bool {
    !is_weekend(date) && !disabled.contains(&date)
}

/// Per-day flags a calendar widget needs to style a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayModifiers {
    pub available: bool,
    pub selected: bool,
    pub today: bool,
}

/// One cell of the displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub modifiers: DayModifiers,
}

/// Cells for every day of `month` with their modifiers.
pub fn month_days(
    month: CalendarMonth,
    disabled: &BTreeSet<NaiveDate>,
    selected: NaiveDate,
    today: NaiveDate,
) -> Vec<CalendarDay> {
    month
        .days()
        .map(|date| CalendarDay {
            date,
            modifiers: DayModifiers {
                available: is_selectable(date, disabled),
                selected: date == selected,
                today: date == today,
            },
        })
        .collect()
}
