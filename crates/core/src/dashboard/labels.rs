//! Localized labels for the selected date

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use gobarber_domain::Locale;

/// "Dia 12 de abril" / "Day 12 of April"
pub fn selected_date_label(date: NaiveDate, locale: Locale) -> String {
    let month = locale.month_name(date.month());
    match locale {
        Locale::PtBr => format!("Dia {:02} de {}", date.day(), month),
        Locale::EnUs => format!("Day {:02} of {}", date.day(), month),
    }
}

/// Full weekday name ("segunda-feira" / "Monday")
pub fn selected_weekday_label(date: NaiveDate, locale: Locale) -> String {
    locale.weekday_name(date.weekday()).to_string()
}

/// Calendar day of `now` in `tz`.
pub fn today_in<Tz: TimeZone>(now: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    now.with_timezone(tz).date_naive()
}

/// True iff `date` is the same calendar day as `now` in `tz`; the time of
/// day never matters.
pub fn is_today<Tz: TimeZone>(date: NaiveDate, now: DateTime<Utc>, tz: &Tz) -> bool {
    today_in(now, tz) == date
}
