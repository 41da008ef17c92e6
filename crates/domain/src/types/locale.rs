//! Display locales and their calendar name tables

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::impl_label_conversions;

const PT_BR_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

const EN_US_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Language used for dashboard labels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR", alias = "pt-br")]
    PtBr,
    #[serde(rename = "en-US", alias = "en-us")]
    EnUs,
}

impl_label_conversions!(Locale {
    PtBr => "pt-BR",
    EnUs => "en-US",
});

impl Locale {
    /// Full month name for a 1-based month. Returns an empty string outside
    /// 1-12.
    pub fn month_name(&self, month: u32) -> &'static str {
        let table = match self {
            Self::PtBr => &PT_BR_MONTHS,
            Self::EnUs => &EN_US_MONTHS,
        };
        month
            .checked_sub(1)
            .and_then(|index| table.get(index as usize))
            .copied()
            .unwrap_or_default()
    }

    /// Full weekday name.
    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        match (self, weekday) {
            (Self::PtBr, Weekday::Mon) => "segunda-feira",
            (Self::PtBr, Weekday::Tue) => "terça-feira",
            (Self::PtBr, Weekday::Wed) => "quarta-feira",
            (Self::PtBr, Weekday::Thu) => "quinta-feira",
            (Self::PtBr, Weekday::Fri) => "sexta-feira",
            (Self::PtBr, Weekday::Sat) => "sábado",
            (Self::PtBr, Weekday::Sun) => "domingo",
            (Self::EnUs, Weekday::Mon) => "Monday",
            (Self::EnUs, Weekday::Tue) => "Tuesday",
            (Self::EnUs, Weekday::Wed) => "Wednesday",
            (Self::EnUs, Weekday::Thu) => "Thursday",
            (Self::EnUs, Weekday::Fri) => "Friday",
            (Self::EnUs, Weekday::Sat) => "Saturday",
            (Self::EnUs, Weekday::Sun) => "Sunday",
        }
    }
}
