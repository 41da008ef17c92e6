//! Shared test helpers for `gobarber-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight mocks so that
//! dashboard tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod providers;
pub mod session;

use chrono::{DateTime, NaiveDate, Utc};
use gobarber_domain::{Appointment, AppointmentUser, CalendarMonth, Session, SessionUser};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn month(y: i32, m: u32) -> CalendarMonth {
    CalendarMonth::new(y, m).unwrap()
}

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc)
}

pub fn provider_session() -> Session {
    Session::new(
        "test-token",
        SessionUser {
            id: "provider-42".into(),
            name: "Diego Fernandes".into(),
            avatar_url: Some("https://cdn.example/diego.png".into()),
        },
    )
}

pub fn appointment(id: &str, when: &str, client: &str) -> Appointment {
    Appointment {
        id: id.into(),
        date: at(when),
        user: AppointmentUser { name: client.into(), avatar_url: None },
    }
}
