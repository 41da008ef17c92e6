use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use gobarber_core::{AppointmentProvider, AvailabilityProvider};
use gobarber_domain::{
    Appointment, CalendarMonth, GoBarberError, MonthAvailabilityItem, Result as DomainResult,
};

/// In-memory mock for `AvailabilityProvider`.
///
/// Responds per month with a seeded result (empty list when unseeded) after
/// an optional per-month delay, and records every call.
#[derive(Default, Clone)]
pub struct MockAvailabilityProvider {
    responses: Arc<Mutex<HashMap<CalendarMonth, DomainResult<Vec<MonthAvailabilityItem>>>>>,
    delays: Arc<Mutex<HashMap<CalendarMonth, Duration>>>,
    calls: Arc<Mutex<Vec<(String, CalendarMonth)>>>,
}

impl MockAvailabilityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_month(self, month: CalendarMonth, items: Vec<MonthAvailabilityItem>) -> Self {
        self.responses.lock().unwrap().insert(month, Ok(items));
        self
    }

    pub fn failing(self, month: CalendarMonth, error: GoBarberError) -> Self {
        self.responses.lock().unwrap().insert(month, Err(error));
        self
    }

    pub fn with_delay(self, month: CalendarMonth, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(month, delay);
        self
    }

    pub fn calls(&self) -> Vec<(String, CalendarMonth)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AvailabilityProvider for MockAvailabilityProvider {
    async fn month_availability(
        &self,
        provider_id: &str,
        month: CalendarMonth,
    ) -> DomainResult<Vec<MonthAvailabilityItem>> {
        self.calls.lock().unwrap().push((provider_id.to_string(), month));

        let delay = self.delays.lock().unwrap().get(&month).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.responses.lock().unwrap().get(&month).cloned().unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// In-memory mock for `AppointmentProvider`, keyed by date.
#[derive(Default, Clone)]
pub struct MockAppointmentProvider {
    responses: Arc<Mutex<HashMap<NaiveDate, DomainResult<Vec<Appointment>>>>>,
    delays: Arc<Mutex<HashMap<NaiveDate, Duration>>>,
    calls: Arc<Mutex<Vec<NaiveDate>>>,
}

impl MockAppointmentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day(self, date: NaiveDate, appointments: Vec<Appointment>) -> Self {
        self.responses.lock().unwrap().insert(date, Ok(appointments));
        self
    }

    pub fn failing(self, date: NaiveDate, error: GoBarberError) -> Self {
        self.responses.lock().unwrap().insert(date, Err(error));
        self
    }

    pub fn with_delay(self, date: NaiveDate, delay: Duration) -> Self {
        self.delays.lock().unwrap().insert(date, delay);
        self
    }

    pub fn calls(&self) -> Vec<NaiveDate> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AppointmentProvider for MockAppointmentProvider {
    async fn day_appointments(&self, date: NaiveDate) -> DomainResult<Vec<Appointment>> {
        self.calls.lock().unwrap().push(date);

        let delay = self.delays.lock().unwrap().get(&date).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        self.responses.lock().unwrap().get(&date).cloned().unwrap_or_else(|| Ok(Vec::new()))
    }
}
