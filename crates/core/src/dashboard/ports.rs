//! Port interfaces for dashboard data
//!
//! These traits define the boundaries between the dashboard logic and the
//! remote scheduling API.

use async_trait::async_trait;
use chrono::NaiveDate;
use gobarber_domain::{Appointment, CalendarMonth, MonthAvailabilityItem, Result};

/// Source of day-by-day availability for a provider
#[async_trait]
pub trait AvailabilityProvider: Send + Sync {
    /// Availability of every day of `month` for `provider_id`
    async fn month_availability(
        &self,
        provider_id: &str,
        month: CalendarMonth,
    ) -> Result<Vec<MonthAvailabilityItem>>;
}

/// Source of the signed-in provider's appointments
#[async_trait]
pub trait AppointmentProvider: Send + Sync {
    /// Appointments booked on `date`, in server order
    async fn day_appointments(&self, date: NaiveDate) -> Result<Vec<Appointment>>;
}
