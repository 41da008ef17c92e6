//! Time-of-day partitioning of a day's appointments

use chrono::{DateTime, TimeZone, Utc};
use gobarber_domain::constants::{HOUR_LABEL_FORMAT, MORNING_CUTOFF_HOUR};
use gobarber_domain::Appointment;
use serde::{Deserialize, Serialize};

/// Appointment ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledAppointment {
    pub appointment: Appointment,
    /// Local start time, `HH:MM`
    pub hour_label: String,
}

impl ScheduledAppointment {
    fn new<Tz>(appointment: &Appointment, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            hour_label: appointment.local_time(tz).format(HOUR_LABEL_FORMAT).to_string(),
            appointment: appointment.clone(),
        }
    }
}

/// A day's appointments split at noon
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// Local hour < 12
    pub morning: Vec<ScheduledAppointment>,
    /// Local hour >= 12
    pub afternoon: Vec<ScheduledAppointment>,
}

impl DaySchedule {
    pub fn is_empty(&self) -> bool {
        self.morning.is_empty() && self.afternoon.is_empty()
    }

    pub fn len(&self) -> usize {
        self.morning.len() + self.afternoon.len()
    }
}

/// Partition `appointments` by local hour, keeping response order inside
/// each bucket.
pub fn bucket_appointments<Tz>(appointments: &[Appointment], tz: &Tz) -> DaySchedule
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let (morning, afternoon): (Vec<_>, Vec<_>) = appointments
        .iter()
        .map(|appointment| ScheduledAppointment::new(appointment, tz))
        .partition(|scheduled| scheduled.appointment.local_hour(tz) < MORNING_CUTOFF_HOUR);

    DaySchedule { morning, afternoon }
}

/// First appointment, in response order, that starts after `now`.
pub fn next_appointment<Tz>(
    appointments: &[Appointment],
    now: DateTime<Utc>,
    tz: &Tz,
) -> Option<ScheduledAppointment>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    appointments
        .iter()
        .find(|appointment| appointment.date > now)
        .map(|appointment| ScheduledAppointment::new(appointment, tz))
}
