//! Display-ready dashboard snapshot
//!
//! Everything here is recomputed from [`DashboardState`] on demand; the cost
//! is a few dozen dates and a handful of appointments.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use gobarber_domain::{CalendarMonth, DashboardConfig, GoBarberError, Locale, Result, Session, SessionUser};
use serde::Serialize;

use super::calendar::{month_days, CalendarDay};
use super::labels::{is_today, selected_date_label, selected_weekday_label, today_in};
use super::schedule::{bucket_appointments, next_appointment, DaySchedule, ScheduledAppointment};
use super::state::{DashboardState, Notice};

/// Timezone and language used for derived values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSettings {
    pub timezone: Tz,
    pub locale: Locale,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self { timezone: Tz::UTC, locale: Locale::default() }
    }
}

impl DashboardSettings {
    /// # Errors
    /// Returns `GoBarberError::Config` for an unknown IANA timezone.
    pub fn from_config(config: &DashboardConfig) -> Result<Self> {
        let timezone = config.timezone.parse::<Tz>().map_err(|e| {
            GoBarberError::Config(format!("Invalid timezone '{}': {}", config.timezone, e))
        })?;
        Ok(Self { timezone, locale: config.locale })
    }

    /// Calendar day of `now` in the configured timezone.
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        today_in(now, &self.timezone)
    }
}

/// Everything the dashboard renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub provider: SessionUser,
    pub selected_date: NaiveDate,
    pub selected_date_label: String,
    pub selected_weekday_label: String,
    pub is_today: bool,
    pub current_month: CalendarMonth,
    pub days: Vec<CalendarDay>,
    pub disabled_days: Vec<NaiveDate>,
    /// False until appointments for the selected date have been fetched
    pub schedule_loaded: bool,
    pub schedule: DaySchedule,
    /// Only computed when the selected date is today
    pub next_appointment: Option<ScheduledAppointment>,
    pub notices: Vec<Notice>,
}

impl DashboardView {
    /// Derive the view from state, session and clock.
    pub fn build(
        state: &DashboardState,
        session: &Session,
        now: DateTime<Utc>,
        settings: &DashboardSettings,
    ) -> Self {
        let tz = &settings.timezone;
        let selected = state.selected_date();
        let disabled = state.disabled_days();
        let today = is_today(selected, now, tz);

        let appointments = state.appointments();
        let schedule =
            appointments.map(|items| bucket_appointments(items, tz)).unwrap_or_default();
        let next = match appointments {
            Some(items) if today => next_appointment(items, now, tz),
            _ => None,
        };

        Self {
            provider: session.user.clone(),
            selected_date: selected,
            selected_date_label: selected_date_label(selected, settings.locale),
            selected_weekday_label: selected_weekday_label(selected, settings.locale),
            is_today: today,
            current_month: state.current_month(),
            days: month_days(state.current_month(), &disabled, selected, settings.today(now)),
            disabled_days: disabled.into_iter().collect(),
            schedule_loaded: appointments.is_some(),
            schedule,
            next_appointment: next,
            notices: state.notices().to_vec(),
        }
    }
}
