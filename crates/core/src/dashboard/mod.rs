//! Provider dashboard view-model
//!
//! - [`ports`]: availability and appointment fetchers
//! - [`calendar`], [`labels`], [`schedule`]: pure derived-state calculators
//! - [`state`]: selection state, fetch tickets and notices
//! - [`view`]: display snapshot
//! - [`service`]: wiring of state, fetchers and session

pub mod calendar;
pub mod labels;
pub mod ports;
pub mod schedule;
pub mod service;
pub mod state;
pub mod view;

pub use calendar::{disabled_days, is_selectable, is_weekend, CalendarDay, DayModifiers};
pub use ports::{AppointmentProvider, AvailabilityProvider};
pub use schedule::{bucket_appointments, next_appointment, DaySchedule, ScheduledAppointment};
pub use service::{DashboardPorts, DashboardService};
pub use state::{
    ApplyOutcome, DashboardState, FetchSlot, FetchTicket, Notice, RejectReason, SelectionOutcome,
};
pub use view::{DashboardSettings, DashboardView};
