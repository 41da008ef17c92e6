//! Domain types and models

pub mod appointment;
pub mod availability;
pub mod locale;
pub mod session;

pub use appointment::{Appointment, AppointmentUser};
pub use availability::{CalendarMonth, MonthAvailabilityItem};
pub use locale::Locale;
pub use session::{Session, SessionUser};
