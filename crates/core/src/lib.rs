//! # GoBarber Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Port interfaces (traits) for the remote API, session and navigation
//! - The dashboard view-model and its derived-state calculators
//!
//! ## Architecture Principles
//! - Only depends on `gobarber-domain`
//! - No HTTP or storage code
//! - All external dependencies via traits

pub mod clock;
pub mod dashboard;
pub mod session;

// Re-export specific items to avoid ambiguity
pub use clock::{Clock, FixedClock, SystemClock};
pub use dashboard::{
    AppointmentProvider, AvailabilityProvider, DashboardPorts, DashboardService,
    DashboardSettings, DashboardView,
};
pub use session::{Navigator, SessionStore};
