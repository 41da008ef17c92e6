//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Schedule partitioning
/// Appointments starting before this local hour belong to the morning.
pub const MORNING_CUTOFF_HOUR: u32 = 12;
/// Format used for appointment hour labels.
pub const HOUR_LABEL_FORMAT: &str = "%H:%M";

// Navigation
pub const ROOT_PATH: &str = "/";

// Remote API defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_MAX_ATTEMPTS: usize = 1;
pub const DEFAULT_TIMEZONE: &str = "UTC";
