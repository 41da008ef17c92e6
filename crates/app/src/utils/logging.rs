use std::time::Duration;

use gobarber_domain::GoBarberError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// `command` should be a stable identifier such as `"dashboard"`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&GoBarberError>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => {
            warn!(command, duration_ms, error_kind = err.kind().label(), "command_execution_failure")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn huge_durations_are_logged_without_overflow() {
        log_command_execution("dashboard", Duration::MAX, None);
        log_command_execution(
            "logout",
            Duration::from_millis(12),
            Some(&GoBarberError::Internal("store locked".into())),
        );
    }
}
