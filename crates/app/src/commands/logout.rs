use std::io::Write;
use std::time::Instant;

use anyhow::Result;

use crate::context::AppContext;
use crate::utils::logging::log_command_execution;

/// Sign out and report where navigation ended up.
pub fn run_logout(context: &AppContext, out: &mut impl Write) -> Result<()> {
    let started = Instant::now();

    if let Err(err) = context.dashboard.logout() {
        log_command_execution("logout", started.elapsed(), Some(&err));
        return Err(err.into());
    }

    writeln!(out, "Signed out. Location: {}", context.history.location())?;
    log_command_execution("logout", started.elapsed(), None);
    Ok(())
}
