use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use gobarber_core::dashboard::SelectionOutcome;
use gobarber_domain::CalendarMonth;
use tracing::warn;

use crate::cli::DashboardArgs;
use crate::context::AppContext;
use crate::render::render_text;
use crate::utils::logging::log_command_execution;

/// Load the dashboard, apply the requested selection and print the view.
pub async fn run_dashboard(
    context: &AppContext,
    args: &DashboardArgs,
    out: &mut impl Write,
) -> Result<()> {
    let started = Instant::now();
    let service = &context.dashboard;

    service.load().await;

    if let Some(date) = args.date {
        service.change_month(CalendarMonth::of(date)).await;
        if let SelectionOutcome::Rejected(reason) = service.click_day(date).await {
            warn!(%date, ?reason, "requested day is not selectable");
            writeln!(out, "{date} cannot be selected ({reason:?}); showing {}", service.selected_date())?;
        }
    }

    if let Some(month) = args.month {
        service.change_month(month).await;
    }

    let view = service.view();
    if args.json {
        let json = serde_json::to_string_pretty(&view).context("serializing dashboard view")?;
        writeln!(out, "{json}")?;
    } else {
        write!(out, "{}", render_text(&view, service.settings().locale))?;
    }

    log_command_execution("dashboard", started.elapsed(), None);
    Ok(())
}
