//! Command-line interface

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use gobarber_domain::CalendarMonth;

#[derive(Debug, Parser)]
#[command(name = "gobarber")]
#[command(about = "Provider dashboard for the GoBarber scheduling API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (JSON or TOML); defaults to environment, then probing
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Bearer token of the signed-in provider
    #[arg(long, env = "GOBARBER_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    #[arg(long, env = "GOBARBER_PROVIDER_ID", global = true)]
    pub provider_id: Option<String>,

    #[arg(long, env = "GOBARBER_PROVIDER_NAME", global = true, default_value = "Provider")]
    pub provider_name: String,

    #[arg(long, env = "GOBARBER_PROVIDER_AVATAR", global = true)]
    pub provider_avatar: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch and print the dashboard
    Dashboard(DashboardArgs),

    /// Clear the session and return to the root page
    Logout,
}

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Day to select (YYYY-MM-DD); must be an available weekday
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Month to display (YYYY-MM)
    #[arg(long)]
    pub month: Option<CalendarMonth>,

    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,
}
