//! GoBarber - provider dashboard
//!
//! Command-line front end over the dashboard view-model: wires the API
//! fetchers, session store and navigation history, then renders the view.

pub mod cli;
pub mod commands;
pub mod context;
pub mod render;
pub mod utils;

use anyhow::{bail, Result};
use gobarber_domain::{Config, Session, SessionUser};

pub use cli::{Cli, Commands, DashboardArgs};
pub use context::AppContext;

/// Build the session from CLI flags or their environment fallbacks.
pub fn session_from_cli(cli: &Cli) -> Result<Session> {
    let (Some(token), Some(provider_id)) = (cli.token.clone(), cli.provider_id.clone()) else {
        bail!("no session: pass --token and --provider-id or set GOBARBER_TOKEN and GOBARBER_PROVIDER_ID");
    };

    Ok(Session::new(
        token,
        SessionUser {
            id: provider_id,
            name: cli.provider_name.clone(),
            avatar_url: cli.provider_avatar.clone(),
        },
    ))
}

/// Run the parsed command, writing user-facing output to `out`.
pub async fn run(cli: Cli, config: Config, out: &mut impl std::io::Write) -> Result<()> {
    let session = session_from_cli(&cli)?;
    let context = AppContext::new(config, session)?;

    match &cli.command {
        Commands::Dashboard(args) => commands::run_dashboard(&context, args, out).await,
        Commands::Logout => commands::run_logout(&context, out),
    }
}
