//! `gobarber` binary entry point

use anyhow::Result;
use clap::Parser;
use gobarber_app::Cli;
use gobarber_domain::Config;
use gobarber_infra::config;
use gobarber_infra::observability::init_tracing;

fn load_config(cli: &Cli) -> (Config, Option<String>) {
    let loaded = match &cli.config {
        Some(path) => config::load_from_file(Some(path.clone()))
            .and_then(|config| config::validate(&config).map(|()| config)),
        None => config::load(),
    };

    match loaded {
        Ok(config) => (config, None),
        Err(err) if cli.config.is_none() => (Config::default(), Some(err.to_string())),
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(2);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, fallback_reason) = load_config(&cli);

    init_tracing(&config.logging)?;
    if let Some(reason) = fallback_reason {
        tracing::warn!(%reason, "using default configuration");
    }

    let mut stdout = std::io::stdout().lock();
    gobarber_app::run(cli, config, &mut stdout).await
}
