//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Result;
use clap::Parser;
use nfl_depth_chart::{
    chart::DepthChartStore,
    cli::{Commands, DepthChartCli},
    commands::{
        chart::{handle_backups, handle_chart},
        DepthChartService,
    },
    config::Config,
    server,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = DepthChartCli::parse();
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_directive)),
        )
        .with_writer(std::io::stderr)
        .init();

    match app.command {
        Commands::Serve { bind } => {
            let config = config.with_bind_override(bind.as_deref())?;
            let depth_chart = DepthChartService::new(DepthChartStore::new());
            server::serve(config.bind_addr, depth_chart).await?
        }

        Commands::Chart { roster, json } => handle_chart(&roster, json)?,

        Commands::Backups {
            roster,
            position,
            number,
        } => handle_backups(&roster, position, number)?,
    }

    Ok(())
}
