//! dnsvigil binary - encrypted-DNS status from the terminal.

use std::{error::Error, time::Duration};

use clap::Parser;
use futures::StreamExt;
use tokio::time::timeout;
use tracing::info;

use dnsvigil::{
    cli::{Cli, Command, ConfigCommand},
    config::{Config, ConfigPaths},
    services::dns_status::{DnsStatusService, StatusLevel},
    tracing_config,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Status => {
            tracing_config::init_cli_mode()?;
            run_status().await
        }
        Command::Watch => {
            tracing_config::init_with_file()?;
            info!("Starting DNS status watch");
            run_watch().await
        }
        Command::Config { command } => {
            tracing_config::init_cli_mode()?;
            run_config(&command)
        }
    }
}

/// Evaluates the DNS status once.
///
/// Prints the provisional classification immediately, then waits one probe
/// window for the provider confirmation to land before exiting.
async fn run_status() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let settings = config.indicator.to_settings();
    let probe_window = settings.probe_timeout + Duration::from_secs(1);

    let service = DnsStatusService::start(settings).await?;
    let mut levels = service.watch();

    let Some(provisional) = levels.next().await else {
        return Ok(());
    };
    print_level(provisional);

    if let Ok(Some(refined)) = timeout(probe_window, levels.next()).await
        && refined != provisional
    {
        print_level(refined);
    }

    service.stop();
    Ok(())
}

/// Follows the DNS status until Ctrl-C, printing every transition.
async fn run_watch() -> Result<(), Box<dyn Error>> {
    let config = Config::load()?;
    let service = DnsStatusService::start(config.indicator.to_settings()).await?;
    let mut levels = service.watch();

    loop {
        tokio::select! {
            Some(level) = levels.next() => print_level(level),
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    service.stop();
    Ok(())
}

fn run_config(command: &ConfigCommand) -> Result<(), Box<dyn Error>> {
    match command {
        ConfigCommand::Schema => {
            let schema = schemars::schema_for!(Config);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
        ConfigCommand::Path => {
            println!("{}", ConfigPaths::main_config()?.display());
        }
    }

    Ok(())
}

fn print_level(level: StatusLevel) {
    println!("{level} ({})", level.tint());
}
