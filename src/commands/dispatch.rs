//! Command dispatch logic for msgram

use std::time::Instant;

use msgram_core::config::ReaderConfig;
use msgram_core::error::Result;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Preconfig { path }) => {
            let config = reader_config(cli)?;
            debug!(elapsed = ?start.elapsed(), "load_config");
            commands::preconfig::execute(cli, &config, path)
        }

        Some(Commands::Components { path }) => {
            let config = reader_config(cli)?;
            debug!(elapsed = ?start.elapsed(), "load_config");
            commands::components::execute(cli, &config, path)
        }

        Some(Commands::Metrics) => commands::metrics::execute(cli),

        Some(Commands::Response { status, body }) => {
            commands::response::execute(cli, *status, body.as_deref())
        }
    }
}

/// Reader configuration from `--config`, with command-line overrides applied
pub fn reader_config(cli: &Cli) -> Result<ReaderConfig> {
    let mut config = ReaderConfig::load_or_default(cli.config.as_deref())?;

    if let Some(mode) = cli.weight_sum_mode {
        config.weight_sum_mode = mode;
    }
    if let Some(order) = cli.key_order {
        config.key_order = order;
    }

    Ok(config)
}

fn handle_no_command() -> Result<()> {
    println!("msgram {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Validates MeasureSoftGram pre-configurations and Sonar exports.");
    println!();
    println!("Run `msgram --help` for usage information.");
    Ok(())
}
