use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use oz_advisor::cli::{Cli, Commands};
use oz_advisor::{commands, logging};

#[tokio::main]
#[cfg(not(tarpaulin_include))] // Skip coverage - process entry point
async fn main() -> Result<ExitCode> {
  let cli = Cli::parse();
  logging::init(cli.verbose);

  let config = commands::load_config(cli.config.as_deref())?;

  match cli.command {
    Commands::Ideas(args) => commands::ideas::handle(args, config).await,
    Commands::Tooltip(args) => commands::tooltip::handle(args, config).await.map(|_| ExitCode::SUCCESS),
    Commands::Config { save } => commands::config::handle(&config, save).map(|_| ExitCode::SUCCESS),
  }
}
