//! Strictly Lines - terminal game

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use strictly_lines_tui::cli::{Cli, Command};
use strictly_lines_tui::{AppConfig, init_tracing, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?.with_overrides(cli.size, cli.win_size);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            init_tracing(config.logging())?;
            info!(config_path = %cli.config.display(), "Config resolved");
            run_tui(&config)
        }
        Command::Config => {
            config.rules()?;
            print!("{}", config.to_toml()?);
            Ok(())
        }
    }
}
