//! Command-line interface for strictly_lines.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Lines - line up marks on a square board before your opponent does
#[derive(Parser, Debug)]
#[command(name = "strictly_lines")]
#[command(about = "Two-player N-in-a-row in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "strictly_lines.toml", global = true)]
    pub config: PathBuf,

    /// Board edge length, overriding the config file
    #[arg(long, global = true)]
    pub size: Option<usize>,

    /// Marks in a row needed to win, overriding the config file
    #[arg(long, global = true)]
    pub win_size: Option<usize>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play a two-player game in the terminal
    Play,

    /// Print the effective configuration as TOML
    Config,
}
