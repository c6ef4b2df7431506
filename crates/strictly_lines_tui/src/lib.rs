//! Strictly Lines terminal front end.
//!
//! Wires the [`strictly_lines`] engine to a ratatui board: keyboard focus
//! movement, mouse clicks, winning-line highlighting and reset.
//!
//! # Architecture
//!
//! - **Config**: TOML file plus command-line overrides ([`AppConfig`])
//! - **Logging**: `tracing` to a file so the board stays readable
//! - **TUI**: input mapping, an event-fed [`BoardView`], stateless rendering

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod logging;
pub mod tui;

pub use config::{AppConfig, BoardConfig, ConfigError, LoggingConfig};
pub use logging::init_tracing;
pub use tui::{App, BoardView, Command, board_area, run_tui};
