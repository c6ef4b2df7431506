//! Terminal UI for Strictly Lines

mod app;
mod input;
mod ui;
mod view;

pub use app::App;
pub use input::{Command, command_for};
pub use ui::{CELL_HEIGHT, CELL_WIDTH, board_area, cell_area, draw, tile_at};
pub use view::BoardView;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

use crate::config::AppConfig;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the game until the player quits.
#[instrument(skip_all)]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    let rules = config.rules()?;
    info!(size = rules.size(), win_size = rules.win_size(), "Starting Strictly Lines TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(rules);
    let res = run_game(&mut terminal, &mut app);

    // Restore the terminal even if the loop failed.
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

fn run_game(terminal: &mut Term, app: &mut App) -> Result<()> {
    let win_size = app.engine().rules().win_size();

    loop {
        let status = app.status_message();
        let mut board = Rect::default();
        terminal.draw(|frame| {
            board = draw(frame, &app.view(), win_size, &status);
        })?;
        app.set_board_area(board);

        if app.should_quit() {
            return Ok(());
        }

        let event = event::read().context("Failed to read terminal event")?;
        if let Some(command) = command_for(&event) {
            app.handle(command);
        }
    }
}
