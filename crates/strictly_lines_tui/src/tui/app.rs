//! Application state and logic.

use ratatui::layout::Rect;
use std::cell::{Ref, RefCell};
use std::rc::Rc;
use strictly_lines::{GameEngine, Rules, SelectOutcome, rules::is_draw};
use tracing::{debug, info, instrument};

use super::input::Command;
use super::ui;
use super::view::BoardView;

/// Main application state.
pub struct App {
    engine: GameEngine,
    view: Rc<RefCell<BoardView>>,
    board_area: Rect,
    should_quit: bool,
}

impl App {
    /// Creates an application playing under `rules`.
    #[instrument]
    pub fn new(rules: Rules) -> Self {
        let mut engine = GameEngine::with_rules(rules);
        let (view, _) = BoardView::attach(&mut engine);
        Self {
            engine,
            view,
            board_area: Rect::default(),
            should_quit: false,
        }
    }

    /// Gets the engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Gets the board view.
    pub fn view(&self) -> Ref<'_, BoardView> {
        self.view.borrow()
    }

    /// Whether the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Records where the board was last drawn so clicks can be mapped to tiles.
    pub fn set_board_area(&mut self, area: Rect) {
        self.board_area = area;
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> String {
        if let Some(winner) = self.engine.winner() {
            format!("Player {} wins! Press 'r' to reset or 'q' to quit.", winner.player)
        } else if is_draw(self.engine.board(), self.engine.winner()) {
            "Draw! Press 'r' to reset or 'q' to quit.".to_string()
        } else {
            format!("Player {}'s turn", self.engine.current_player())
        }
    }

    /// Applies a player command.
    ///
    /// Once someone has won only reset and quit get through.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) {
        match command {
            Command::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Command::Reset => self.engine.reset(),
            _ if self.view.borrow().is_locked() => {
                debug!("Board locked until reset");
            }
            Command::Move(direction) => self.engine.move_focus(direction),
            Command::SelectFocused => {
                if let Some(outcome) = self.engine.select_focused() {
                    log_outcome(&outcome);
                }
            }
            Command::Click { column, row } => self.click(column, row),
        }
    }

    fn click(&mut self, column: u16, row: u16) {
        let size = self.engine.rules().size();
        let Some(tile) = ui::tile_at(self.board_area, size, column, row) else {
            debug!(column, row, "Click outside the board");
            return;
        };

        // Taken tiles don't react to clicks.
        if self.view.borrow().mark(tile).is_some() {
            return;
        }
        let outcome = self.engine.select(tile.x, tile.y);
        log_outcome(&outcome);
    }
}

fn log_outcome(outcome: &SelectOutcome) {
    match outcome {
        SelectOutcome::Placed(selection) => {
            debug!(player = %selection.player, tile = %selection.tile, "Move applied")
        }
        SelectOutcome::Won(winner) => info!(player = %winner.player, "Game won"),
        SelectOutcome::Ignored(reason) => debug!(%reason, "Move ignored"),
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}
