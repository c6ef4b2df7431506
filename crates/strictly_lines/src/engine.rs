//! The game engine: owns the board and turn state and publishes notifications.

use super::direction::Direction;
use super::events::{GameEvents, Selection, SubscriptionId, Winner};
use super::rules::check_line;
use super::types::{Board, Player, Rules, Square, Tile};
use derive_more::Display;
use tracing::{debug, info, instrument, warn};

/// Why a `select` call changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum IgnoreReason {
    /// The coordinates are off the board.
    #[display("Tile {} is outside the board", _0)]
    OutOfBounds(Tile),
    /// The tile already holds a mark.
    #[display("Tile {} is already taken by {}", _0, _1)]
    Occupied(Tile, Player),
}

/// What a `select` call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The mark was placed and did not complete a line.
    Placed(Selection),
    /// The mark was placed and completed a winning line.
    Won(Winner),
    /// Nothing happened.
    Ignored(IgnoreReason),
}

impl SelectOutcome {
    /// Whether a mark was placed.
    pub fn is_placed(&self) -> bool {
        !matches!(self, SelectOutcome::Ignored(_))
    }
}

/// Turn-based N-in-a-row engine.
///
/// Views drive it through [`select`](Self::select),
/// [`select_focused`](Self::select_focused) and
/// [`move_focus`](Self::move_focus), and observe it by subscribing with the
/// `on_*` methods. All notifications are delivered synchronously.
///
/// `select` does not stop accepting marks once a winner exists, and the turn
/// keeps alternating after a win; ending input is the view's job.
#[derive(Debug)]
pub struct GameEngine {
    rules: Rules,
    board: Board,
    current_player: Player,
    cursor: Option<Tile>,
    winner: Option<Winner>,
    events: GameEvents,
}

impl GameEngine {
    /// Creates an engine with the default 5×5, four-in-a-row rules.
    #[instrument]
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    /// Creates an engine with custom board dimensions.
    #[instrument]
    pub fn with_rules(rules: Rules) -> Self {
        let mut engine = Self {
            rules,
            board: Board::from(rules),
            current_player: Player::X,
            cursor: None,
            winner: None,
            events: GameEvents::default(),
        };
        engine.setup();
        engine
    }

    /// Puts the game back at its starting state without notifying anyone.
    #[instrument(skip(self))]
    pub fn setup(&mut self) {
        self.cursor = None;
        self.winner = None;
        self.board = Board::from(self.rules);
        self.current_player = Player::X;
        debug!(size = self.rules.size(), "Board set up");
    }

    /// Restarts the game and emits the reset notification.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.setup();
        info!("Game reset");
        self.events.reset.emit(&());
    }

    /// Places the current player's mark at `(x, y)`.
    ///
    /// Emits the selection, then the win if the mark completes a line, then
    /// hands the turn to the other player. Off-board or occupied tiles are
    /// ignored with no notification and no turn change.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn select(&mut self, x: usize, y: usize) -> SelectOutcome {
        let tile = Tile::new(x, y);

        let square = match self.board.get(tile) {
            Some(square) => square,
            None => {
                warn!(%tile, "Select outside the board ignored");
                return SelectOutcome::Ignored(IgnoreReason::OutOfBounds(tile));
            }
        };
        if let Square::Occupied(owner) = square {
            debug!(%tile, %owner, "Select on occupied tile ignored");
            return SelectOutcome::Ignored(IgnoreReason::Occupied(tile, owner));
        }

        let player = self.current_player;
        if let Err(err) = self.board.set(tile, Square::Occupied(player)) {
            warn!(%tile, err, "Board refused the mark");
            return SelectOutcome::Ignored(IgnoreReason::OutOfBounds(tile));
        }
        let selection = Selection { player, tile };
        debug!(%tile, "Mark placed");
        self.events.select.emit(&selection);

        let outcome = match check_line(&self.board, player, tile, self.rules.win_size()) {
            Some(line) => {
                let winner = Winner { player, line };
                info!(%player, line = ?winner.line, "Winning line");
                debug!(board = %self.board, "Final position");
                self.winner = Some(winner.clone());
                self.events.win.emit(&winner);
                SelectOutcome::Won(winner)
            }
            None => SelectOutcome::Placed(selection),
        };

        self.current_player = player.opponent();
        outcome
    }

    /// Selects the focused tile. Does nothing when no tile is focused.
    #[instrument(skip(self))]
    pub fn select_focused(&mut self) -> Option<SelectOutcome> {
        let tile = self.cursor?;
        Some(self.select(tile.x, tile.y))
    }

    /// Returns the player occupying `(x, y)`; `None` for an empty tile.
    pub fn player_at(&self, x: usize, y: usize) -> Option<Player> {
        self.board.player_at(Tile::new(x, y))
    }

    /// Moves the focus one tile, clamped to the board.
    ///
    /// The first call only focuses `(0, 0)`, whatever the direction. Later
    /// calls emit a focus notification only when the focus actually moved.
    #[instrument(skip(self))]
    pub fn move_focus(&mut self, direction: Direction) {
        let next = match self.cursor {
            None => Tile::new(0, 0),
            Some(current) => {
                let next = direction.step(current, self.rules.size());
                if next == current {
                    return;
                }
                next
            }
        };

        self.cursor = Some(next);
        debug!(tile = %next, "Focus moved");
        self.events.focus.emit(&next);
    }

    /// Subscribes to focus changes.
    pub fn on_focus<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Tile) + 'static,
    {
        self.events.focus.subscribe(callback)
    }

    /// Subscribes to placed marks.
    pub fn on_select<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Selection) + 'static,
    {
        self.events.select.subscribe(callback)
    }

    /// Subscribes to wins.
    pub fn on_win<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&Winner) + 'static,
    {
        self.events.win.subscribe(callback)
    }

    /// Subscribes to resets.
    pub fn on_reset<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&()) + 'static,
    {
        self.events.reset.subscribe(callback)
    }

    /// Drops a subscription made with any `on_*` method.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let removed = self.events.unsubscribe(id);
        debug!(%id, removed, remaining = self.events.subscriber_count(), "Unsubscribed");
        removed
    }

    /// Board dimensions and win length.
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose mark the next `select` places.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// The focused tile, if focus has been set.
    pub fn cursor(&self) -> Option<Tile> {
        self.cursor
    }

    /// The winner, once a line has been formed.
    pub fn winner(&self) -> Option<&Winner> {
        self.winner.as_ref()
    }

    /// Whether a winner has been declared.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
