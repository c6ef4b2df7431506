//! Strictly Lines - pure game logic for an N-in-a-row grid game.
//!
//! Two players alternately mark cells on a square board; the first to line up
//! [`WIN_SIZE`] marks horizontally, vertically or diagonally wins.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Player`], [`Tile`], [`Rules`]
//! - **Rules**: win and draw checks as pure functions ([`rules`])
//! - **Events**: synchronous [`Signal`]s for focus, selection, win and reset
//! - **Engine**: [`GameEngine`] owns the state and drives everything above
//!
//! # Example
//!
//! ```
//! use strictly_lines::{GameEngine, Player, SelectOutcome};
//!
//! let mut engine = GameEngine::new();
//! engine.on_win(|winner| println!("{} wins", winner.player));
//!
//! for x in 0..3 {
//!     engine.select(x, 0); // X
//!     engine.select(x, 1); // O
//! }
//! let outcome = engine.select(3, 0);
//! assert!(matches!(outcome, SelectOutcome::Won(ref w) if w.player == Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod direction;
mod engine;
mod events;
pub mod rules;
mod types;

pub use direction::Direction;
pub use engine::{GameEngine, IgnoreReason, SelectOutcome};
pub use events::{GameEvents, Selection, Signal, SubscriptionId, Winner};
pub use types::{Board, GAME_SIZE, MAX_SIZE, Player, Rules, RulesError, Square, Tile, WIN_SIZE};
