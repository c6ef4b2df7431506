//! Draw detection.

use super::super::{Board, Winner};
use tracing::instrument;

/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, winner: Option<&Winner>) -> bool {
    winner.is_none() && board.is_full()
}
