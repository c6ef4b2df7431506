//! Win detection around a freshly placed mark.

use super::super::{Board, Player, Tile};
use derive_more::Display;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A line through the pivot that a win can run along.
///
/// Iteration order is the order axes are checked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

impl Axis {
    /// Column and row deltas of the axis's forward direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
            Axis::MainDiagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }

    /// Collects the contiguous run of `player` marks through `pivot`, sorted.
    ///
    /// The pivot is always included.
    pub fn run(self, board: &Board, player: Player, pivot: Tile) -> Vec<Tile> {
        let (dx, dy) = self.delta();
        let mut line = vec![pivot];

        for (sx, sy) in [(dx, dy), (-dx, -dy)] {
            let mut current = pivot;
            while let Some(next) = current.offset(sx, sy, board.size()) {
                if board.player_at(next) != Some(player) {
                    break;
                }
                line.push(next);
                current = next;
            }
        }

        line.sort_unstable();
        line
    }
}

/// Looks for a winning line through `pivot` for `player`.
///
/// Axes are checked in [`Axis`] order and the first run of at least
/// `win_size` marks is returned in full, sorted by `(x, y)`. Returns `None`
/// when the pivot is not owned by `player` or no axis reaches `win_size`.
#[instrument(skip(board))]
pub fn check_line(board: &Board, player: Player, pivot: Tile, win_size: usize) -> Option<Vec<Tile>> {
    if board.player_at(pivot) != Some(player) {
        return None;
    }

    Axis::iter().find_map(|axis| {
        let line = axis.run(board, player, pivot);
        (line.len() >= win_size).then_some(line)
    })
}
