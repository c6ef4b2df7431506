//! Focus movement directions.

use super::types::Tile;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// One step of keyboard focus movement.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// Column and row deltas for one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Moves `from` one step on a board of `size`, staying put at the edge.
    pub fn step(self, from: Tile, size: usize) -> Tile {
        let (dx, dy) = self.delta();
        from.offset(dx, dy, size).unwrap_or(from)
    }
}
