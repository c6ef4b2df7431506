//! Core domain types for the lines game.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

/// Default board edge length.
pub const GAME_SIZE: usize = 5;

/// Default number of contiguous marks needed to win.
pub const WIN_SIZE: usize = 4;

/// Largest supported board edge length.
pub const MAX_SIZE: usize = 64;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupant, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// A board coordinate. `x` is the column, `y` is the row; `(0, 0)` is top-left.
///
/// Ordering is by `x`, then `y`, which is the order winning lines are reported in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display("({}, {})", x, y)]
pub struct Tile {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Tile {
    /// Creates a tile at column `x`, row `y`.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns the neighbouring tile `(x + dx, y + dy)` if it lies on a board of `size`.
    pub fn offset(self, dx: isize, dy: isize, size: usize) -> Option<Tile> {
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        (x < size && y < size).then_some(Tile { x, y })
    }
}

impl From<(usize, usize)> for Tile {
    fn from((x, y): (usize, usize)) -> Self {
        Tile::new(x, y)
    }
}

/// Board dimensions and win length, fixed for the lifetime of an engine.
///
/// Only [`Rules::new`] builds non-default rules, so a `Rules` value always
/// satisfies `1 <= win_size <= size <= MAX_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rules {
    size: usize,
    win_size: usize,
}

impl Rules {
    /// Creates rules for a `size`×`size` board where `win_size` in a row wins.
    ///
    /// Fails unless `1 <= win_size <= size <= MAX_SIZE`.
    #[track_caller]
    #[instrument]
    pub fn new(size: usize, win_size: usize) -> Result<Self, RulesError> {
        if size == 0 {
            return Err(RulesError::new("board size must be at least 1"));
        }
        if size > MAX_SIZE {
            return Err(RulesError::new(format!(
                "board size must be at most {}, got {}",
                MAX_SIZE, size
            )));
        }
        if win_size == 0 || win_size > size {
            return Err(RulesError::new(format!(
                "win size must be between 1 and {}, got {}",
                size, win_size
            )));
        }
        Ok(Self { size, win_size })
    }

    /// Board edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Contiguous marks needed to win.
    pub fn win_size(&self) -> usize {
        self.win_size
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            size: GAME_SIZE,
            win_size: WIN_SIZE,
        }
    }
}

/// Invalid board dimensions.
#[derive(Debug, Clone, Display, Error)]
#[display("Rules error: {} at {}:{}", message, file, line)]
pub struct RulesError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RulesError {
    /// Creates a new rules error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Square `size`×`size` board stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    ///
    /// Fails when `size` is larger than [`MAX_SIZE`].
    #[track_caller]
    pub fn new(size: usize) -> Result<Self, RulesError> {
        let cells = match size.checked_mul(size) {
            Some(cells) if size <= MAX_SIZE => cells,
            _ => {
                return Err(RulesError::new(format!(
                    "board size must be at most {}, got {}",
                    MAX_SIZE, size
                )));
            }
        };
        Ok(Self {
            size,
            squares: vec![Square::Empty; cells],
        })
    }

    /// Board edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `tile` lies on the board.
    pub fn contains(&self, tile: Tile) -> bool {
        tile.x < self.size && tile.y < self.size
    }

    fn index(&self, tile: Tile) -> Option<usize> {
        self.contains(tile).then(|| tile.y * self.size + tile.x)
    }

    /// Gets the square at `tile`, or `None` when off the board.
    pub fn get(&self, tile: Tile) -> Option<Square> {
        self.index(tile).map(|i| self.squares[i])
    }

    /// Returns the player occupying `tile`. Empty and off-board tiles read as `None`.
    pub fn player_at(&self, tile: Tile) -> Option<Player> {
        self.get(tile).and_then(Square::player)
    }

    /// Sets the square at `tile`.
    pub fn set(&mut self, tile: Tile, square: Square) -> Result<(), &'static str> {
        let index = self.index(tile).ok_or("Tile out of bounds")?;
        self.squares[index] = square;
        Ok(())
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Iterates over every tile with its square, row by row.
    pub fn squares(&self) -> impl Iterator<Item = (Tile, Square)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .map(|(i, square)| (Tile::new(i % self.size, i / self.size), *square))
    }
}

impl From<Rules> for Board {
    fn from(rules: Rules) -> Self {
        // Rules keeps size within MAX_SIZE.
        Self {
            size: rules.size,
            squares: vec![Square::Empty; rules.size * rules.size],
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::from(Rules::default())
    }
}

/// One row per line: `.` for empty, `X` or `O` for a mark.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (tile, square)) in self.squares().enumerate() {
            if i > 0 && tile.x == 0 {
                writeln!(f)?;
            }
            let symbol = match square {
                Square::Empty => '.',
                Square::Occupied(Player::X) => 'X',
                Square::Occupied(Player::O) => 'O',
            };
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(Player::X.to_string(), "X");
        assert_eq!(Player::O.to_string(), "O");
    }

    #[test]
    fn test_tile_offset_stays_on_board() {
        let tile = Tile::new(0, 4);
        assert_eq!(tile.offset(-1, 0, 5), None);
        assert_eq!(tile.offset(0, 1, 5), None);
        assert_eq!(tile.offset(1, -1, 5), Some(Tile::new(1, 3)));
    }

    #[test]
    fn test_tiles_sort_by_column_then_row() {
        let mut tiles = vec![Tile::new(2, 0), Tile::new(0, 3), Tile::new(0, 1)];
        tiles.sort();
        assert_eq!(tiles, vec![Tile::new(0, 1), Tile::new(0, 3), Tile::new(2, 0)]);
    }

    #[test]
    fn test_rules_reject_win_size_larger_than_board() {
        assert!(Rules::new(3, 4).is_err());
        assert!(Rules::new(3, 0).is_err());
        assert!(Rules::new(0, 0).is_err());
        assert!(Rules::new(3, 3).is_ok());
    }

    #[test]
    fn test_rules_reject_oversized_board() {
        assert!(Rules::new(MAX_SIZE, 1).is_ok());
        assert!(Rules::new(MAX_SIZE + 1, 1).is_err());

        let err = Rules::new(usize::MAX, 1).unwrap_err();
        assert!(err.message.contains("at most"));
    }

    #[test]
    fn test_board_rejects_oversized_size() {
        assert!(Board::new(usize::MAX).is_err());
        assert!(Board::new(100_000).is_err());
        assert_eq!(Board::new(MAX_SIZE).unwrap().size(), MAX_SIZE);
    }

    #[test]
    fn test_board_from_rules() {
        let board = Board::from(Rules::new(7, 3).unwrap());
        assert_eq!(board.size(), 7);
        assert_eq!(board.squares().count(), 49);
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_default_rules() {
        let rules = Rules::default();
        assert_eq!(rules.size(), GAME_SIZE);
        assert_eq!(rules.win_size(), WIN_SIZE);
    }

    #[test]
    fn test_board_set_and_get() {
        let mut board = Board::new(5).unwrap();
        board.set(Tile::new(3, 1), Square::Occupied(Player::O)).unwrap();
        assert_eq!(board.player_at(Tile::new(3, 1)), Some(Player::O));
        assert_eq!(board.player_at(Tile::new(1, 3)), None);
        assert_eq!(board.occupied(), 1);
    }

    #[test]
    fn test_board_rejects_out_of_bounds() {
        let mut board = Board::new(5).unwrap();
        assert!(board.set(Tile::new(5, 0), Square::Occupied(Player::X)).is_err());
        assert_eq!(board.get(Tile::new(0, 5)), None);
        assert!(!board.contains(Tile::new(0, 5)));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2).unwrap();
        for (tile, _) in Board::new(2).unwrap().squares() {
            board.set(tile, Square::Occupied(Player::X)).unwrap();
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3).unwrap();
        board.set(Tile::new(0, 0), Square::Occupied(Player::X)).unwrap();
        board.set(Tile::new(2, 1), Square::Occupied(Player::O)).unwrap();
        assert_eq!(board.to_string(), "X..\n..O\n...");
    }
}
