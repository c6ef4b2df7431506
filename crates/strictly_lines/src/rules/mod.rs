//! Game rules for the lines game.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the engine so views and tests can evaluate positions directly.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{Axis, check_line};
