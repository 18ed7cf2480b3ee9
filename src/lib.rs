//! Rules of chess for two players sharing one board.
//!
//! A [`Board`] holds the pieces, the side to move and the last applied move. Moves are
//! submitted through [`Board::attempt_move`], usually via the per-side [`Player`] handles
//! of a [`Game`], and are either applied in full or rejected without any change.

pub mod board;
pub mod game;
pub mod rules;
pub mod tools;
pub mod types;

pub use board::{Board, GameStatus, IllegalMove, ParseLayoutError};
pub use game::{Game, Player};
pub use types::*;
