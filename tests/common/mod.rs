#![allow(dead_code)]

use chesslogic::{Board, Game, Move, PieceKind, Side, Square};

/// Starts a game from a layout drawn rank 8 first.
pub fn game(layout: &str) -> Game {
    Game::new(Board::from_layout(layout).unwrap())
}

/// Parses a move in coordinate notation, such as `e2e4` or `a7a8n`.
pub fn mv(notation: &str) -> Move {
    notation.parse().unwrap()
}

/// Submits a move for `side`.
pub fn play(game: &Game, side: Side, notation: &str) -> bool {
    game.player(side).apply_move(mv(notation))
}

/// Returns the kind and side standing on `square`.
pub fn occupant(game: &Game, square: &str) -> Option<(Side, PieceKind)> {
    let square: Square = square.parse().unwrap();
    game.with_board(|board| board.piece_on(square)).map(|piece| (piece.side, piece.kind))
}

macro_rules! assert_moves {
    ($game:expr, $side:expr, legal: [$($legal:literal),* $(,)?], illegal: [$($illegal:literal),* $(,)?]) => {{
        let board = $game.snapshot();
        $(
            assert!(board.validate(common::mv($illegal), $side).is_err(), "{} should be illegal", $illegal);
        )*
        $(
            assert!(board.validate(common::mv($legal), $side).is_ok(), "{} should be legal", $legal);
        )*
    }};
}

pub(crate) use assert_moves;
