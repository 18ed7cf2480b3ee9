//! A game session and the per-side handles through which moves are submitted.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{
    board::{Board, GameStatus},
    types::{Move, Side},
};

/// Owns the board of one game.
///
/// The board lives behind a mutex so that both [`Player`] handles can be used from
/// wherever the session is shared. The lock is held for one complete validate and apply,
/// so nobody ever observes a half-applied move.
#[derive(Debug, Default)]
pub struct Game {
    board: Mutex<Board>,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self { board: Mutex::new(board) }
    }

    /// Returns a handle that submits moves on behalf of `side`.
    pub fn player(&self, side: Side) -> Player<'_> {
        Player { board: &self.board, side }
    }

    /// Returns an independent copy of the current board.
    pub fn snapshot(&self) -> Board {
        self.lock().duplicate()
    }

    pub fn set_side_to_move(&self, side: Side) {
        self.lock().set_side_to_move(side);
    }

    pub fn status(&self) -> GameStatus {
        self.lock().status()
    }

    /// Runs `f` against the board while holding the lock.
    pub fn with_board<T>(&self, f: impl FnOnce(&Board) -> T) -> T {
        f(&self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Board> {
        lock(&self.board)
    }
}

/// A handle bound to one side of a [`Game`].
///
/// It does not own the board; any number of handles may exist for the same game.
#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    board: &'a Mutex<Board>,
    side: Side,
}

impl Player<'_> {
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Submits `mv` for the bound side. Returns `true` if the move was legal and applied.
    pub fn apply_move(&self, mv: Move) -> bool {
        lock(self.board).attempt_move(mv, self.side)
    }
}

// Moves are applied only once validation has passed, so a poisoned board is still whole.
fn lock(board: &Mutex<Board>) -> MutexGuard<'_, Board> {
    board.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::Game;
    use crate::{
        board::{Board, GameStatus},
        types::{Move, Side, Square},
    };

    #[test]
    fn players_share_one_board() {
        let game = Game::default();
        let one = game.player(Side::PlayerOne);
        let two = game.player(Side::PlayerTwo);

        assert_eq!(one.side(), Side::PlayerOne);
        assert_eq!(two.side(), Side::PlayerTwo);

        assert!(!two.apply_move(Move::new(Square::E7, Square::E5)));
        assert!(one.apply_move(Move::new(Square::E2, Square::E4)));
        assert!(!one.apply_move(Move::new(Square::D2, Square::D4)));
        assert!(two.apply_move(Move::new(Square::E7, Square::E5)));

        let board = game.snapshot();
        assert_eq!(board.side_to_move(), Side::PlayerOne);
        assert_eq!(board.previous_move(), Some(Move::new(Square::E7, Square::E5)));
    }

    #[test]
    fn snapshot_is_detached() {
        let game = Game::new(Board::starting_position());
        let before = game.snapshot();

        assert!(game.player(Side::PlayerOne).apply_move(Move::new(Square::G1, Square::F3)));
        assert_eq!(before, Board::starting_position());
        assert_ne!(game.snapshot(), before);
    }

    #[test]
    fn side_to_move_can_be_forced() {
        let game = Game::default();
        game.set_side_to_move(Side::PlayerTwo);

        assert!(!game.player(Side::PlayerOne).apply_move(Move::new(Square::E2, Square::E4)));
        assert!(game.player(Side::PlayerTwo).apply_move(Move::new(Square::E7, Square::E5)));
        assert_eq!(game.with_board(Board::side_to_move), Side::PlayerOne);
        assert_eq!(game.status(), GameStatus::Ongoing);
    }

    #[test]
    fn players_across_threads() {
        let game = Game::default();
        let moves = [("e2e4", "e7e5"), ("g1f3", "b8c6"), ("f1c4", "g8f6")];

        std::thread::scope(|scope| {
            for side in [Side::PlayerOne, Side::PlayerTwo] {
                let player = game.player(side);

                scope.spawn(move || {
                    for (first, second) in moves {
                        let mv = if side == Side::PlayerOne { first } else { second };
                        while !player.apply_move(mv.parse().unwrap()) {
                            std::thread::yield_now();
                        }
                    }
                });
            }
        });

        let board = game.snapshot();
        assert_eq!(board.side_to_move(), Side::PlayerOne);
        assert_eq!(board.piece_on(Square::C4).map(|piece| piece.kind), Some(crate::types::PieceKind::Bishop));
    }
}
