use super::Board;
use crate::{
    rules,
    types::{Move, PieceKind, Side, Square},
};

/// The state of the game from the point of view of the side to move.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameStatus {
    Ongoing,
    /// The side to move is in check but has a move that escapes it.
    Check,
    Checkmate,
    Stalemate,
}

impl Board {
    /// Returns the square of the king of `side`.
    ///
    /// # Panics
    ///
    /// Panics if `side` has no king, which a game in progress never allows.
    pub fn king_square(&self, side: Side) -> Square {
        match self.pieces_of(side).find(|(_, piece)| piece.kind == PieceKind::King) {
            Some((square, _)) => square,
            None => panic!("Unexpected board without a king for {side}"),
        }
    }

    /// Returns `true` if the square is attacked by pieces of the specified side.
    pub fn is_square_attacked_by(&self, square: Square, side: Side) -> bool {
        self.pieces_of(side).any(|(from, piece)| rules::attacks(self, piece, from, square))
    }

    /// Returns `true` if the king of `side` is attacked.
    pub fn in_check(&self, side: Side) -> bool {
        self.is_square_attacked_by(self.king_square(side), !side)
    }

    /// Generates every legal move for the side to move.
    ///
    /// A pawn reaching the far rank contributes one move per promotion kind.
    pub fn legal_moves(&self) -> Vec<Move> {
        let side = self.side_to_move;
        let mut list = Vec::new();

        for (from, piece) in self.pieces_of(side) {
            for to in Square::iter() {
                let mv = Move::new(from, to);

                if piece.kind == PieceKind::Pawn && to.rank() == side.promotion_rank() {
                    let promotions = PieceKind::PROMOTIONS.map(|kind| mv.with_promotion(kind));
                    list.extend(promotions.into_iter().filter(|&mv| self.validate(mv, side).is_ok()));
                } else if self.validate(mv, side).is_ok() {
                    list.push(mv);
                }
            }
        }

        list
    }

    /// Returns `true` if the side to move has at least one legal move.
    pub fn has_legal_moves(&self) -> bool {
        let side = self.side_to_move;

        self.pieces_of(side)
            .any(|(from, _)| Square::iter().any(|to| self.validate(Move::new(from, to), side).is_ok()))
    }

    pub fn status(&self) -> GameStatus {
        match (self.in_check(self.side_to_move), self.has_legal_moves()) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, true) => GameStatus::Ongoing,
            (false, false) => GameStatus::Stalemate,
        }
    }
}
