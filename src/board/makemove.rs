use super::Board;
use crate::{
    rules,
    types::{Move, MoveKind, Piece, PieceKind, Side, Square},
};

/// The reason a move was refused, one variant per validation step in the order the
/// steps run.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum IllegalMove {
    #[error("no piece of {side} on {square}")]
    NotYourPiece { side: Side, square: Square },
    #[error("it is not {0}'s turn")]
    OutOfTurn(Side),
    #[error("the piece does not move")]
    NullMove,
    #[error("{0} is occupied by a piece of the same side")]
    OwnPieceOnTarget(Square),
    #[error("the king on {0} cannot be captured")]
    KingCapture(Square),
    #[error("a {0:?} cannot move that way")]
    InvalidShape(PieceKind),
    #[error("only a pawn reaching the far rank can promote")]
    UnexpectedPromotion,
    #[error("a pawn cannot promote to a {0:?}")]
    InvalidPromotion(PieceKind),
    #[error("the move leaves the king in check")]
    KingInCheck,
}

impl Board {
    /// Submits `mv` on behalf of `side`, applying it if it is legal.
    ///
    /// Returns `false` and leaves the board untouched if the move is illegal. On success the
    /// move is applied in full and the turn passes to the opponent.
    pub fn attempt_move(&mut self, mv: Move, side: Side) -> bool {
        match self.validate(mv, side) {
            Ok(kind) => {
                self.make_move(mv, kind);
                tracing::trace!(%mv, %side, ?kind, "move applied");
                true
            }
            Err(reason) => {
                tracing::debug!(%mv, %side, %reason, "move rejected");
                false
            }
        }
    }

    /// Checks `mv` for `side` without changing the board and returns the effect the move
    /// would have.
    ///
    /// # Errors
    ///
    /// Returns the first rule the move breaks.
    pub fn validate(&self, mv: Move, side: Side) -> Result<MoveKind, IllegalMove> {
        let piece = match self.piece_on(mv.from()) {
            Some(piece) if piece.side == side => piece,
            _ => return Err(IllegalMove::NotYourPiece { side, square: mv.from() }),
        };

        if side != self.side_to_move {
            return Err(IllegalMove::OutOfTurn(side));
        }

        if mv.from() == mv.to() {
            return Err(IllegalMove::NullMove);
        }

        if self.piece_on(mv.to()).is_some_and(|target| target.side == side) {
            return Err(IllegalMove::OwnPieceOnTarget(mv.to()));
        }

        if self.piece_on(mv.to()).is_some_and(|target| target.kind == PieceKind::King) {
            return Err(IllegalMove::KingCapture(mv.to()));
        }

        let kind = rules::rule_for(piece.kind)(self, mv, side).ok_or(IllegalMove::InvalidShape(piece.kind))?;

        match (mv.promotion(), kind.promotion_piece()) {
            (Some(_), None) => return Err(IllegalMove::UnexpectedPromotion),
            (_, Some(promotion)) if !promotion.is_promotion_target() => {
                return Err(IllegalMove::InvalidPromotion(promotion));
            }
            _ => (),
        }

        let mut scratch = self.duplicate();
        scratch.make_move(mv, kind);
        if scratch.in_check(side) {
            return Err(IllegalMove::KingInCheck);
        }

        Ok(kind)
    }

    /// Applies an already validated move together with its side effects.
    fn make_move(&mut self, mv: Move, kind: MoveKind) {
        let Some(mut piece) = self.remove_piece(mv.from()) else {
            panic!("Unexpected empty origin square {}", mv.from());
        };

        match kind {
            MoveKind::EnPassant { captured } => {
                self.remove_piece(captured);
            }
            MoveKind::Castling { rook_from, rook_to } => {
                let Some(rook) = self.remove_piece(rook_from) else {
                    panic!("Unexpected empty rook square {rook_from}");
                };
                self.add_piece(Piece { moved: true, ..rook }, rook_to);
            }
            _ => (),
        }

        if let Some(promotion) = kind.promotion_piece() {
            piece.kind = promotion;
        }

        piece.moved = true;
        self.add_piece(piece, mv.to());

        self.previous = Some(mv);
        self.side_to_move = !self.side_to_move;
    }
}
