use crate::{
    board::Board,
    types::{Move, MoveKind, PieceKind, Side},
};

/// Pawns only ever move forward: one square onto an empty square, two from an unmoved
/// pawn over an empty path, or one square diagonally to capture, either the piece on the
/// target or, en passant, the pawn that has just passed over it.
///
/// Reaching the far rank turns the move into a promotion. The requested kind defaults to a
/// queen; whether the request itself is acceptable is left to the board.
pub fn rule(board: &Board, mv: Move, side: Side) -> Option<MoveKind> {
    let pawn = board.piece_on(mv.from())?;
    let (file_delta, rank_delta) = mv.delta();
    let forward = side.forward();
    let target = board.piece_on(mv.to());

    let kind = match (file_delta.abs(), rank_delta * forward) {
        (0, 1) if target.is_none() => MoveKind::Quiet,
        (0, 2) if !pawn.moved && target.is_none() => {
            let skipped = mv.from().offset(0, forward)?;
            if board.piece_on(skipped).is_some() {
                return None;
            }
            MoveKind::DoublePush
        }
        (1, 1) => match target {
            Some(piece) if piece.side != side => MoveKind::Capture,
            Some(_) => return None,
            None => MoveKind::EnPassant { captured: board.en_passant_victim(mv.to(), side)? },
        },
        _ => return None,
    };

    if mv.to().rank() != side.promotion_rank() {
        return Some(kind);
    }

    let promotion = mv.promotion().unwrap_or(PieceKind::Queen);
    match kind {
        MoveKind::Quiet => Some(MoveKind::Promotion(promotion)),
        MoveKind::Capture => Some(MoveKind::PromotionCapture(promotion)),
        _ => Some(kind),
    }
}
