use super::{is_king_step, landing};
use crate::{
    board::Board,
    types::{Move, MoveKind, PieceKind, Side},
};

/// One step in any direction, or a castle.
pub fn rule(board: &Board, mv: Move, side: Side) -> Option<MoveKind> {
    let (file_delta, rank_delta) = mv.delta();

    if is_king_step(file_delta, rank_delta) {
        return landing(board, mv.to(), side);
    }

    if rank_delta == 0 && file_delta.abs() == 2 {
        return castling(board, mv, side);
    }

    None
}

/// A castle moves an unmoved king two squares towards an unmoved rook of its own side,
/// with nothing standing between them, and puts the rook on the square the king crossed.
///
/// The king may not castle out of check, and neither the square it crosses nor the square
/// it lands on may be attacked.
fn castling(board: &Board, mv: Move, side: Side) -> Option<MoveKind> {
    let king = board.piece_on(mv.from())?;
    if king.moved {
        return None;
    }

    let (file_delta, _) = mv.delta();
    let step = file_delta.signum();

    let mut rook_from = mv.from().offset(step, 0)?;
    while board.piece_on(rook_from).is_none() {
        rook_from = rook_from.offset(step, 0)?;
    }

    let rook = board.piece_on(rook_from)?;
    if !rook.is(side, PieceKind::Rook) || rook.moved {
        return None;
    }

    // The rook has to stand beyond the king's landing square.
    if (rook_from.file() as i8 - mv.from().file() as i8).abs() <= 2 {
        return None;
    }

    let rook_to = mv.to().offset(-step, 0)?;
    if [mv.from(), rook_to, mv.to()].iter().any(|&square| board.is_square_attacked_by(square, !side)) {
        return None;
    }

    Some(MoveKind::Castling { rook_from, rook_to })
}
