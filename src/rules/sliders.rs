use super::{is_diagonal, is_orthogonal, landing};
use crate::{
    board::Board,
    types::{Move, MoveKind, Side},
};

pub fn bishop(board: &Board, mv: Move, side: Side) -> Option<MoveKind> {
    slide::<true, false>(board, mv, side)
}

pub fn rook(board: &Board, mv: Move, side: Side) -> Option<MoveKind> {
    slide::<false, true>(board, mv, side)
}

pub fn queen(board: &Board, mv: Move, side: Side) -> Option<MoveKind> {
    slide::<true, true>(board, mv, side)
}

/// Moves any distance along an allowed line, provided every square in between is empty.
fn slide<const DIAGONAL: bool, const ORTHOGONAL: bool>(board: &Board, mv: Move, side: Side) -> Option<MoveKind> {
    let (file_delta, rank_delta) = mv.delta();
    let shaped = (DIAGONAL && is_diagonal(file_delta, rank_delta)) || (ORTHOGONAL && is_orthogonal(file_delta, rank_delta));

    if !shaped || !board.is_path_clear(mv.from(), mv.to()) {
        return None;
    }

    landing(board, mv.to(), side)
}
