use super::{is_knight_jump, landing};
use crate::{
    board::Board,
    types::{Move, MoveKind, Side},
};

/// Knights jump, so nothing between origin and target matters.
pub fn rule(board: &Board, mv: Move, side: Side) -> Option<MoveKind> {
    let (file_delta, rank_delta) = mv.delta();
    if !is_knight_jump(file_delta, rank_delta) {
        return None;
    }

    landing(board, mv.to(), side)
}
