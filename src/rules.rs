//! Movement rules, one per piece kind.
//!
//! A rule decides whether a move has a legal shape for the piece standing on its origin,
//! given the current occupancy, and if so what the move does. Ownership and turn order
//! are checked once by the board before any rule runs, and so is the final question of
//! whether the move exposes the mover's own king.

use crate::{
    board::Board,
    types::{Move, MoveKind, Piece, PieceKind, Side, Square},
};

mod king;
mod knight;
mod pawn;
mod sliders;

/// Returns the effect of `mv` if the piece kind may make it, otherwise `None`.
pub type Rule = fn(&Board, Move, Side) -> Option<MoveKind>;

const RULES: [Rule; PieceKind::NUM] = [
    pawn::rule,
    knight::rule,
    sliders::bishop,
    sliders::rook,
    sliders::queen,
    king::rule,
];

pub fn rule_for(kind: PieceKind) -> Rule {
    RULES[kind]
}

/// Returns `true` if `piece`, standing on `from`, attacks `target`.
///
/// Whatever stands on `target` is ignored, so this answers "could a capture land here".
pub fn attacks(board: &Board, piece: Piece, from: Square, target: Square) -> bool {
    let (file_delta, rank_delta) = Move::new(from, target).delta();

    match piece.kind {
        PieceKind::Pawn => file_delta.abs() == 1 && rank_delta == piece.side.forward(),
        PieceKind::Knight => is_knight_jump(file_delta, rank_delta),
        PieceKind::Bishop => is_diagonal(file_delta, rank_delta) && board.is_path_clear(from, target),
        PieceKind::Rook => is_orthogonal(file_delta, rank_delta) && board.is_path_clear(from, target),
        PieceKind::Queen => {
            (is_diagonal(file_delta, rank_delta) || is_orthogonal(file_delta, rank_delta))
                && board.is_path_clear(from, target)
        }
        PieceKind::King => is_king_step(file_delta, rank_delta),
    }
}

/// Iterates over the squares strictly between two squares on a shared line.
///
/// Yields nothing for adjacent squares or squares that share no line.
pub fn between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let (file_delta, rank_delta) = Move::new(from, to).delta();
    let aligned = is_diagonal(file_delta, rank_delta) || is_orthogonal(file_delta, rank_delta);
    let steps = if aligned { file_delta.abs().max(rank_delta.abs()) } else { 0 };

    (1..steps).filter_map(move |step| from.offset(file_delta.signum() * step, rank_delta.signum() * step))
}

/// The outcome of landing on `to`: a quiet move, a capture, or nothing if a piece of
/// `side` is already there.
fn landing(board: &Board, to: Square, side: Side) -> Option<MoveKind> {
    match board.piece_on(to) {
        None => Some(MoveKind::Quiet),
        Some(piece) if piece.side != side => Some(MoveKind::Capture),
        Some(_) => None,
    }
}

const fn is_diagonal(file_delta: i8, rank_delta: i8) -> bool {
    file_delta != 0 && file_delta.abs() == rank_delta.abs()
}

const fn is_orthogonal(file_delta: i8, rank_delta: i8) -> bool {
    (file_delta == 0) != (rank_delta == 0)
}

const fn is_knight_jump(file_delta: i8, rank_delta: i8) -> bool {
    matches!((file_delta.abs(), rank_delta.abs()), (1, 2) | (2, 1))
}

const fn is_king_step(file_delta: i8, rank_delta: i8) -> bool {
    file_delta.abs() <= 1 && rank_delta.abs() <= 1 && (file_delta != 0 || rank_delta != 0)
}
