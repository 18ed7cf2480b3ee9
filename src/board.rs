use crate::types::{Move, Piece, PieceKind, Side, Square};

pub use self::{makemove::IllegalMove, parser::ParseLayoutError, status::GameStatus};

#[cfg(test)]
mod tests;

mod makemove;
mod parser;
mod status;

/// Piece order along the home rank, from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The full placement state of a game plus whose turn it is.
///
/// Besides the pieces themselves the board remembers the last applied move. That single
/// move is all the history the rules need: en passant is only ever available against the
/// pawn that has just advanced two squares.
///
/// `Board` is a plain value. Cloning it (see [`Board::duplicate`]) produces a fully
/// independent copy that can be mutated without touching the original.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    side_to_move: Side,
    mailbox: [Option<Piece>; Square::NUM],
    previous: Option<Move>,
}

impl Board {
    /// Returns the board corresponding to the standard starting position.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();

        for (file, &kind) in BACK_RANK.iter().enumerate() {
            for side in [Side::PlayerOne, Side::PlayerTwo] {
                board.add_piece(Piece::new(side, kind), Square::from_rank_file(side.home_rank(), file as u8));
                board.add_piece(Piece::new(side, PieceKind::Pawn), Square::from_rank_file(side.pawn_rank(), file as u8));
            }
        }

        board
    }

    fn empty() -> Self {
        Self {
            side_to_move: Side::PlayerOne,
            mailbox: [None; Square::NUM],
            previous: None,
        }
    }

    pub const fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Hands the turn to `side` without making a move.
    ///
    /// Intended for setting up scenarios; the last applied move is kept, so en passant
    /// remains tied to the pawn that actually moved last.
    pub fn set_side_to_move(&mut self, side: Side) {
        self.side_to_move = side;
    }

    /// Returns the last move applied to this board, if any.
    pub const fn previous_move(&self) -> Option<Move> {
        self.previous
    }

    /// Finds a piece on the specified square, if any.
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.mailbox[square]
    }

    /// Iterates over the occupied squares of `side`.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |square| match self.piece_on(square) {
            Some(piece) if piece.side == side => Some((square, piece)),
            _ => None,
        })
    }

    /// Returns a deep, independent copy of the board for look-ahead.
    ///
    /// Every square (kind, owner and moved flag), the side to move and the last move are
    /// copied by value.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Returns the square of the pawn that a pawn of `side` captures en passant by
    /// landing on `target`, or `None` if no such capture is available.
    ///
    /// The capture is available only right after the opponent advanced a pawn by two
    /// squares, and `target` must be the square that pawn passed over.
    pub fn en_passant_victim(&self, target: Square, side: Side) -> Option<Square> {
        let previous = self.previous?;
        let pawn = self.piece_on(previous.to())?;

        if !pawn.is(!side, PieceKind::Pawn) {
            return None;
        }

        let (file_delta, rank_delta) = previous.delta();
        if file_delta != 0 || rank_delta.abs() != 2 {
            return None;
        }

        let passed = previous.from().offset(0, rank_delta / 2)?;
        (passed == target).then_some(previous.to())
    }

    /// Returns `true` if every square strictly between `from` and `to` is empty.
    ///
    /// The squares must share a rank, a file or a diagonal.
    pub fn is_path_clear(&self, from: Square, to: Square) -> bool {
        crate::rules::between(from, to).all(|square| self.piece_on(square).is_none())
    }

    fn add_piece(&mut self, piece: Piece, square: Square) {
        self.mailbox[square] = Some(piece);
    }

    fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.mailbox[square].take()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}
