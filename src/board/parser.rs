use std::str::FromStr;

use super::{Board, BACK_RANK};
use crate::types::{Piece, PieceKind, Side, Square};

/// Marks an empty square in a layout.
const EMPTY: char = 'e';

#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum ParseLayoutError {
    #[error("expected 8 rows, found {0}")]
    InvalidRowCount(usize),
    #[error("row {row} has {len} squares instead of 8")]
    InvalidRowLength { row: usize, len: usize },
    #[error("'{0}' is neither a piece nor the empty marker")]
    InvalidSymbol(char),
    #[error("{side} must have exactly one king, found {count}")]
    KingCount { side: Side, count: usize },
    #[error("{0} is in check but it is not their turn")]
    WaitingSideInCheck(Side),
}

impl Board {
    /// Builds a board from a grid of piece letters indexed as `grid[rank][file]`, with rank 0
    /// being `PlayerOne`'s home rank.
    ///
    /// Lowercase letters are `PlayerOne`'s pieces and uppercase letters `PlayerTwo`'s:
    /// `k`ing, `q`ueen, `r`ook (also `c`, for castle), `b`ishop, k`n`ight and `p`awn, with
    /// `e` for an empty square. `PlayerOne` moves first.
    ///
    /// A layout carries no history, so a piece standing anywhere other than where the
    /// starting position puts its kind is taken to have moved already.
    ///
    /// # Errors
    ///
    /// Fails on an unknown letter, if a side does not have exactly one king, or if
    /// `PlayerTwo` is in check while `PlayerOne` is to move.
    pub fn from_grid(grid: &[[char; 8]; 8]) -> Result<Self, ParseLayoutError> {
        let mut board = Self::empty();

        for (rank, row) in grid.iter().enumerate() {
            for (file, &symbol) in row.iter().enumerate() {
                if symbol == EMPTY {
                    continue;
                }

                let mut piece = Piece::try_from(symbol).map_err(|()| ParseLayoutError::InvalidSymbol(symbol))?;
                let square = Square::from_rank_file(rank as u8, file as u8);

                piece.moved = !is_home_square(piece, square);
                board.add_piece(piece, square);
            }
        }

        for side in [Side::PlayerOne, Side::PlayerTwo] {
            let count = board.pieces_of(side).filter(|(_, piece)| piece.kind == PieceKind::King).count();
            if count != 1 {
                return Err(ParseLayoutError::KingCount { side, count });
            }
        }

        let waiting = !board.side_to_move;
        if board.in_check(waiting) {
            return Err(ParseLayoutError::WaitingSideInCheck(waiting));
        }

        Ok(board)
    }

    /// Builds a board from eight whitespace separated rows as they are drawn on paper:
    /// the first row is rank 8, `PlayerTwo`'s side of the board.
    ///
    /// See [`Board::from_grid`] for the letters.
    ///
    /// # Errors
    ///
    /// Fails if the text is not eight rows of eight symbols, or on any error of
    /// [`Board::from_grid`].
    pub fn from_layout(layout: &str) -> Result<Self, ParseLayoutError> {
        let rows = layout.split_whitespace().collect::<Vec<_>>();
        if rows.len() != 8 {
            return Err(ParseLayoutError::InvalidRowCount(rows.len()));
        }

        let mut grid = [[EMPTY; 8]; 8];

        for (index, row) in rows.iter().enumerate() {
            let symbols = row.chars().collect::<Vec<_>>();
            grid[7 - index] = symbols
                .try_into()
                .map_err(|symbols: Vec<char>| ParseLayoutError::InvalidRowLength { row: index + 1, len: symbols.len() })?;
        }

        Self::from_grid(&grid)
    }

    /// Renders the board in the form accepted by [`Board::from_layout`], one row per line.
    pub fn to_layout(&self) -> String {
        let mut rows = Vec::with_capacity(8);

        for rank in (0..8).rev() {
            let row = (0..8)
                .map(|file| match self.piece_on(Square::from_rank_file(rank, file)) {
                    Some(piece) => piece.to_string(),
                    None => EMPTY.to_string(),
                })
                .collect::<String>();

            rows.push(row);
        }

        rows.join("\n")
    }
}

impl FromStr for Board {
    type Err = ParseLayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_layout(s)
    }
}

/// Returns `true` if the starting position puts a piece of this kind and side on `square`.
fn is_home_square(piece: Piece, square: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => square.rank() == piece.side.pawn_rank(),
        kind => square.rank() == piece.side.home_rank() && BACK_RANK[square.file() as usize] == kind,
    }
}

#[cfg(test)]
mod tests {
    use super::ParseLayoutError;
    use crate::{
        board::Board,
        types::{PieceKind, Side, Square},
    };

    const START: &str = "
        CNBQKBNC
        PPPPPPPP
        eeeeeeee
        eeeeeeee
        eeeeeeee
        eeeeeeee
        pppppppp
        cnbqkbnc
    ";

    #[test]
    fn starting_layout() {
        let board = Board::from_layout(START).unwrap();
        assert_eq!(board, Board::starting_position());
        assert_eq!(board.to_layout(), "RNBQKBNR\nPPPPPPPP\neeeeeeee\neeeeeeee\neeeeeeee\neeeeeeee\npppppppp\nrnbqkbnr");
    }

    #[test]
    fn grid_is_rank_major() {
        let mut grid = [['e'; 8]; 8];
        grid[0][4] = 'k';
        grid[7][4] = 'K';
        grid[2][3] = 'p';

        let board = Board::from_grid(&grid).unwrap();
        let pawn = board.piece_on(Square::D3).unwrap();

        assert!(pawn.is(Side::PlayerOne, PieceKind::Pawn));
        assert!(pawn.moved);
        assert!(!board.piece_on(Square::E1).unwrap().moved);
        assert!(!board.piece_on(Square::E8).unwrap().moved);
    }

    #[test]
    fn moved_flags_are_inferred() {
        let board: Board = "
            eeeeKeeR
            eeeeeeee
            eeeeeeee
            eeeReeee
            eeeeeeee
            eeeeeeee
            eeeeeeee
            reeekeer
        "
        .parse()
        .unwrap();

        assert!(!board.piece_on(Square::A1).unwrap().moved);
        assert!(!board.piece_on(Square::H1).unwrap().moved);
        assert!(!board.piece_on(Square::E1).unwrap().moved);
        assert!(!board.piece_on(Square::H8).unwrap().moved);
        assert!(board.piece_on(Square::D5).unwrap().moved);
    }

    #[test]
    fn malformed_layouts() {
        assert_eq!(Board::from_layout("eeeeeeee"), Err(ParseLayoutError::InvalidRowCount(1)));

        let short_row = START.replacen("PPPPPPPP", "PPPPPPP", 1);
        assert_eq!(Board::from_layout(&short_row), Err(ParseLayoutError::InvalidRowLength { row: 2, len: 7 }));

        let bad_symbol = START.replacen("eeeeeeee", "eeexeeee", 1);
        assert_eq!(Board::from_layout(&bad_symbol), Err(ParseLayoutError::InvalidSymbol('x')));

        let no_king = START.replacen("cnbqkbnc", "cnbqebnc", 1);
        assert_eq!(Board::from_layout(&no_king), Err(ParseLayoutError::KingCount { side: Side::PlayerOne, count: 0 }));
    }

    #[test]
    fn waiting_side_in_check() {
        let exposed = "Keeeeeee eeeeeeee eeeeeeee eeeeeeee eeeeeeee eeeeeeee eeeeeeee reeeekee";
        assert_eq!(Board::from_layout(exposed), Err(ParseLayoutError::WaitingSideInCheck(Side::PlayerTwo)));

        let blocked = "Keeeeeee Peeeeeee eeeeeeee eeeeeeee eeeeeeee eeeeeeee eeeeeeee reeeekee";
        assert!(Board::from_layout(blocked).is_ok());

        // The side to move may start in check.
        let to_move = "eeeeKeee eeeeeeee eeeeeeee eeeeeeee eeeeeeee eeeeeeee eeeeeeee Reeeekee";
        assert!(Board::from_layout(to_move).unwrap().in_check(Side::PlayerOne));
    }
}
