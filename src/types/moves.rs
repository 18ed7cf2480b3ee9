use std::str::FromStr;

use super::{ParseSquareError, PieceKind, Square};

/// A move request: the square a piece leaves, the square it lands on and, for a pawn
/// reaching the far rank, the kind it turns into.
///
/// A move carries no tag for castling or en passant; the board infers the [`MoveKind`]
/// from its own state when the move is validated.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
}

/// The effect of a legal move, inferred from the geometry of the move and the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MoveKind {
    Quiet,
    Capture,
    DoublePush,
    /// Captures the pawn on `captured`, which is beside the origin rather than on the target.
    EnPassant { captured: Square },
    /// The king moves two squares; the rook jumps from `rook_from` to `rook_to`.
    Castling { rook_from: Square, rook_to: Square },
    Promotion(PieceKind),
    PromotionCapture(PieceKind),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("expected four or five characters, found {0}")]
    InvalidLength(usize),
    #[error("invalid square: {0}")]
    InvalidSquare(#[from] ParseSquareError),
    #[error("'{0}' is not a promotion piece")]
    InvalidPromotion(char),
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to, promotion: None }
    }

    /// Returns the same move, asking for the pawn to become `kind` on the far rank.
    pub const fn with_promotion(self, kind: PieceKind) -> Self {
        Self { promotion: Some(kind), ..self }
    }

    pub const fn from(self) -> Square {
        self.from
    }

    pub const fn to(self) -> Square {
        self.to
    }

    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }

    /// Signed file and rank distances travelled by the move.
    pub const fn delta(self) -> (i8, i8) {
        (
            self.to.file() as i8 - self.from.file() as i8,
            self.to.rank() as i8 - self.from.rank() as i8,
        )
    }
}

impl MoveKind {
    pub const fn is_capture(self) -> bool {
        matches!(self, Self::Capture | Self::EnPassant { .. } | Self::PromotionCapture(_))
    }

    pub const fn promotion_piece(self) -> Option<PieceKind> {
        match self {
            Self::Promotion(kind) | Self::PromotionCapture(kind) => Some(kind),
            _ => None,
        }
    }
}

impl FromStr for Move {
    type Err = ParseMoveError;

    /// Parses coordinate notation such as `e2e4` or `e7e8n`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(ParseMoveError::InvalidLength(s.chars().count()));
        }

        let mv = Self::new(s[0..2].parse()?, s[2..4].parse()?);

        match s[4..].chars().next() {
            None => Ok(mv),
            Some(symbol) => match PieceKind::try_from(symbol) {
                Ok(kind) if symbol.is_ascii_lowercase() && kind.is_promotion_target() && symbol != 'c' => {
                    Ok(mv.with_promotion(kind))
                }
                _ => Err(ParseMoveError::InvalidPromotion(symbol)),
            },
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut output = format!("{}{}", self.from, self.to);

        if let Some(kind) = self.promotion {
            output.push(kind.symbol());
        }

        f.pad(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, ParseMoveError};
    use crate::types::{ParseSquareError, PieceKind, Square};

    #[test]
    fn parse() {
        assert_eq!("e2e4".parse(), Ok(Move::new(Square::E2, Square::E4)));
        assert_eq!("a7a8n".parse(), Ok(Move::new(Square::A7, Square::A8).with_promotion(PieceKind::Knight)));
        assert_eq!(Move::new(Square::G1, Square::F3).to_string(), "g1f3");
        assert_eq!(Move::new(Square::B2, Square::B1).with_promotion(PieceKind::Queen).to_string(), "b2b1q");
    }

    #[test]
    fn parse_errors() {
        assert_eq!("e2e".parse::<Move>(), Err(ParseMoveError::InvalidLength(3)));
        assert_eq!("e2e4qq".parse::<Move>(), Err(ParseMoveError::InvalidLength(6)));
        assert_eq!("e2z4".parse::<Move>(), Err(ParseMoveError::InvalidSquare(ParseSquareError::InvalidFile('z'))));
        assert_eq!("e7e8k".parse::<Move>(), Err(ParseMoveError::InvalidPromotion('k')));
        assert_eq!("e7e8Q".parse::<Move>(), Err(ParseMoveError::InvalidPromotion('Q')));
    }

    #[test]
    fn delta() {
        assert_eq!(Move::new(Square::E1, Square::G1).delta(), (2, 0));
        assert_eq!(Move::new(Square::B8, Square::A6).delta(), (-1, -2));
    }
}
