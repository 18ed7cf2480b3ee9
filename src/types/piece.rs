use super::Side;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const NUM: usize = 6;

    /// Kinds a pawn may turn into on the far rank, strongest first.
    pub const PROMOTIONS: [Self; 4] = [Self::Queen, Self::Rook, Self::Bishop, Self::Knight];

    /// Returns the lowercase layout letter of this kind.
    pub const fn symbol(self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }

    pub const fn is_promotion_target(self) -> bool {
        matches!(self, Self::Knight | Self::Bishop | Self::Rook | Self::Queen)
    }
}

impl TryFrom<char> for PieceKind {
    type Error = ();

    /// Accepts both letter cases; `c` ("castle") is an alias for the rook.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase() {
            'p' => Ok(Self::Pawn),
            'n' => Ok(Self::Knight),
            'b' => Ok(Self::Bishop),
            'r' | 'c' => Ok(Self::Rook),
            'q' => Ok(Self::Queen),
            'k' => Ok(Self::King),
            _ => Err(()),
        }
    }
}

impl<T> std::ops::Index<PieceKind> for [T] {
    type Output = T;

    fn index(&self, index: PieceKind) -> &Self::Output {
        &self[index as usize]
    }
}

/// A piece standing on the board.
///
/// `moved` is set the first time the piece leaves its square and never cleared. It is the
/// only record the engine keeps for castling rights and the pawn double step.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Piece {
    pub side: Side,
    pub kind: PieceKind,
    pub moved: bool,
}

impl Piece {
    pub const fn new(side: Side, kind: PieceKind) -> Self {
        Self { side, kind, moved: false }
    }

    pub fn is(self, side: Side, kind: PieceKind) -> bool {
        self.side == side && self.kind == kind
    }
}

impl TryFrom<char> for Piece {
    type Error = ();

    /// Lowercase letters belong to `PlayerOne`, uppercase letters to `PlayerTwo`.
    fn try_from(value: char) -> Result<Self, Self::Error> {
        let kind = PieceKind::try_from(value)?;
        let side = if value.is_ascii_lowercase() { Side::PlayerOne } else { Side::PlayerTwo };
        Ok(Self::new(side, kind))
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let symbol = match self.side {
            Side::PlayerOne => self.kind.symbol(),
            Side::PlayerTwo => self.kind.symbol().to_ascii_uppercase(),
        };
        write!(f, "{symbol}")
    }
}
