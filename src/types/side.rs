use std::ops::Not;

/// One of the two competing parties in a game.
///
/// `PlayerOne` starts on ranks 1 and 2 and advances towards rank 8, `PlayerTwo` starts
/// on ranks 7 and 8 and advances towards rank 1. `PlayerOne` moves first.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

impl Side {
    /// Returns the rank step of a pawn advance for this side.
    ///
    /// The result can only be `1` or `-1`.
    pub const fn forward(self) -> i8 {
        match self {
            Self::PlayerOne => 1,
            Self::PlayerTwo => -1,
        }
    }

    /// The rank holding this side's king and rooks in the starting position.
    pub const fn home_rank(self) -> u8 {
        match self {
            Self::PlayerOne => 0,
            Self::PlayerTwo => 7,
        }
    }

    /// The rank holding this side's pawns in the starting position.
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Self::PlayerOne => 1,
            Self::PlayerTwo => 6,
        }
    }

    /// The rank on which this side's pawns promote.
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Self::PlayerOne => 7,
            Self::PlayerTwo => 0,
        }
    }
}

impl Not for Side {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::PlayerOne => Self::PlayerTwo,
            Self::PlayerTwo => Self::PlayerOne,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PlayerOne => write!(f, "player one"),
            Self::PlayerTwo => write!(f, "player two"),
        }
    }
}
