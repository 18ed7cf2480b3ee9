use std::{
    ops::{Index, IndexMut},
    str::FromStr,
};

/// Represents a square on the board corresponding to the [Little-Endian Rank-File Mapping][LERFM].
///
/// Every value of this type lies on the board; coordinates are checked once, on construction.
///
/// [LERFM]: https://www.chessprogramming.org/Square_Mapping_Considerations#Little-Endian_Rank-File_Mapping
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
pub enum ParseSquareError {
    #[error("expected two characters, found {0}")]
    InvalidLength(usize),
    #[error("file '{0}' is outside a-h")]
    InvalidFile(char),
    #[error("rank '{0}' is outside 1-8")]
    InvalidRank(char),
}

impl Square {
    pub const NUM: usize = 64;

    /// # Panics
    ///
    /// Panics if `value` is not in the range of `0..64`.
    pub const fn new(value: u8) -> Self {
        assert!(value < Self::NUM as u8, "square index out of range");
        unsafe { std::mem::transmute::<u8, Self>(value) }
    }

    /// # Panics
    ///
    /// Panics if rank or file is not in the range of `0..8`.
    pub const fn from_rank_file(rank: u8, file: u8) -> Self {
        assert!(rank < 8 && file < 8, "coordinate outside the board");

        Self::new((rank << 3) | file)
    }

    pub const fn file(self) -> u8 {
        self as u8 & 7
    }

    pub const fn rank(self) -> u8 {
        self as u8 >> 3
    }

    /// Returns the square displaced by the given file and rank steps, or `None` if it
    /// would fall off the board.
    pub const fn offset(self, file_delta: i8, rank_delta: i8) -> Option<Self> {
        let file = self.file() as i8 + file_delta;
        let rank = self.rank() as i8 + rank_delta;

        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            return None;
        }

        Some(Self::from_rank_file(rank as u8, file as u8))
    }

    /// Iterates over all squares from `A1` to `H8`.
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..Self::NUM as u8).map(Self::new)
    }
}

impl FromStr for Square {
    type Err = ParseSquareError;

    /// Performs the conversion using the algebraic notation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars = s.chars().collect::<Vec<_>>();
        let &[file, rank] = chars.as_slice() else {
            return Err(ParseSquareError::InvalidLength(chars.len()));
        };

        if !('a'..='h').contains(&file) {
            return Err(ParseSquareError::InvalidFile(file));
        }
        if !('1'..='8').contains(&rank) {
            return Err(ParseSquareError::InvalidRank(rank));
        }

        Ok(Self::from_rank_file(rank as u8 - b'1', file as u8 - b'a'))
    }
}

impl<T> Index<Square> for [T] {
    type Output = T;

    fn index(&self, square: Square) -> &Self::Output {
        &self[square as usize]
    }
}

impl<T> IndexMut<Square> for [T] {
    fn index_mut(&mut self, square: Square) -> &mut Self::Output {
        &mut self[square as usize]
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let file = self.file() + b'a';
        let rank = self.rank() + b'1';
        write!(f, "{}{}", file as char, rank as char)
    }
}
