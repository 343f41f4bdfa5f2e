use super::types::Colour;
use thiserror::Error;

/******************************************\
|==========================================|
|                 Squares                  |
|==========================================|
\******************************************/

/// # Square representation
///
/// - Represents the 64 squares of a chess board, A1 first and H8 last
/// - Addressed externally by an uppercase file letter followed by a rank digit (`"E4"`)

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
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

impl Square {
    /// Number of elements in the Square enum
    pub const NUM: usize = 64;
}

crate::impl_from_to_primitive!(Square);
crate::impl_enum_iter!(Square);

/******************************************\
|==========================================|
|                  Ranks                   |
|==========================================|
\******************************************/

/// # Ranks representation
///
/// - Represents the ranks of a chess board, `Rank1` being Light's back rank

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Rank {
    Rank1, Rank2, Rank3, Rank4, Rank5, Rank6, Rank7, Rank8,
}

impl Rank {
    /// Number of elements in the Rank enum
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(Rank);
crate::impl_enum_iter!(Rank);

/******************************************\
|==========================================|
|                  Files                   |
|==========================================|
\******************************************/

/// # Files representation
///
/// - Represents the files of a chess board

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum File {
    FileA, FileB, FileC, FileD, FileE, FileF, FileG, FileH,
}

impl File {
    /// Number of elements in the File enum
    pub const NUM: usize = 8;
}

crate::impl_from_to_primitive!(File);
crate::impl_enum_iter!(File);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Square {
    /// Returns the rank of a square
    pub const fn rank(&self) -> Rank {
        unsafe { Rank::from_unchecked((*self as u8) >> 3) }
    }

    /// Returns the file of a square
    pub const fn file(&self) -> File {
        unsafe { File::from_unchecked((*self as u8) & 0b111) }
    }

    /// Combines a pair of file and rank to create a square
    pub const fn from_parts(file: File, rank: Rank) -> Self {
        let index = ((rank as u8) << 3) + (file as u8);
        unsafe { Self::from_unchecked(index) }
    }

    /// Returns the zero based `(file, rank)` coordinates of the square
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::Square;
    ///
    /// assert_eq!(Square::A1.coords(), (0, 0));
    /// assert_eq!(Square::E4.coords(), (4, 3));
    /// ```
    pub const fn coords(&self) -> (i8, i8) {
        (self.file() as i8, self.rank() as i8)
    }

    /// Builds a square from zero based coordinates, `None` if either lies off the board
    pub const fn from_coords(file: i8, rank: i8) -> Option<Self> {
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            return None;
        }

        Some(unsafe { Self::from_unchecked(((rank as u8) << 3) + file as u8) })
    }
}

impl Rank {
    /// Flips rank along the middle of the board, or switch perspectives between light and dark
    pub const fn flip(&self) -> Self {
        unsafe { Self::from_unchecked(7 - (*self as u8)) }
    }

    /// Returns the rank relative to the perspective of `col: Colour`
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::{Colour, Rank};
    ///
    /// assert_eq!(Rank::Rank2.relative(Colour::Light), Rank::Rank2);
    /// assert_eq!(Rank::Rank2.relative(Colour::Dark), Rank::Rank7);
    /// ```
    pub const fn relative(&self, col: Colour) -> Self {
        match col {
            Colour::Light => *self,
            Colour::Dark => self.flip(),
        }
    }
}

/******************************************\
|==========================================|
|                 Display                  |
|==========================================|
\******************************************/

impl std::fmt::Display for File {
    /// Displays the file as its board letter (FileA => 'A')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'A' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Rank {
    /// Displays the rank as its board digit (Rank1 => '1')
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", (b'1' + (*self as u8)) as char)
    }
}

impl std::fmt::Display for Square {
    /// Displays the square as its two character code (Square::E4 => "E4")
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/******************************************\
|==========================================|
|              Parsing Strings             |
|==========================================|
\******************************************/

impl std::str::FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file_char), None) = (chars.next(), chars.next()) else {
            return Err(ParseFileError::InvalidLength(s.chars().count()));
        };

        match file_char {
            'A'..='H' => Ok(unsafe { File::from_unchecked(file_char as u8 - b'A') }),
            _ => Err(ParseFileError::InvalidChar(file_char)),
        }
    }
}

impl std::str::FromStr for Rank {
    type Err = ParseRankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rank_char), None) = (chars.next(), chars.next()) else {
            return Err(ParseRankError::InvalidLength(s.chars().count()));
        };

        match rank_char {
            '1'..='8' => Ok(unsafe { Rank::from_unchecked(rank_char as u8 - b'1') }),
            _ => Err(ParseRankError::InvalidChar(rank_char)),
        }
    }
}

impl std::str::FromStr for Square {
    type Err = ParseSquareError;

    /// Parses a square code such as `"E4"`, with error checking
    ///
    /// ## Examples
    ///
    /// ```
    /// use chess_rules::{ParseSquareError, Square};
    ///
    /// assert_eq!("H8".parse::<Square>().unwrap(), Square::H8);
    /// assert!(matches!("E9".parse::<Square>(), Err(ParseSquareError::InvalidRankChar('9'))));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseSquareError::InvalidLength(s.chars().count()));
        };

        let file = file_char
            .to_string()
            .parse::<File>()
            .map_err(|_| ParseSquareError::InvalidFileChar(file_char))?;
        let rank = rank_char
            .to_string()
            .parse::<Rank>()
            .map_err(|_| ParseSquareError::InvalidRankChar(rank_char))?;

        Ok(Square::from_parts(file, rank))
    }
}

/******************************************\
|==========================================|
|            Square Parse Errors           |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFileError {
    #[error("Invalid length for file string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for file string: '{0}', expected 'A'-'H'")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRankError {
    #[error("Invalid length for rank string: {0}, expected 1")]
    InvalidLength(usize),
    #[error("Invalid character for rank string: '{0}', expected '1'-'8'")]
    InvalidChar(char),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSquareError {
    #[error("Invalid length for square string: {0}, expected 2")]
    InvalidLength(usize),
    #[error("Invalid character for file string: '{0}', expected 'A'-'H'")]
    InvalidFileChar(char),
    #[error("Invalid character for rank string: '{0}', expected '1'-'8'")]
    InvalidRankChar(char),
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_from_parts() {
        assert_eq!(Square::from_parts(File::FileA, Rank::Rank1), Square::A1);
        assert_eq!(Square::from_parts(File::FileE, Rank::Rank4), Square::E4);
        assert_eq!(Square::from_parts(File::FileH, Rank::Rank8), Square::H8);
    }

    #[test]
    fn test_file_and_rank() {
        let square = Square::C6;
        assert_eq!(square.file(), File::FileC);
        assert_eq!(square.rank(), Rank::Rank6);
    }

    #[test]
    fn test_coords_roundtrip() {
        for square in Square::iter() {
            let (file, rank) = square.coords();
            assert_eq!(Square::from_coords(file, rank), Some(square));
        }
    }

    #[test]
    fn test_from_coords_off_board() {
        assert_eq!(Square::from_coords(-1, 0), None);
        assert_eq!(Square::from_coords(0, 8), None);
        assert_eq!(Square::from_coords(8, 3), None);
        assert_eq!(Square::from_coords(7, 7), Some(Square::H8));
    }

    #[test]
    fn test_iter_covers_board() {
        assert_eq!(Square::iter().count(), 64);
        assert_eq!(Square::iter().next(), Some(Square::A1));
        assert_eq!(Square::iter().next_back(), Some(Square::H8));
    }

    #[test]
    fn test_relative_rank() {
        assert_eq!(Rank::Rank8.relative(Colour::Light), Rank::Rank8);
        assert_eq!(Rank::Rank8.relative(Colour::Dark), Rank::Rank1);
        assert_eq!(Rank::Rank4.flip(), Rank::Rank5);
    }

    #[test]
    fn test_square_display() {
        assert_eq!(Square::E4.to_string(), "E4");
        assert_eq!(Square::A8.to_string(), "A8");
    }

    #[test]
    fn test_square_from_str_valid() {
        assert_eq!("A1".parse::<Square>().unwrap(), Square::A1);
        assert_eq!("H8".parse::<Square>().unwrap(), Square::H8);
        assert_eq!("E4".parse::<Square>().unwrap(), Square::E4);
        assert_eq!("C7".parse::<Square>().unwrap(), Square::C7);
        assert_eq!("G2".parse::<Square>().unwrap(), Square::G2);
    }

    #[test]
    fn test_square_from_str_invalid() {
        assert!(matches!(
            "E".parse::<Square>(),
            Err(ParseSquareError::InvalidLength(1))
        ));
        assert!(matches!(
            "E4G".parse::<Square>(),
            Err(ParseSquareError::InvalidLength(3))
        ));
        assert!(matches!(
            "".parse::<Square>(),
            Err(ParseSquareError::InvalidLength(0))
        ));
        assert!(matches!(
            "Z4".parse::<Square>(),
            Err(ParseSquareError::InvalidFileChar('Z'))
        ));
        assert!(matches!(
            "e4".parse::<Square>(),
            Err(ParseSquareError::InvalidFileChar('e'))
        ));
        assert!(matches!(
            "A9".parse::<Square>(),
            Err(ParseSquareError::InvalidRankChar('9'))
        ));
        assert!(matches!(
            "H0".parse::<Square>(),
            Err(ParseSquareError::InvalidRankChar('0'))
        ));
        assert!(matches!(
            "1A".parse::<Square>(),
            Err(ParseSquareError::InvalidFileChar('1'))
        ));
    }
}
