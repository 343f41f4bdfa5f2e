use super::Rank;

/******************************************\
|==========================================|
|                 Colours                  |
|==========================================|
\******************************************/

/// # Colour Representation
///
/// Represents the two sides in chess. Light moves first and plays up the board
/// (towards rank 8), Dark plays down the board.

#[rustfmt::skip]
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colour {
    Light,
    Dark,
}

impl Colour {
    /// Number of elements in the Colour enum
    pub const NUM: usize = 2;
}

crate::impl_from_to_primitive!(Colour);
crate::impl_enum_iter!(Colour);

/******************************************\
|==========================================|
|              Implementation              |
|==========================================|
\******************************************/

impl Colour {
    /// Returns the signed rank step a pawn of this colour advances by
    pub const fn forward(&self) -> i8 {
        match self {
            Colour::Light => 1,
            Colour::Dark => -1,
        }
    }

    /// Rank a pawn of this colour starts on, and may double step from
    pub const fn pawn_home_rank(&self) -> Rank {
        Rank::Rank2.relative(*self)
    }

    /// Rank on which a pawn of this colour must promote
    pub const fn promotion_rank(&self) -> Rank {
        Rank::Rank8.relative(*self)
    }
}

impl std::ops::Not for Colour {
    type Output = Self;

    /// Returns the opposite colour
    fn not(self) -> Self::Output {
        match self {
            Colour::Light => Colour::Dark,
            Colour::Dark => Colour::Light,
        }
    }
}

impl std::fmt::Display for Colour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Colour::Light => write!(f, "Light"),
            Colour::Dark => write!(f, "Dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_colour() {
        assert_eq!(!Colour::Light, Colour::Dark);
        assert_eq!(!Colour::Dark, Colour::Light);
    }

    #[test]
    fn test_pawn_ranks() {
        assert_eq!(Colour::Light.pawn_home_rank(), Rank::Rank2);
        assert_eq!(Colour::Dark.pawn_home_rank(), Rank::Rank7);
        assert_eq!(Colour::Light.promotion_rank(), Rank::Rank8);
        assert_eq!(Colour::Dark.promotion_rank(), Rank::Rank1);
    }

    #[test]
    fn test_forward() {
        assert_eq!(Colour::Light.forward(), 1);
        assert_eq!(Colour::Dark.forward(), -1);
    }
}
