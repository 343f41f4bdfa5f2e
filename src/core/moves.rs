use super::{PieceType, Square};

/// A move request: source, destination and, for a pawn reaching the far rank,
/// the piece type it promotes to.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
    promotion: Option<PieceType>,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Square, to: Square, promotion: PieceType) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    #[inline]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub const fn promotion(&self) -> Option<PieceType> {
        self.promotion
    }

    #[inline]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }
}

impl std::fmt::Display for Move {
    /// Source and destination codes, followed by the promotion letter if any (`"E7E8q"`)
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(pt) = self.promotion {
            write!(f, "{}", pt)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(Square::E2, Square::E4).to_string(), "E2E4");
        assert_eq!(
            Move::with_promotion(Square::E7, Square::E8, PieceType::Queen).to_string(),
            "E7E8q"
        );
    }

    #[test]
    fn test_move_accessors() {
        let mv = Move::with_promotion(Square::B2, Square::A1, PieceType::Knight);
        assert_eq!(mv.from(), Square::B2);
        assert_eq!(mv.to(), Square::A1);
        assert_eq!(mv.promotion(), Some(PieceType::Knight));
        assert!(mv.is_promotion());
        assert!(!Move::new(Square::B2, Square::B3).is_promotion());
    }
}
