//! # Module: `movegen`
//!
//! Destination generation for a single square.
//!
//! A candidate destination is legal for the piece on a source square when, in
//! this order:
//!
//! 1. the piece's movement shape reaches it ([`Board::can_reach`]),
//! 2. every square strictly between source and candidate is empty,
//! 3. the candidate is empty or holds a piece of the other colour.
//!
//! The shape test runs first so the interval test is only ever asked about
//! offsets the piece can actually make. Nothing is cached: every query walks
//! the 64 squares afresh against the current board.

use super::Board;
use crate::core::*;

impl Board {
    /// Whether the shape of the move `from -> to` is legal for `piece`, ignoring blockers.
    ///
    /// Pawns are the exception, as their shape depends on occupancy: a straight
    /// advance needs an empty destination and a diagonal step needs an enemy piece on it.
    pub fn can_reach(&self, from: Square, to: Square, piece: Piece) -> bool {
        let offset = Offset::between(from, to);

        match piece.pt() {
            PieceType::Rook => offset.is_orthogonal(),
            PieceType::Bishop => offset.is_diagonal(),
            PieceType::Queen => offset.is_orthogonal() || offset.is_diagonal(),
            PieceType::Knight => matches!(
                (offset.file_dist(), offset.rank_dist()),
                (1, 2) | (2, 1)
            ),
            PieceType::King => offset.file_dist().max(offset.rank_dist()) <= 1,
            PieceType::Pawn => self.can_pawn_reach(from, to, piece.colour(), offset),
        }
    }

    fn can_pawn_reach(&self, from: Square, to: Square, colour: Colour, offset: Offset) -> bool {
        let forward = colour.forward();
        let max_advance = if from.rank() == colour.pawn_home_rank() { 2 } else { 1 };

        let advance = offset.file == 0
            && self.is_empty(to)
            && offset.rank * forward > 0
            && offset.rank_dist() <= max_advance;

        let capture = offset.file_dist() == 1
            && offset.rank == forward
            && self.on(to).is_some_and(|target| target.colour() != colour);

        advance || capture
    }

    /// Whether every square strictly between `from` and `to` is empty
    #[inline]
    pub fn is_open_interval_empty(&self, from: Square, to: Square) -> bool {
        (between_bb(from, to) & self.all_occupied_bb()).is_empty()
    }

    /// The full destination set for the piece on `square`, empty if the square is empty.
    pub fn move_options(&self, square: Square) -> Bitboard {
        let Some(piece) = self.on(square) else {
            return Bitboard::EMPTY;
        };

        let own = self.occupied_bb(piece.colour());

        Square::iter()
            .filter(|&to| to != square)
            .filter(|&to| {
                self.can_reach(square, to, piece)
                    && self.is_open_interval_empty(square, to)
                    && !own.contains(to)
            })
            .collect()
    }

    #[inline]
    pub fn move_option_count(&self, square: Square) -> usize {
        self.move_options(square).count_bits() as usize
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
