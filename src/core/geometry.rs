//! # Module: `geometry`
//!
//! Coordinate arithmetic between two squares.
//!
//! Every move shape in the rules is a statement about the offset between a
//! source and a destination square. This module computes that offset, reduces it
//! to a unit step through the greatest common divisor of its components, and
//! enumerates the open interval: the squares strictly between two squares that
//! share a rank, file or diagonal.

use super::{Bitboard, Square};

/******************************************\
|==========================================|
|                  Offset                  |
|==========================================|
\******************************************/

/// Signed `(file, rank)` displacement from one square to another
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub file: i8,
    pub rank: i8,
}

impl Offset {
    /// Offset that takes `from` to `to`
    pub const fn between(from: Square, to: Square) -> Self {
        let (from_file, from_rank) = from.coords();
        let (to_file, to_rank) = to.coords();

        Self {
            file: to_file - from_file,
            rank: to_rank - from_rank,
        }
    }

    /// Absolute file distance
    pub const fn file_dist(&self) -> u8 {
        self.file.unsigned_abs()
    }

    /// Absolute rank distance
    pub const fn rank_dist(&self) -> u8 {
        self.rank.unsigned_abs()
    }

    /// Both squares lie on one file or one rank
    pub const fn is_orthogonal(&self) -> bool {
        self.file == 0 || self.rank == 0
    }

    /// Both squares lie on one diagonal
    pub const fn is_diagonal(&self) -> bool {
        self.file_dist() == self.rank_dist()
    }

    /// Both squares lie on a shared rank, file or diagonal
    pub const fn is_aligned(&self) -> bool {
        self.is_orthogonal() || self.is_diagonal()
    }

    /// Number of unit steps the offset spans, `gcd(|file|, |rank|)`
    pub const fn steps(&self) -> u8 {
        gcd(self.file_dist(), self.rank_dist())
    }

    /// The offset divided by its step count.
    ///
    /// This is only a unit step along a line when the offset [`is_aligned`](Self::is_aligned).
    pub const fn direction(&self) -> Offset {
        let steps = self.steps() as i8;
        debug_assert!(steps != 0, "direction of a null offset");

        Offset {
            file: self.file / steps,
            rank: self.rank / steps,
        }
    }
}

/******************************************\
|==========================================|
|                Functions                 |
|==========================================|
\******************************************/

/// Greatest common divisor with the convention `gcd(0, n) = n`
pub const fn gcd(a: u8, b: u8) -> u8 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Returns the squares strictly between `from` and `to`.
///
/// The interval walks `from + i * direction` for `i` in `1..steps`. Squares that
/// share neither a rank, file nor diagonal have an empty interval, as does a
/// square paired with itself.
///
/// ## Examples
///
/// ```
/// use chess_rules::{Bitboard, Square, between_bb};
///
/// assert_eq!(between_bb(Square::A1, Square::D4), Bitboard::from([Square::B2, Square::C3]));
/// assert_eq!(between_bb(Square::C3, Square::D5), Bitboard::EMPTY);
/// ```
pub fn between_bb(from: Square, to: Square) -> Bitboard {
    let offset = Offset::between(from, to);

    if from == to || !offset.is_aligned() {
        return Bitboard::EMPTY;
    }

    let direction = offset.direction();
    let (file, rank) = from.coords();

    (1..offset.steps() as i8)
        .filter_map(|i| Square::from_coords(file + i * direction.file, rank + i * direction.rank))
        .collect()
}

/// Returns the Chebyshev (king step) distance between two squares
pub const fn sq_dist(sq1: Square, sq2: Square) -> u8 {
    let offset = Offset::between(sq1, sq2);
    let (file, rank) = (offset.file_dist(), offset.rank_dist());
    if file > rank { file } else { rank }
}
