// Core module exports

#[macro_use]
pub mod macros;

// Board representation submodules
pub mod bitboard;
pub mod errors;
pub mod geometry;
pub mod moves;
pub mod piece;
pub mod square;
pub mod types;

// Re-export common types for easier access
pub use bitboard::{Bitboard, BitboardIter};
pub use errors::{GameError, MovementError, PromotionError};
pub use geometry::{Offset, between_bb, gcd, sq_dist};
pub use moves::Move;
pub use piece::{ParsePieceError, Piece, PieceType};
pub use square::{File, ParseFileError, ParseRankError, ParseSquareError, Rank, Square};
pub use types::Colour;
