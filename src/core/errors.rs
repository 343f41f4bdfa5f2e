//! Errors raised while moving pieces and playing a game.
//!
//! Every failure is recoverable: when one of these errors is returned the board
//! and the side to move are exactly what they were before the call.

use thiserror::Error;

use super::{Colour, Piece, PieceType, Square};

/******************************************\
|==========================================|
|              Movement Errors             |
|==========================================|
\******************************************/

/// The requested destination is not a legal destination for the source square.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementError {
    /// There is no piece on the source square.
    #[error("There is no piece on {0} to move")]
    EmptySquare(Square),

    /// The piece cannot reach the destination: wrong shape, blocked path or a
    /// piece of the same colour on the destination.
    #[error("{piece} on {from} cannot move to {to}")]
    Unreachable {
        piece: Piece,
        from: Square,
        to: Square,
    },

    /// The move is otherwise legal but leaves the mover's own king in check.
    #[error("Moving {from} to {to} leaves the {colour} king in check")]
    Check {
        colour: Colour,
        from: Square,
        to: Square,
    },
}

impl MovementError {
    /// Whether the move was refused only because it exposes the mover's king.
    pub const fn is_check(&self) -> bool {
        matches!(self, MovementError::Check { .. })
    }
}

/******************************************\
|==========================================|
|             Promotion Errors             |
|==========================================|
\******************************************/

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionError {
    /// A pawn reaches the far rank but no promotion piece was given.
    #[error("Pawn moving {from} to {to} must be promoted")]
    Required { from: Square, to: Square },

    /// A promotion was requested for a move that is not a pawn reaching the far rank.
    #[error("Moving {from} to {to} is not a promotion")]
    NotAPromotion { from: Square, to: Square },

    /// Pawns promote to a knight, bishop, rook or queen only.
    #[error("Cannot promote to {0:?}")]
    InvalidPiece(PieceType),
}

/******************************************\
|==========================================|
|                Game Errors               |
|==========================================|
\******************************************/

/// Any failure of a move request made through [`Game`](crate::Game).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error(transparent)]
    Movement(#[from] MovementError),

    /// The piece on the source square belongs to the side not on move.
    #[error("It is not {colour}'s turn to move the piece on {square}")]
    Turn { colour: Colour, square: Square },

    #[error(transparent)]
    Promotion(#[from] PromotionError),
}

impl GameError {
    /// Whether this is a [`MovementError::Check`] refusal.
    pub const fn is_check(&self) -> bool {
        match self {
            GameError::Movement(err) => err.is_check(),
            _ => false,
        }
    }
}
