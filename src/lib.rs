//! # Chess Rules
//!
//! Move legality and game-state tracking for standard chess on an 8x8 board.
//!
//! Pieces are placed on a [`Board`], every candidate destination is checked
//! against the piece's movement shape and the squares in between, and a
//! [`Game`] alternates turns, rejects moves that leave the mover in check and
//! reports checkmate or stalemate through [`GameState`].
pub mod board;
pub mod core;
pub mod game;
pub mod utils;

pub use board::Board;
pub use crate::core::*;
pub use game::{Game, GameState};
