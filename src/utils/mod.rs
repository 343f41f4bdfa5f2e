//! # Module: `utils`
//!
//! Debugging helpers that sit on top of the public [`Game`](crate::Game) API.
//!
//! - `perft`: counts the leaves of the legal-move tree, the standard check that
//!   move generation and legality filtering agree with known totals.
pub mod perft;

pub use perft::{perft, perft_divide};
