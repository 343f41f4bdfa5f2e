//! # Module: `game`
//!
//! The turn-taking layer on top of [`Board`].
//!
//! A [`Game`] owns a board and the colour to move. Moves are applied
//! speculatively: the board is snapshotted, the piece is moved, and if the
//! mover's own king ends up attacked the snapshot is restored and the move is
//! refused with a [`MovementError::Check`]. Only moves that survive this test
//! are committed and hand the turn to the other side.

mod legal;
mod state;

pub use state::GameState;

use crate::board::Board;
use crate::core::*;

/******************************************\
|==========================================|
|                   Game                   |
|==========================================|
\******************************************/

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,

    stm: Colour,
}

impl Default for Game {
    /// A game from the standard initial position, Light to move
    fn default() -> Self {
        Game::from_board(Board::starting_position())
    }
}

impl Game {
    /// Starts a game from an explicit placement, Light to move
    pub fn new<I>(pieces: I) -> Self
    where
        I: IntoIterator<Item = (Square, Piece)>,
    {
        let mut board = Board::new();
        for (square, piece) in pieces {
            board.put_piece(square, piece);
        }

        Game::from_board(board)
    }

    /// Starts a game on an already populated board, Light to move
    pub fn from_board(board: Board) -> Self {
        Game {
            board,
            stm: Colour::Light,
        }
    }

    /// Hands the first move to `colour` instead of Light
    pub fn with_side_to_move(mut self, colour: Colour) -> Self {
        self.stm = colour;
        self
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Colour {
        self.stm
    }

    /// Whether the side to move is currently in check
    #[inline]
    pub fn is_check(&self) -> bool {
        self.board.is_checked(self.stm)
    }

    /******************************************\
    |==========================================|
    |                  Moves                   |
    |==========================================|
    \******************************************/

    /// Moves the piece on `from` to `to` for the side to move.
    ///
    /// # Errors
    ///
    /// * [`GameError::Turn`] - the piece on `from` belongs to the other side.
    /// * [`PromotionError::Required`] - a pawn reaches the far rank, use
    ///   [`make_move_with_promotion`](Game::make_move_with_promotion).
    /// * [`MovementError`] - `to` is not a legal destination, or the move leaves
    ///   the mover in check ([`MovementError::Check`]).
    ///
    /// The game is unchanged whenever an error is returned.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<(), GameError> {
        let piece = self.own_piece(from)?;

        if piece.is_some_and(|piece| Self::is_promotion(piece, to)) {
            return Err(PromotionError::Required { from, to }.into());
        }

        self.apply(from, to)?;
        self.stm = !self.stm;

        Ok(())
    }

    /// Moves a pawn onto the far rank and replaces it with a `promote_to` piece of the same colour.
    ///
    /// # Errors
    ///
    /// * [`GameError::Turn`] - the piece on `from` belongs to the other side.
    /// * [`PromotionError::InvalidPiece`] - `promote_to` is a pawn or a king.
    /// * [`PromotionError::NotAPromotion`] - the move is not a pawn reaching the far rank.
    /// * [`MovementError`] - as for [`make_move`](Game::make_move).
    pub fn make_move_with_promotion(
        &mut self,
        from: Square,
        to: Square,
        promote_to: PieceType,
    ) -> Result<(), GameError> {
        let piece = self.own_piece(from)?;

        if !promote_to.is_promotion_target() {
            return Err(PromotionError::InvalidPiece(promote_to).into());
        }

        let Some(pawn) = piece.filter(|&piece| Self::is_promotion(piece, to)) else {
            return Err(PromotionError::NotAPromotion { from, to }.into());
        };

        self.apply(from, to)?;
        self.board
            .put_piece(to, Piece::from_parts(pawn.colour(), promote_to));
        self.stm = !self.stm;

        Ok(())
    }

    /// Plays a [`Move`], routing promotions to [`make_move_with_promotion`](Game::make_move_with_promotion)
    pub fn play(&mut self, mv: Move) -> Result<(), GameError> {
        match mv.promotion() {
            Some(pt) => self.make_move_with_promotion(mv.from(), mv.to(), pt),
            None => self.make_move(mv.from(), mv.to()),
        }
    }

    /// The piece on `from`, refusing pieces of the side not on move
    fn own_piece(&self, from: Square) -> Result<Option<Piece>, GameError> {
        match self.board.on(from) {
            Some(piece) if piece.colour() != self.stm => Err(GameError::Turn {
                colour: piece.colour(),
                square: from,
            }),
            piece => Ok(piece),
        }
    }

    /// Whether moving `piece` onto `to` is a pawn reaching its far rank
    #[inline]
    fn is_promotion(piece: Piece, to: Square) -> bool {
        piece.pt() == PieceType::Pawn && to.rank() == piece.colour().promotion_rank()
    }

    /// Applies `from -> to` on the board, rolling it back if the mover ends up in check.
    fn apply(&mut self, from: Square, to: Square) -> Result<(), MovementError> {
        let us = self.stm;

        self.board.snapshot();

        if let Err(err) = self.board.move_piece(from, to) {
            self.board.discard_snapshot();
            return Err(err);
        }

        if self.board.is_checked(us) {
            self.board.restore_snapshot();
            return Err(MovementError::Check {
                colour: us,
                from,
                to,
            });
        }

        self.board.discard_snapshot();

        Ok(())
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.board)?;
        writeln!(f, "Current Side: {}", self.stm)?;
        writeln!(f, "State: {}", self.state())
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
