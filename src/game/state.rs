use super::Game;
use crate::core::Colour;

/// The status of a game as seen from the side to move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GameState {
    WhiteToMove,
    BlackToMove,
    WhiteWon,
    BlackWon,
    Stalemate,
}

impl GameState {
    /// Whether the game is over
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            GameState::WhiteWon | GameState::BlackWon | GameState::Stalemate
        )
    }

    /// The winning colour, if the game ended in checkmate
    #[inline]
    pub const fn winner(self) -> Option<Colour> {
        match self {
            GameState::WhiteWon => Some(Colour::Light),
            GameState::BlackWon => Some(Colour::Dark),
            _ => None,
        }
    }

    #[inline]
    const fn to_move(colour: Colour) -> Self {
        match colour {
            Colour::Light => GameState::WhiteToMove,
            Colour::Dark => GameState::BlackToMove,
        }
    }

    #[inline]
    const fn won_by(colour: Colour) -> Self {
        match colour {
            Colour::Light => GameState::WhiteWon,
            Colour::Dark => GameState::BlackWon,
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GameState::WhiteToMove => "White to move",
            GameState::BlackToMove => "Black to move",
            GameState::WhiteWon => "White won",
            GameState::BlackWon => "Black won",
            GameState::Stalemate => "Stalemate",
        };
        f.write_str(s)
    }
}

impl Game {
    /// Classifies the current position.
    ///
    /// The side to move keeps playing as long as at least one of its moves
    /// leaves its king unattacked. With no such move the game is over: a
    /// checkmate if the king is attacked right now, a stalemate otherwise.
    pub fn state(&self) -> GameState {
        let us = self.side_to_move();

        if self.has_legal_move() {
            GameState::to_move(us)
        } else if self.is_check() {
            GameState::won_by(!us)
        } else {
            GameState::Stalemate
        }
    }
}
