use super::Game;
use crate::board::Board;
use crate::core::*;

impl Game {
    /// Every move the side to move can play without leaving its own king attacked.
    ///
    /// A pawn move onto the far rank is listed once per promotion target.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut scratch = self.board().clone();
        let us = self.side_to_move();
        let mut moves = Vec::new();

        for (from, piece) in self.board().pieces_by_colour(us) {
            for to in self.board().move_options(from) {
                if !is_safe(&mut scratch, from, to, us) {
                    continue;
                }

                if piece.pt() == PieceType::Pawn && to.rank() == us.promotion_rank() {
                    moves.extend(
                        PieceType::PROMOTIONS
                            .into_iter()
                            .map(|pt| Move::with_promotion(from, to, pt)),
                    );
                } else {
                    moves.push(Move::new(from, to));
                }
            }
        }

        moves
    }

    /// Whether the side to move has at least one move that keeps its king safe.
    ///
    /// Stops at the first such move.
    pub fn has_legal_move(&self) -> bool {
        let mut scratch = self.board().clone();
        let us = self.side_to_move();

        self.board()
            .occupied_bb(us)
            .iter()
            .any(|from| {
                self.board()
                    .move_options(from)
                    .iter()
                    .any(|to| is_safe(&mut scratch, from, to, us))
            })
    }
}

/// Plays `from -> to` on `board`, tests whether `us` is left in check, and rolls the board back.
fn is_safe(board: &mut Board, from: Square, to: Square, us: Colour) -> bool {
    board.snapshot();

    let safe = board.move_piece(from, to).is_ok() && !board.is_checked(us);

    board.restore_snapshot();

    safe
}
