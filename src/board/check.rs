use super::Board;
use crate::core::*;

impl Board {
    /// Squares attacked by `colour`: the union of the destination sets of all its pieces.
    ///
    /// This is exactly the move generator's output, so a pawn attacks only the
    /// diagonal squares it could capture on, and only when an enemy piece stands there.
    pub fn attacked(&self, colour: Colour) -> Bitboard {
        self.occupied_bb(colour)
            .iter()
            .fold(Bitboard::EMPTY, |acc, sq| acc | self.move_options(sq))
    }

    /// Whether a king of `colour` stands on a square attacked by the other colour
    pub fn is_checked(&self, colour: Colour) -> bool {
        let kings = self.piece_bb(colour, PieceType::King);

        if kings.is_empty() {
            return false;
        }

        (self.attacked(!colour) & kings).is_occupied()
    }
}
