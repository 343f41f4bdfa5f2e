use super::Board;
use crate::core::*;

impl Board {
    /// Moves the piece on `from` to `to`, capturing whatever stands on `to`.
    ///
    /// The move must be one of [`move_options`](Board::move_options) for `from`.
    /// The board is left unchanged on error.
    ///
    /// # Errors
    ///
    /// * [`MovementError::EmptySquare`] - there is no piece on `from`.
    /// * [`MovementError::Unreachable`] - `to` is not a legal destination for that piece.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), MovementError> {
        let piece = self.on(from).ok_or(MovementError::EmptySquare(from))?;

        if !self.move_options(from).contains(to) {
            return Err(MovementError::Unreachable { piece, from, to });
        }

        self.relocate(from, to, piece);

        Ok(())
    }

    /// Lifts `piece` off `from` and drops it on `to` without any legality check.
    #[inline]
    fn relocate(&mut self, from: Square, to: Square, piece: Piece) {
        self.board[from.index()] = None;
        self.occupied[piece.colour().index()].clear(from);

        self.put_piece(to, piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rooks(light: &[Square], dark: &[Square]) -> Board {
        let mut board = Board::new();
        for &sq in light {
            board.put_piece(sq, Piece::LightRook);
        }
        for &sq in dark {
            board.put_piece(sq, Piece::DarkRook);
        }
        board
    }

    #[test]
    fn test_move_keeps_piece_count() {
        let mut board = rooks(&[Square::A1], &[]);
        assert_eq!(board.move_piece(Square::A1, Square::A3), Ok(()));
        assert_eq!(board.count_pieces(), 1);
        assert!(board.is_empty(Square::A1));
        assert_eq!(board.on(Square::A3), Some(Piece::LightRook));
    }

    #[test]
    fn test_move_from_empty_square() {
        let mut board = rooks(&[], &[]);
        assert_eq!(
            board.move_piece(Square::A1, Square::A3),
            Err(MovementError::EmptySquare(Square::A1))
        );
    }

    #[test]
    fn test_move_onto_own_piece() {
        let mut board = rooks(&[Square::A1, Square::A3], &[]);
        let before = board.clone();

        assert_eq!(
            board.move_piece(Square::A1, Square::A3),
            Err(MovementError::Unreachable {
                piece: Piece::LightRook,
                from: Square::A1,
                to: Square::A3,
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_through_piece() {
        let mut board = rooks(&[Square::A1], &[Square::A2]);
        assert!(board.move_piece(Square::A1, Square::A3).is_err());
        assert_eq!(board.count_pieces(), 2);
    }

    #[test]
    fn test_capture() {
        let mut board = rooks(&[Square::A1], &[Square::A3]);
        assert_eq!(board.move_piece(Square::A1, Square::A3), Ok(()));
        assert_eq!(board.count_pieces(), 1);
        assert_eq!(board.on(Square::A3), Some(Piece::LightRook));
        assert!(board.occupied_bb(Colour::Dark).is_empty());
    }

    #[test]
    fn test_castling_shortcut_is_not_special() {
        let mut board = Board::new();
        board.put_piece(Square::E1, Piece::LightKing);
        board.put_piece(Square::H1, Piece::LightRook);

        assert!(board.move_piece(Square::E1, Square::G1).is_err());
        assert_eq!(board.on(Square::E1), Some(Piece::LightKing));
    }
}
