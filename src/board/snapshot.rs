use super::Board;
use crate::core::*;

/// A saved copy of the board's piece mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Snapshot {
    board: [Option<Piece>; Square::NUM],
    occupied: [Bitboard; Colour::NUM],
}

/// The board keeps exactly one snapshot slot. It is not a stack:
///
/// - [`snapshot`](Board::snapshot) fills the slot,
/// - [`restore_snapshot`](Board::restore_snapshot) rolls the pieces back and empties it,
/// - [`discard_snapshot`](Board::discard_snapshot) empties it and keeps the current pieces.
///
/// A speculative sequence must end in a restore or a discard before the next
/// snapshot is taken. Nesting, or restoring an empty slot, trips a debug assertion.
impl Board {
    /// Saves the current piece mapping into the snapshot slot.
    #[inline]
    pub fn snapshot(&mut self) {
        debug_assert!(
            self.saved.is_none(),
            "Snapshot taken while another snapshot is still pending"
        );

        self.saved = Some(Snapshot {
            board: self.board,
            occupied: self.occupied,
        });
    }

    /// Restores the piece mapping saved by the last [`snapshot`](Board::snapshot)
    /// and empties the slot.
    ///
    /// # Panics
    ///
    /// - Panics in debug builds if there is no pending snapshot. Release builds leave
    ///   the board untouched.
    #[inline]
    pub fn restore_snapshot(&mut self) {
        debug_assert!(
            self.saved.is_some(),
            "Attempted to restore a snapshot that was never taken"
        );

        if let Some(Snapshot { board, occupied }) = self.saved.take() {
            self.board = board;
            self.occupied = occupied;
        }
    }

    /// Drops the pending snapshot, committing every change made since it was taken.
    #[inline]
    pub fn discard_snapshot(&mut self) {
        self.saved = None;
    }

    #[inline]
    pub fn has_snapshot(&self) -> bool {
        self.saved.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        let mut board = Board::new();
        board.put_piece(Square::A1, Piece::LightRook);
        board.put_piece(Square::E8, Piece::DarkKing);
        board
    }

    #[test]
    fn test_snapshot_roundtrip_without_changes() {
        let mut board = sample_board();
        let before = board.clone();

        board.snapshot();
        board.restore_snapshot();

        assert_eq!(board, before);
        assert!(!board.has_snapshot());
    }

    #[test]
    fn test_restore_undoes_changes() {
        let mut board = sample_board();
        let before = board.clone();

        board.snapshot();
        board.put_piece(Square::A1, Piece::DarkQueen);
        board.put_piece(Square::H4, Piece::LightPawn);
        assert_eq!(board.count_pieces(), 3);

        board.restore_snapshot();
        assert_eq!(board, before);
        assert_eq!(board.on(Square::A1), Some(Piece::LightRook));
        assert!(board.is_empty(Square::H4));
    }

    #[test]
    fn test_discard_keeps_changes() {
        let mut board = sample_board();

        board.snapshot();
        board.put_piece(Square::H4, Piece::LightPawn);
        board.discard_snapshot();

        assert!(!board.has_snapshot());
        assert_eq!(board.on(Square::H4), Some(Piece::LightPawn));
    }

    #[test]
    fn test_slot_is_reusable() {
        let mut board = sample_board();

        board.snapshot();
        board.put_piece(Square::B1, Piece::LightKnight);
        board.discard_snapshot();

        board.snapshot();
        board.put_piece(Square::C1, Piece::LightBishop);
        board.restore_snapshot();

        assert_eq!(board.on(Square::B1), Some(Piece::LightKnight));
        assert!(board.is_empty(Square::C1));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "still pending")]
    fn test_nested_snapshot_fails_loudly() {
        let mut board = sample_board();
        board.snapshot();
        board.snapshot();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "never taken")]
    fn test_restore_without_snapshot_fails_loudly() {
        let mut board = sample_board();
        board.restore_snapshot();
    }
}
