pub mod check;
pub mod movegen;
pub mod movement;
pub mod snapshot;

use crate::core::*;
use snapshot::Snapshot;

/******************************************\
|==========================================|
|                Constants                 |
|==========================================|
\******************************************/

/// Back rank layout from the A file to the H file
const BACK_RANK: [PieceType; File::NUM] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/******************************************\
|==========================================|
|                  Board                   |
|==========================================|
\******************************************/

/// The mapping from squares to pieces.
///
/// Squares without a piece are simply empty; there is no bound on how many
/// pieces may stand on the board and no chess validation on placement. The board
/// owns a single snapshot slot used for speculative moves, see
/// [`snapshot`](Board::snapshot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    board: [Option<Piece>; Square::NUM],

    occupied: [Bitboard; Colour::NUM],

    saved: Option<Snapshot>,
}

/******************************************\
|==========================================|
|           Basic Implementation           |
|==========================================|
\******************************************/

impl Default for Board {
    /// An empty board
    fn default() -> Board {
        Board::new()
    }
}

impl Board {
    pub fn new() -> Board {
        Board {
            board: [None; Square::NUM],
            occupied: [Bitboard::EMPTY; Colour::NUM],
            saved: None,
        }
    }

    /// The standard initial position, Light on ranks 1 and 2 and Dark on ranks 7 and 8
    pub fn starting_position() -> Board {
        let mut board = Board::new();

        for colour in Colour::iter() {
            let back_rank = Rank::Rank1.relative(colour);
            let pawn_rank = colour.pawn_home_rank();

            for (file, pt) in File::iter().zip(BACK_RANK) {
                board.put_piece(Square::from_parts(file, back_rank), Piece::from_parts(colour, pt));
                board.put_piece(
                    Square::from_parts(file, pawn_rank),
                    Piece::from_parts(colour, PieceType::Pawn),
                );
            }
        }

        board
    }

    /// Places `piece` on `square`, replacing whatever stood there
    #[inline]
    pub fn put_piece(&mut self, square: Square, piece: Piece) {
        if let Some(old) = self.board[square.index()] {
            self.occupied[old.colour().index()].clear(square);
        }

        self.board[square.index()] = Some(piece);
        self.occupied[piece.colour().index()].set(square);
    }

    /// The piece on `square`, if any
    #[inline]
    pub fn on(&self, square: Square) -> Option<Piece> {
        self.board[square.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.on(square).is_none()
    }

    #[inline]
    pub fn occupied_bb(&self, colour: Colour) -> Bitboard {
        self.occupied[colour.index()]
    }

    #[inline]
    pub fn all_occupied_bb(&self) -> Bitboard {
        self.occupied_bb(Colour::Light) | self.occupied_bb(Colour::Dark)
    }

    /// Squares holding a piece of type `pt` and colour `colour`
    pub fn piece_bb(&self, colour: Colour, pt: PieceType) -> Bitboard {
        let piece = Piece::from_parts(colour, pt);

        self.occupied_bb(colour)
            .iter()
            .filter(|&sq| self.on(sq) == Some(piece))
            .collect()
    }

    #[inline]
    pub fn count_pieces(&self) -> usize {
        self.all_occupied_bb().count_bits() as usize
    }

    #[inline]
    pub fn count_empty(&self) -> usize {
        Square::NUM - self.count_pieces()
    }

    /// Every piece of `colour` together with its square, A1 first
    pub fn pieces_by_colour(&self, colour: Colour) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied_bb(colour)
            .iter()
            .filter_map(|sq| self.on(sq).map(|piece| (sq, piece)))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const SEPARATOR: &str = "     +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", SEPARATOR)?;

        for rank in Rank::iter().rev() {
            write!(f, " {}   |", rank)?;

            for file in File::iter() {
                let square = Square::from_parts(file, rank);
                let cell = match self.on(square) {
                    Some(piece) => piece.to_string(),
                    None => " ".to_string(),
                };
                write!(f, " {} |", cell)?;
            }

            writeln!(f)?;
            writeln!(f, "{}", SEPARATOR)?;
        }

        writeln!(f)?;
        writeln!(f, "       A   B   C   D   E   F   G   H")?;
        writeln!(f)?;
        writeln!(f, "Pieces: {}", self.count_pieces())?;
        writeln!(f, "Snapshot pending: {}", self.has_snapshot())?;

        Ok(())
    }
}

/******************************************\
|==========================================|
|                Unit Tests                |
|==========================================|
\******************************************/
