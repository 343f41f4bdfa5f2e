use chess_rules::*;

use Square::*;

fn play_all(game: &mut Game, moves: &[&str]) {
    for mv in moves {
        let from: Square = mv[..2].parse().unwrap();
        let to: Square = mv[2..].parse().unwrap();
        assert_eq!(game.make_move(from, to), Ok(()), "move {mv} failed\n{game}");
    }
}

#[test]
fn fools_mate() {
    let mut game = Game::default();
    play_all(&mut game, &["F2F3", "E7E5", "G2G4", "D8H4"]);

    assert!(game.is_check());
    assert_eq!(game.state(), GameState::BlackWon);
    assert!(game.legal_moves().is_empty());
}

#[test]
fn fools_mate_after_e6() {
    let mut game = Game::default();
    play_all(&mut game, &["F2F3", "E7E6", "G2G4", "D8H4"]);

    assert_eq!(game.state(), GameState::BlackWon);
}

#[test]
fn immortal_game() {
    #[rustfmt::skip]
    const MOVES: &[&str] = &[
        "E2E4", "E7E5", "F2F4", "E5F4", "F1C4", "D8H4", "E1F1", "B7B5",
        "C4B5", "G8F6", "G1F3", "H4H6", "D2D3", "F6H5", "F3H4", "H6G5",
        "H4F5", "C7C6", "G2G4", "H5F6", "H1G1", "C6B5", "H2H4", "G5G6",
        "H4H5", "G6G5", "D1F3", "F6G8", "C1F4", "G5F6", "B1C3", "F8C5",
        "C3D5", "F6B2", "F4D6", "C5G1", "E4E5", "B2A1", "F1E2", "B8A6",
        "F5G7", "E8D8", "F3F6", "G8F6", "D6E7",
    ];

    let mut game = Game::default();
    play_all(&mut game, MOVES);

    assert_eq!(game.state(), GameState::WhiteWon);
    assert_eq!(game.state().winner(), Some(Colour::Light));
    assert_eq!(game.board().count_pieces(), 23);
}

#[test]
fn rook_mate_and_its_escapes() {
    let mated = [
        (A1, Piece::LightKing),
        (C2, Piece::DarkRook),
        (D1, Piece::DarkRook),
        (D2, Piece::DarkKing),
    ];
    assert_eq!(Game::new(mated).state(), GameState::BlackWon);

    // The king can take a rook on B2
    let capture = [
        (A1, Piece::LightKing),
        (B2, Piece::DarkRook),
        (D1, Piece::DarkRook),
        (D2, Piece::DarkKing),
    ];
    assert_eq!(Game::new(capture).state(), GameState::WhiteToMove);

    // A Light rook can take the checking rook
    let rook_takes = mated.into_iter().chain([(E1, Piece::LightRook)]);
    let game = Game::new(rook_takes);
    assert_eq!(game.state(), GameState::WhiteToMove);
    assert_eq!(game.legal_moves(), vec![Move::new(E1, D1)]);

    // A Light rook can block on B1
    let rook_blocks = mated.into_iter().chain([(B3, Piece::LightRook)]);
    let game = Game::new(rook_blocks);
    assert_eq!(game.state(), GameState::WhiteToMove);
    assert_eq!(game.legal_moves(), vec![Move::new(B3, B1)]);
}

#[test]
fn cornered_king_is_stalemated() {
    let game = Game::new([
        (A1, Piece::LightKing),
        (C2, Piece::DarkRook),
        (B3, Piece::DarkRook),
        (D2, Piece::DarkKing),
    ]);

    assert!(!game.is_check());
    assert_eq!(game.state(), GameState::Stalemate);
}

#[test]
fn stalemate_after_quiet_move() {
    let mut game = Game::new([
        (A8, Piece::DarkKing),
        (C7, Piece::LightQueen),
        (H1, Piece::LightKing),
    ]);

    assert_eq!(game.make_move(C7, B6), Ok(()));
    assert!(!game.is_check());
    assert_eq!(game.state(), GameState::Stalemate);
}

#[test]
fn check_error_reverts_everything() {
    let mut game = Game::new([
        (C6, Piece::LightKing),
        (C5, Piece::LightRook),
        (C3, Piece::DarkRook),
    ]);
    let before = game.clone();

    let err = game.make_move(C5, D5).unwrap_err();
    assert!(err.is_check());
    assert_eq!(game, before);
    assert_eq!(game.side_to_move(), Colour::Light);

    assert_eq!(game.make_move(C5, C4), Ok(()));
    assert_eq!(game.side_to_move(), Colour::Dark);
}

#[test]
fn turn_order_is_enforced() {
    let mut game = Game::default();

    assert!(matches!(
        game.make_move(D7, D6),
        Err(GameError::Turn { colour: Colour::Dark, square: D7 })
    ));

    play_all(&mut game, &["D2D3"]);
    assert!(game.make_move(D2, D3).is_err());
    assert!(game.make_move(D3, D4).is_err());

    play_all(&mut game, &["D7D6", "C2C3"]);
    assert_eq!(game.state(), GameState::BlackToMove);
}

#[test]
fn underpromotion_with_check() {
    let mut game = Game::new([
        (F7, Piece::LightPawn),
        (A1, Piece::LightKing),
        (H7, Piece::DarkKing),
        (G8, Piece::DarkRook),
    ]);

    assert_eq!(
        game.make_move(F7, G8),
        Err(GameError::Promotion(PromotionError::Required { from: F7, to: G8 }))
    );

    assert_eq!(game.make_move_with_promotion(F7, G8, PieceType::Knight), Ok(()));
    assert_eq!(game.board().on(G8), Some(Piece::LightKnight));
    assert!(!game.is_check());

    // The knight on G8 covers F6 and H6
    let dark_moves = game.legal_moves();
    assert!(!dark_moves.contains(&Move::new(H7, H6)));
    assert!(dark_moves.contains(&Move::new(H7, G8)));
}

#[test]
fn errors_render_readable_messages() {
    let mut game = Game::default();

    let err = game.make_move(E2, E5).unwrap_err();
    assert!(err.to_string().contains("E5"));

    let err = game.make_move(E4, E5).unwrap_err();
    assert!(err.to_string().contains("E4"));
}
