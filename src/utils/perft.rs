use crate::core::Move;
use crate::game::Game;

/// Number of leaf positions reachable from `game` in exactly `depth` plies.
///
/// Each child is played on a clone of its parent, so the board's single
/// snapshot slot is never nested.
pub fn perft(game: &Game, depth: usize) -> usize {
    if depth == 0 {
        return 1;
    }

    let moves = game.legal_moves();

    if depth == 1 {
        return moves.len();
    }

    moves
        .into_iter()
        .filter_map(|mv| child(game, mv))
        .map(|next| perft(&next, depth - 1))
        .sum()
}

/// Leaf counts split by root move, in generation order.
///
/// Summing the counts gives [`perft`] for the same depth.
pub fn perft_divide(game: &Game, depth: usize) -> Vec<(Move, usize)> {
    if depth == 0 {
        return Vec::new();
    }

    game.legal_moves()
        .into_iter()
        .filter_map(|mv| child(game, mv).map(|next| (mv, perft(&next, depth - 1))))
        .collect()
}

fn child(game: &Game, mv: Move) -> Option<Game> {
    let mut next = game.clone();
    next.play(mv).ok().map(|_| next)
}
