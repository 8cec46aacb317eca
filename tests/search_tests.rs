use shakmaty::{fen::Fen, CastlingMode, Chess, Color, Position};
use wunder_chess::engine::eval::evaluate;
use wunder_chess::engine::search::{alpha_beta, forcing_search, INFINITY};

fn from_fen(fen: &str) -> Chess {
    let f: Fen = fen.parse().unwrap();
    f.into_position(CastlingMode::Standard).unwrap()
}

/// Exhaustive minimax without pruning, for cross-checking scores.
fn plain_minimax(pos: &Chess, depth: i32, maximizing: bool) -> i32 {
    if depth == 0 || pos.is_game_over() {
        return evaluate(pos);
    }
    let scores = pos.legal_moves().into_iter().map(|mv| {
        let child = pos.clone().play(&mv).unwrap();
        plain_minimax(&child, depth - 1, !maximizing)
    });
    if maximizing {
        scores.max().unwrap()
    } else {
        scores.min().unwrap()
    }
}

// Fool's mate: White is checkmated.
const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3";

#[test]
fn test_checkmate_returns_no_move_and_static_eval() {
    let pos = from_fen(FOOLS_MATE);
    assert!(pos.is_checkmate());

    for depth in [1, 3, 4] {
        let result = alpha_beta(&pos, depth, false, -INFINITY, INFINITY);
        assert!(result.best_move.is_none());
        assert_eq!(result.score, evaluate(&pos));
    }
}

#[test]
fn test_stalemate_returns_no_move_and_static_eval() {
    let pos = from_fen("7k/8/6Q1/6K1/8/8/8/8 b - - 0 1");
    assert!(pos.is_stalemate());

    let result = alpha_beta(&pos, 3, true, -INFINITY, INFINITY);
    assert!(result.best_move.is_none());
    assert_eq!(result.score, evaluate(&pos));
}

#[test]
fn test_alpha_beta_matches_plain_minimax() {
    let positions = [
        Chess::default(),
        from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R b KQkq - 3 3"),
        from_fen("8/3k4/3p4/8/3P4/3K4/8/8 w - - 0 1"),
    ];

    for pos in &positions {
        let maximizing = pos.turn() == Color::Black;
        let pruned = alpha_beta(pos, 3, maximizing, -INFINITY, INFINITY);
        let exhaustive = plain_minimax(pos, 3, maximizing);
        assert_eq!(pruned.score, exhaustive);
    }
}

#[test]
fn test_alpha_beta_deeper_endgame_matches_plain_minimax() {
    let pos = from_fen("8/3k4/3p4/8/3P4/3K4/8/8 w - - 0 1");
    let pruned = alpha_beta(&pos, 4, false, -INFINITY, INFINITY);
    assert_eq!(pruned.score, plain_minimax(&pos, 4, false));
}

#[test]
fn test_search_startpos_finds_move() {
    let pos = Chess::default();
    let result = alpha_beta(&pos, 4, false, -INFINITY, INFINITY);
    let mv = result.best_move.expect("startpos has legal moves");
    assert!(pos.legal_moves().contains(&mv));
    assert!(result.score.abs() < INFINITY);
}

#[test]
fn test_forcing_search_no_tactics_is_neutral() {
    // Locked pawns, kings far apart: no captures, no checks.
    let quiet_white = from_fen("4k3/8/8/4p3/4P3/8/8/4K3 w - - 0 1");
    let quiet_black = from_fen("4k3/8/8/4p3/4P3/8/8/4K3 b - - 0 1");

    for depth in [1, 3, 5] {
        let white = forcing_search(&quiet_white, depth, false, -INFINITY, INFINITY);
        assert!(white.best_move.is_none());
        assert_eq!(white.score, 0);

        let black = forcing_search(&quiet_black, depth, true, -INFINITY, INFINITY);
        assert!(black.best_move.is_none());
        assert_eq!(black.score, 0);
    }
}

#[test]
fn test_forcing_search_terminal_evaluates_not_neutral() {
    // At a game-over position the terminal path runs before the root
    // filter, so the score is the static evaluation, not the neutral 0.
    let pos = from_fen(FOOLS_MATE);
    let result = forcing_search(&pos, 5, false, -INFINITY, INFINITY);
    assert!(result.best_move.is_none());
    assert_eq!(result.score, evaluate(&pos));
}

#[test]
fn test_forcing_search_finds_capture() {
    // Black's only forcing move is taking the hanging queen.
    let pos = from_fen("3r3k/8/8/3Q4/8/8/8/3R2K1 b - - 0 1");
    let result = forcing_search(&pos, 5, true, -INFINITY, INFINITY);
    let mv = result.best_move.expect("a capture is available");
    assert!(mv.is_capture());
    assert_eq!(mv.to_uci(CastlingMode::Standard).to_string(), "d8d5");
}

#[test]
fn test_depth_zero_is_static_eval() {
    let pos = Chess::default();
    let result = alpha_beta(&pos, 0, false, -INFINITY, INFINITY);
    assert!(result.best_move.is_none());
    assert_eq!(result.score, evaluate(&pos));
}
