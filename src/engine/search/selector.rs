//! Move selection: a full-width pass, then a deeper look at forcing lines.

use shakmaty::{CastlingMode, Chess, Color, Move, Position};

use super::alphabeta::alpha_beta;
use super::forcing::{forcing_search, is_forcing};
use super::types::{SearchLimits, FORCING_DEPTH, INFINITY, PRIMARY_DEPTH};

/// Pick a move for the side to move.
///
/// Runs the full-width search at [`PRIMARY_DEPTH`], oriented so the
/// maximizing side is Black. When the chosen move is a capture or gives
/// check, forcing lines are searched one ply deeper and that move takes
/// over if its score strictly beats the primary score. A forcing result
/// with no move never replaces the primary choice.
///
/// The limits are accepted for protocol compatibility; the depth policy is
/// fixed. Returns `None` only when the game is already over.
pub fn select_move(pos: &Chess, _limits: &SearchLimits) -> Option<Move> {
    let maximizing = pos.turn() == Color::Black;

    let primary = alpha_beta(pos, PRIMARY_DEPTH, maximizing, -INFINITY, INFINITY);
    let chosen = primary.best_move?;

    if !is_forcing(pos, &chosen) {
        return Some(chosen);
    }

    let deeper = forcing_search(pos, FORCING_DEPTH, maximizing, -INFINITY, INFINITY);
    if deeper.score > primary.score {
        if let Some(mv) = deeper.best_move {
            println!(
                "info string forcing line {} improves on {} ({} > {})",
                mv.to_uci(CastlingMode::Standard),
                chosen.to_uci(CastlingMode::Standard),
                deeper.score,
                primary.score
            );
            return Some(mv);
        }
    }

    Some(chosen)
}
