//! Forcing-move extension search.
//!
//! The same alpha-beta loop as the full-width search, with the root move
//! set restricted to captures and checking moves. The restriction applies
//! only at the root: one ply down the recursion continues through the
//! unrestricted search.

use shakmaty::{Chess, Move, Position};

use crate::engine::eval::evaluate;

use super::alphabeta::alpha_beta;
use super::types::{Score, SearchResult, INFINITY};

/// A capture, or a move that gives check.
pub fn is_forcing(pos: &Chess, mv: &Move) -> bool {
    mv.is_capture() || pos.clone().play(mv).unwrap().is_check()
}

/// Alpha-beta over forcing root moves only.
///
/// When the side to move has no capture and no checking move, the result
/// is `(None, 0)`: a neutral score marking "no forcing continuation",
/// distinct from a leaf evaluation.
pub fn forcing_search(
    pos: &Chess,
    depth: i32,
    maximizing: bool,
    mut alpha: Score,
    mut beta: Score,
) -> SearchResult {
    if depth == 0 || pos.is_game_over() {
        return SearchResult {
            best_move: None,
            score: evaluate(pos),
        };
    }

    let forcing: Vec<Move> = pos
        .legal_moves()
        .into_iter()
        .filter(|mv| is_forcing(pos, mv))
        .collect();

    if forcing.is_empty() {
        return SearchResult {
            best_move: None,
            score: 0,
        };
    }

    if maximizing {
        let mut best_score = -INFINITY;
        let mut best_move = None;

        for mv in forcing {
            let child = pos.clone().play(&mv).unwrap();
            let reply = alpha_beta(&child, depth - 1, false, alpha, beta);

            alpha = alpha.max(reply.score);
            if reply.score > best_score {
                best_score = reply.score;
                best_move = Some(mv);
            }

            if beta <= alpha {
                break;
            }
        }

        SearchResult {
            best_move,
            score: best_score,
        }
    } else {
        let mut best_score = INFINITY;
        let mut best_move = None;

        for mv in forcing {
            let child = pos.clone().play(&mv).unwrap();
            let reply = alpha_beta(&child, depth - 1, true, alpha, beta);

            beta = beta.min(reply.score);
            if reply.score < best_score {
                best_score = reply.score;
                best_move = Some(mv);
            }

            if beta <= alpha {
                break;
            }
        }

        SearchResult {
            best_move,
            score: best_score,
        }
    }
}
