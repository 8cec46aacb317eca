//! Full-width minimax with alpha-beta pruning.

use shakmaty::{Chess, Position};

use crate::engine::eval::evaluate;

use super::types::{Score, SearchResult, INFINITY};

/// Depth-limited minimax over every legal move.
///
/// `maximizing` orients the node: Black is the maximizing side, matching
/// the evaluation's sign convention. Moves are taken in move-generation
/// order and only a strict improvement replaces the current best, so among
/// equal-scoring moves the first one found is kept. A `beta <= alpha`
/// window collapse stops the loop; the best line found so far still comes
/// back.
pub fn alpha_beta(
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

    if maximizing {
        let mut best_score = -INFINITY;
        let mut best_move = None;

        for mv in pos.legal_moves() {
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

        for mv in pos.legal_moves() {
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
