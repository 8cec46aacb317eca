//! Search results, limits, score sentinels, and the depth policy.

use shakmaty::Move;

pub type Score = i32;

/// Window sentinel: wider than any static evaluation can reach, small
/// enough to negate and compare without overflow.
pub const INFINITY: Score = 30_000;

/// Depth of the full-width search.
pub const PRIMARY_DEPTH: i32 = 4;

/// Depth of the forcing-move extension search. One ply deeper than the
/// full-width pass; not adaptive to game phase or clock.
pub const FORCING_DEPTH: i32 = 5;

/// Outcome of one search call: the best move found and its score.
///
/// `best_move` is `None` at terminal leaves and when the forcing search
/// has no candidate at the root; those are the only no-move cases.
#[derive(Clone, Debug)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: Score,
}

/// Parameters handed down by the protocol adapter. The engine searches to
/// a fixed depth, so clock and ponder information is accepted but does not
/// steer the search.
#[derive(Clone, Debug, Default)]
pub struct SearchLimits {
    pub movetime: Option<u64>,
    pub wtime: Option<u64>,
    pub btime: Option<u64>,
    pub winc: Option<u64>,
    pub binc: Option<u64>,
    pub infinite: bool,
    pub ponder: bool,
    /// Set when the opponent offered a draw. Platform adapters pass it
    /// through; the search ignores it.
    pub draw_offered: bool,
}
