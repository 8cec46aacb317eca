//! Search: fixed-depth alpha-beta, forcing extension, move selection.

mod alphabeta;
mod forcing;
mod selector;
mod types;

pub use alphabeta::alpha_beta;
pub use forcing::{forcing_search, is_forcing};
pub use selector::select_move;
pub use types::{Score, SearchLimits, SearchResult, FORCING_DEPTH, INFINITY, PRIMARY_DEPTH};
