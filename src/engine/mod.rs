//! Chess engine components
//!
//! This module contains the core engine functionality:
//! - Material and piece-square evaluation
//! - Fixed-depth minimax with alpha-beta pruning
//! - Forcing-move extension search and move selection

pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use search::{select_move, Score, SearchLimits, SearchResult, INFINITY};
