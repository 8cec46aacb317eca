pub mod engine;
pub mod uci;

pub use engine::eval::evaluate;
pub use engine::search::{select_move, SearchLimits, SearchResult};
pub use shakmaty;
pub use uci::UCI;
