//! WunderChess UCI Chess Engine

use wunder_chess::uci::UCI;

fn main() {
    println!("WunderChess v0.1.0 - UCI Chess Engine");
    println!("Type 'uci' to start UCI mode, 'd' to display board, 'quit' to exit");

    let mut uci = UCI::new();
    uci.run();
}
