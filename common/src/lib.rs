pub mod config;
pub mod logger;
pub mod rng;
pub mod tictactoe;

pub use tictactoe::{Board, Outcome, Position, ScoredMove, Symbol, best_move, evaluate};
