mod board;
mod bot_controller;
mod session;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, CELL_COUNT};
pub use bot_controller::{
    LOSS_SCORE, TIE_SCORE, WIN_SCORE, best_move, best_move_with_rng, calculate_move, is_legal_move,
};
pub use session::{Controller, GameSession, HUMAN_PLAYER, MoveResult, OPPONENT_PLAYER, Player, View};
pub use types::{BotType, FirstPlayerMode, Outcome, Position, ScoredMove, Symbol, WinningLine};
pub use win_detector::{MIN_MOVES_FOR_WIN, evaluate, find_winning_line};
