use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use super::board::{Board, CELL_COUNT};
use super::types::{BotType, Outcome, Position, ScoredMove, Symbol};
use super::win_detector::evaluate;

pub const WIN_SCORE: i32 = 1;
pub const TIE_SCORE: i32 = 0;
pub const LOSS_SCORE: i32 = -1;

pub fn calculate_move<R: Rng + ?Sized>(
    bot_type: BotType,
    board: &Board,
    symbol: Symbol,
    rng: &mut R,
) -> Result<ScoredMove, String> {
    match bot_type {
        BotType::Random => calculate_random_move(board, rng),
        BotType::Minimax => best_move_with_rng(board, symbol, rng),
    }
}

/// The score of a random move is not searched and is reported as a tie.
fn calculate_random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<ScoredMove, String> {
    board
        .available_moves()
        .choose(rng)
        .map(|&position| ScoredMove::new(position, TIE_SCORE))
        .ok_or_else(|| "No legal moves available".to_string())
}

pub fn best_move(board: &Board, symbol: Symbol) -> Result<ScoredMove, String> {
    best_move_with_rng(board, symbol, &mut rand::rng())
}

/// Optimal move for `symbol` by exhaustive minimax.
///
/// The first winning move in row-major order is returned as soon as it is
/// found. All other candidates are scored, shuffled with `rng` and stably
/// sorted by descending score, so equally good moves are picked uniformly.
pub fn best_move_with_rng<R: Rng + ?Sized>(
    board: &Board,
    symbol: Symbol,
    rng: &mut R,
) -> Result<ScoredMove, String> {
    search(board, symbol, rng).ok_or_else(|| "No legal moves available".to_string())
}

fn search<R: Rng + ?Sized>(board: &Board, symbol: Symbol, rng: &mut R) -> Option<ScoredMove> {
    let mut scored: Vec<ScoredMove> = Vec::with_capacity(CELL_COUNT);

    for position in board.available_moves() {
        let next = board.with_move(position, symbol);
        let score = match evaluate(&next, symbol) {
            Outcome::Won(_) => return Some(ScoredMove::new(position, WIN_SCORE)),
            Outcome::Tie => TIE_SCORE,
            // An incomplete board always has an empty cell, so the reply exists.
            Outcome::Incomplete => match search(&next, symbol.opponent(), rng) {
                Some(reply) => -reply.score,
                None => TIE_SCORE,
            },
        };
        scored.push(ScoredMove::new(position, score));
    }

    scored.shuffle(rng);
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.first().copied()
}

pub fn is_legal_move(board: &Board, position: Position) -> bool {
    Board::contains(position) && board.is_empty_at(position)
}
