use super::board::Board;
use super::types::{Outcome, Position, Symbol, WinningLine};

/// No side can complete a line before the fifth mark of a game that started empty.
pub const MIN_MOVES_FOR_WIN: usize = 5;

/// Rows, then columns, then the main diagonal, then the anti-diagonal.
const LINES: [[Position; 3]; 8] = [
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

/// Classifies `board` after `symbol` has just moved.
///
/// Only `symbol` is checked for three in a row, so callers must pass the side
/// that made the latest move. Boards with fewer than [`MIN_MOVES_FOR_WIN`]
/// marks are reported as incomplete without looking at the lines, which holds
/// for any position reached from an empty board but not for arbitrary input.
pub fn evaluate(board: &Board, symbol: Symbol) -> Outcome {
    if board.move_count() < MIN_MOVES_FOR_WIN {
        return Outcome::Incomplete;
    }

    if let Some(line) = find_winning_line(board, symbol) {
        return Outcome::Won(line);
    }

    if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::Incomplete
    }
}

/// First completed line of `symbol` in row, column, diagonal order.
pub fn find_winning_line(board: &Board, symbol: Symbol) -> Option<WinningLine> {
    LINES
        .iter()
        .find(|line| line.iter().all(|&cell| board.get(cell) == Some(symbol)))
        .map(|&cells| WinningLine::new(symbol, cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_incomplete() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Symbol::X), Outcome::Incomplete);
        assert_eq!(evaluate(&board, Symbol::O), Outcome::Incomplete);
    }

    #[test]
    fn test_fewer_than_five_marks_is_incomplete_even_with_a_line() {
        let board = board("XXX/.../...");
        assert_eq!(evaluate(&board, Symbol::X), Outcome::Incomplete);
        assert!(find_winning_line(&board, Symbol::X).is_some());
    }

    #[test]
    fn test_row_win() {
        let board = board("OO./XXX/...");
        let outcome = evaluate(&board, Symbol::X);
        assert_eq!(
            outcome,
            Outcome::Won(WinningLine::new(
                Symbol::X,
                [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
            ))
        );
        assert_eq!(outcome.winner(), Some(Symbol::X));
    }

    #[test]
    fn test_column_win() {
        let board = board("XO./XO./.OX");
        assert_eq!(
            evaluate(&board, Symbol::O),
            Outcome::Won(WinningLine::new(
                Symbol::O,
                [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
            ))
        );
    }

    #[test]
    fn test_diagonal_wins() {
        let main = board("XO./OX./..X");
        assert_eq!(
            evaluate(&main, Symbol::X).winning_line().map(|line| line.cells),
            Some([Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)])
        );

        let anti = board("XXO/XO./O..");
        assert_eq!(
            evaluate(&anti, Symbol::O).winning_line().map(|line| line.cells),
            Some([Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)])
        );
    }

    #[test]
    fn test_only_the_given_symbol_is_checked() {
        let board = board("XXX/OO./...");
        assert_eq!(evaluate(&board, Symbol::O), Outcome::Incomplete);
    }

    #[test]
    fn test_rows_are_reported_before_columns_and_diagonals() {
        let board = board("XXX/X../X.O");
        assert_eq!(
            evaluate(&board, Symbol::X).winning_line().map(|line| line.cells),
            Some([Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)])
        );
    }

    #[test]
    fn test_full_board_without_line_is_tie_for_either_symbol() {
        let board = board("XOX/XOO/OXX");
        assert_eq!(evaluate(&board, Symbol::X), Outcome::Tie);
        assert_eq!(evaluate(&board, Symbol::O), Outcome::Tie);
    }

    #[test]
    fn test_filling_last_cell_without_line_is_tie() {
        let board = board("XOX/XO./OXO");
        let filled = board.with_move(Position::new(1, 2), Symbol::X);
        assert_eq!(evaluate(&filled, Symbol::X), Outcome::Tie);
    }

    #[test]
    fn test_win_on_full_board_beats_tie() {
        let board = board("XOX/OXO/OXX");
        assert!(matches!(evaluate(&board, Symbol::X), Outcome::Won(_)));
    }

    #[test]
    fn test_partial_board_without_line_is_incomplete() {
        let board = board("XOX/.O./..X");
        assert_eq!(evaluate(&board, Symbol::X), Outcome::Incomplete);
    }
}
