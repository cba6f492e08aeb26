use std::fmt;
use std::str::FromStr;

use super::types::{Position, Symbol};

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Symbol>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(position: Position) -> bool {
        position.row < BOARD_SIZE && position.column < BOARD_SIZE
    }

    pub fn get(&self, position: Position) -> Option<Symbol> {
        self.cells[position.row][position.column]
    }

    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    /// Writes `symbol` without checking the cell; callers validate first.
    pub fn place(&mut self, position: Position, symbol: Symbol) {
        self.cells[position.row][position.column] = Some(symbol);
    }

    pub fn with_move(&self, position: Position, symbol: Symbol) -> Board {
        let mut next = *self;
        next.place(position, symbol);
        next
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::with_capacity(CELL_COUNT);
        for (row, cells) in self.cells.iter().enumerate() {
            for (column, cell) in cells.iter().enumerate() {
                if cell.is_none() {
                    moves.push(Position::new(row, column));
                }
            }
        }
        moves
    }

    pub fn move_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_some())
            .count()
    }

    pub fn count_of(&self, symbol: Symbol) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == Some(symbol))
            .count()
    }

    pub fn is_full(&self) -> bool {
        self.move_count() == CELL_COUNT
    }

    pub fn rows(&self) -> &[[Option<Symbol>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl From<[[Option<Symbol>; BOARD_SIZE]; BOARD_SIZE]> for Board {
    fn from(cells: [[Option<Symbol>; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }
}

/// Accepts three rows of three cells separated by `/` or newlines.
/// `X` and `O` (any case) are marks, `.`, `_` and space are empty.
impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(|row| row.trim_end_matches('\r'))
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE {
            return Err(format!("Expected {} rows, got {}", BOARD_SIZE, rows.len()));
        }

        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(format!(
                    "Row {} must have {} cells, got {}",
                    row,
                    BOARD_SIZE,
                    chars.len()
                ));
            }
            for (column, ch) in chars.into_iter().enumerate() {
                board.cells[row][column] = match ch {
                    'X' | 'x' => Some(Symbol::X),
                    'O' | 'o' => Some(Symbol::O),
                    '.' | '_' | ' ' => None,
                    other => return Err(format!("Unexpected cell '{}' at row {}", other, row)),
                };
            }
        }
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.iter().enumerate() {
            if index > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                let ch = cell.map_or('.', Symbol::as_char);
                write!(f, "{}", ch)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.move_count(), 0);
        assert_eq!(board.available_moves().len(), CELL_COUNT);
        assert!(!board.is_full());
    }

    #[test]
    fn test_available_moves_are_row_major() {
        let board: Board = "X.O/.X./O..".parse().unwrap();
        let moves = board.available_moves();
        assert_eq!(
            moves,
            vec![
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 2),
                Position::new(2, 1),
                Position::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_with_move_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_move(Position::new(1, 1), Symbol::X);
        assert!(board.is_empty_at(Position::new(1, 1)));
        assert_eq!(next.get(Position::new(1, 1)), Some(Symbol::X));
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "xx_\noo \n...".parse().unwrap();
        assert_eq!(board.count_of(Symbol::X), 2);
        assert_eq!(board.count_of(Symbol::O), 2);
        assert_eq!(board.to_string(), "XX./OO./...");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!("XX./OO.".parse::<Board>().is_err());
        assert!("XX./OO./....".parse::<Board>().is_err());
        assert!("XX./OZ./...".parse::<Board>().is_err());
    }

    #[test]
    fn test_contains_checks_bounds() {
        assert!(Board::contains(Position::new(2, 2)));
        assert!(!Board::contains(Position::new(3, 0)));
        assert!(!Board::contains(Position::new(0, 3)));
    }
}
