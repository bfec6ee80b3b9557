use std::fmt;
use std::str::FromStr;

use crate::error::{EngineError, ParseBoardError};
use super::types::{BOARD_SIZE, CELL_COUNT, Mark};

/// Nine cells, row-major. `Copy`, so the search can own its scratch board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    /// Places `mark` on an empty cell.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), EngineError> {
        if mark == Mark::Empty {
            return Err(EngineError::InvalidMover);
        }
        match self.cells.get(index) {
            None => Err(EngineError::OutOfBounds { index }),
            Some(Mark::Empty) => {
                self.cells[index] = mark;
                Ok(())
            }
            Some(_) => Err(EngineError::CellOccupied { index }),
        }
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Empty cell indices in ascending order.
    pub fn get_available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();

        if symbols.len() != CELL_COUNT {
            return Err(ParseBoardError::WrongCellCount {
                found: symbols.len(),
            });
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (position, &character) in symbols.iter().enumerate() {
            cells[position] = Mark::from_symbol(character)
                .ok_or(ParseBoardError::InvalidCharacter { character, position })?;
        }

        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIZE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_separators_and_empty_symbols() {
        let board: Board = "XX_/OO./---".parse().unwrap();
        assert_eq!(board.get(0), Some(Mark::X));
        assert_eq!(board.get(3), Some(Mark::O));
        assert_eq!(board.get(2), Some(Mark::Empty));
        assert_eq!(board.count(Mark::Empty), 5);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let result = "XXO".parse::<Board>();
        assert_eq!(result, Err(ParseBoardError::WrongCellCount { found: 3 }));
    }

    #[test]
    fn test_parse_rejects_unknown_character() {
        let result = "XX_OO_Z__".parse::<Board>();
        assert_eq!(
            result,
            Err(ParseBoardError::InvalidCharacter { character: 'Z', position: 6 })
        );
    }

    #[test]
    fn test_display_prints_three_rows() {
        let board: Board = "X_O_X_O_X".parse().unwrap();
        assert_eq!(board.to_string(), "X.O\n.X.\nO.X");
    }

    #[test]
    fn test_available_moves_are_ascending() {
        let board: Board = "X_O_X_O_X".parse().unwrap();
        assert_eq!(board.get_available_moves(), vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_place_rejects_occupied_and_out_of_bounds() {
        let mut board = Board::new();
        board.place(4, Mark::X).unwrap();
        assert_eq!(board.place(4, Mark::O), Err(EngineError::CellOccupied { index: 4 }));
        assert_eq!(board.place(9, Mark::O), Err(EngineError::OutOfBounds { index: 9 }));
        assert_eq!(board.place(0, Mark::Empty), Err(EngineError::InvalidMover));
        assert_eq!(board.get(4), Some(Mark::X));
    }
}
