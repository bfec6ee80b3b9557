use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '_' | '.' | '-' => Some(Mark::Empty),
            _ => None,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    XWon,
    OWon,
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        *self != Outcome::Ongoing
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::XWon => Some(Mark::X),
            Outcome::OWon => Some(Mark::O),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    pub(crate) fn win_for(mark: Mark) -> Option<Outcome> {
        match mark {
            Mark::X => Some(Outcome::XWon),
            Mark::O => Some(Outcome::OWon),
            Mark::Empty => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "Ongoing"),
            Outcome::XWon => write!(f, "X wins"),
            Outcome::OWon => write!(f, "O wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Row/column view of a cell index. Row-major: `index = row * 3 + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(Self::new(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    pub fn to_index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> Position {
        Position::new(self.cells[0] / BOARD_SIZE, self.cells[0] % BOARD_SIZE)
    }

    pub fn end(&self) -> Position {
        Position::new(self.cells[2] / BOARD_SIZE, self.cells[2] % BOARD_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Some(Mark::O));
        assert_eq!(Mark::O.opponent(), Some(Mark::X));
        assert_eq!(Mark::Empty.opponent(), None);
    }

    #[test]
    fn test_position_index_mapping_is_row_major() {
        assert_eq!(Position::from_index(5), Some(Position::new(1, 2)));
        assert_eq!(Position::new(2, 0).to_index(), 6);
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::XWon.winner(), Some(Mark::X));
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(Outcome::Draw.is_terminal());
        assert!(!Outcome::Ongoing.is_terminal());
    }

    #[test]
    fn test_winning_line_endpoints() {
        let line = WinningLine::new(Mark::O, [2, 4, 6]);
        assert_eq!(line.start(), Position::new(0, 2));
        assert_eq!(line.end(), Position::new(2, 0));
        assert_eq!(line.end().to_string(), "(2, 0)");
    }
}
