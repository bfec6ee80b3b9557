use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// No empty cell is left, so there is no legal move to pick.
    InvalidState,
    InvalidMover,
    GameOver,
    OutOfBounds { index: usize },
    CellOccupied { index: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidState => write!(f, "Invalid state: board has no empty cell"),
            EngineError::InvalidMover => write!(f, "Mover must be X or O"),
            EngineError::GameOver => write!(f, "Game is already over"),
            EngineError::OutOfBounds { index } => {
                write!(f, "Cell index {} is out of bounds (expected 0..=8)", index)
            }
            EngineError::CellOccupied { index } => write!(f, "Cell {} is already marked", index),
        }
    }
}

impl std::error::Error for EngineError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    WrongCellCount { found: usize },
    InvalidCharacter { character: char, position: usize },
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::WrongCellCount { found } => {
                write!(f, "Board must have 9 cells, found {}", found)
            }
            ParseBoardError::InvalidCharacter { character, position } => {
                write!(f, "Invalid character '{}' at cell {}", character, position)
            }
        }
    }
}

impl std::error::Error for ParseBoardError {}
