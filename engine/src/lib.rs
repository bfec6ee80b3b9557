pub mod config;
pub mod error;
pub mod logger;
pub mod tictactoe;

pub use error::{EngineError, ParseBoardError};
pub use tictactoe::{
    Board, GameState, Mark, Outcome, Position, SearchMode, SearchReport, WinningLine, evaluate,
    search, select_move, winning_line,
};
