use crate::error::EngineError;
use super::board::Board;
use super::bot_controller::{SearchMode, search};
use super::types::{Mark, Outcome, WinningLine};
use super::win_detector::{evaluate, winning_line};

/// Board plus turn flag, owned by whoever drives the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: Outcome,
    pub last_move: Option<usize>,
}

impl GameState {
    pub fn new(first: Mark) -> Result<Self, EngineError> {
        if first == Mark::Empty {
            return Err(EngineError::InvalidMover);
        }

        Ok(Self {
            board: Board::new(),
            current_mark: first,
            status: Outcome::Ongoing,
            last_move: None,
        })
    }

    pub fn place_mark(&mut self, index: usize) -> Result<(), EngineError> {
        if self.status != Outcome::Ongoing {
            return Err(EngineError::GameOver);
        }

        self.board.place(index, self.current_mark)?;
        self.last_move = Some(index);
        self.status = evaluate(&self.board);

        if self.status == Outcome::Ongoing {
            self.switch_turn();
        }

        Ok(())
    }

    /// Lets the engine move for `current_mark`. Returns the cell played.
    pub fn play_best_move(&mut self, mode: SearchMode) -> Result<usize, EngineError> {
        if self.status != Outcome::Ongoing {
            return Err(EngineError::GameOver);
        }

        let index = search(&self.board, self.current_mark, mode)?.index;
        self.place_mark(index)?;
        Ok(index)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        winning_line(&self.board)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}
