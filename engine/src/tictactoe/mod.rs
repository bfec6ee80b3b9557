mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{SearchMode, SearchReport, search, select_move};
pub use game_state::GameState;
pub use types::{BOARD_SIZE, CELL_COUNT, Mark, Outcome, Position, WinningLine};
pub use win_detector::{LINES, check_win, evaluate, winning_line};
