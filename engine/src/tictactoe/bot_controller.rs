use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use super::board::Board;
use super::types::{Mark, Outcome};
use super::win_detector::evaluate;

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchMode {
    /// Full minimax tree, no cutoffs.
    #[default]
    Exhaustive,
    AlphaBeta,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchReport {
    pub index: usize,
    pub score: i32,
    pub nodes: u64,
    pub leaves: u64,
}

#[derive(Default)]
struct SearchCounters {
    nodes: u64,
    leaves: u64,
}

struct Searcher {
    bot_mark: Mark,
    opponent_mark: Mark,
    mode: SearchMode,
    counters: SearchCounters,
}

/// Picks the empty cell with the best guaranteed score for `mover`.
/// Ties go to the lowest index.
pub fn select_move(board: &Board, mover: Mark) -> Result<usize, EngineError> {
    search(board, mover, SearchMode::Exhaustive).map(|report| report.index)
}

pub fn search(board: &Board, mover: Mark, mode: SearchMode) -> Result<SearchReport, EngineError> {
    let opponent_mark = mover.opponent().ok_or(EngineError::InvalidMover)?;
    let available_moves = board.get_available_moves();
    if available_moves.is_empty() {
        return Err(EngineError::InvalidState);
    }

    let mut searcher = Searcher {
        bot_mark: mover,
        opponent_mark,
        mode,
        counters: SearchCounters::default(),
    };

    let mut scratch = *board;
    let mut best: Option<(usize, i32)> = None;

    for index in available_moves {
        // Strict `>` keeps the first index on ties, and lets alpha-beta children
        // return bounds for moves that cannot beat the current best.
        let alpha = best.map_or(i32::MIN, |(_, score)| score);

        scratch.set(index, mover);
        let score = searcher.minimax(&mut scratch, false, alpha, i32::MAX);
        scratch.set(index, Mark::Empty);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    let (index, score) = best.ok_or(EngineError::InvalidState)?;
    Ok(SearchReport {
        index,
        score,
        nodes: searcher.counters.nodes,
        leaves: searcher.counters.leaves,
    })
}

fn score_outcome(outcome: Outcome, bot_mark: Mark) -> Option<i32> {
    match outcome {
        Outcome::Ongoing => None,
        Outcome::Draw => Some(DRAW_SCORE),
        won if won.winner() == Some(bot_mark) => Some(WIN_SCORE),
        _ => Some(LOSS_SCORE),
    }
}

impl Searcher {
    fn minimax(&mut self, board: &mut Board, is_maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.counters.nodes += 1;

        if let Some(terminal_score) = score_outcome(evaluate(board), self.bot_mark) {
            self.counters.leaves += 1;
            return terminal_score;
        }

        let prune = self.mode == SearchMode::AlphaBeta;
        let moves = board.get_available_moves();

        if is_maximizing {
            let mut max_eval = i32::MIN;
            for index in moves {
                board.set(index, self.bot_mark);
                let eval = self.minimax(board, false, alpha, beta);
                board.set(index, Mark::Empty);

                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if prune && beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for index in moves {
                board.set(index, self.opponent_mark);
                let eval = self.minimax(board, true, alpha, beta);
                board.set(index, Mark::Empty);

                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if prune && beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }
}
