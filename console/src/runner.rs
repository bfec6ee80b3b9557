use std::error::Error;
use std::io::{BufRead, Write};

use tictactoe_engine::tictactoe::BOARD_SIZE;
use tictactoe_engine::{
    Board, GameState, Mark, Outcome, Position, SearchMode, evaluate, log, log_warn, search,
};

use crate::config::ConsoleConfig;

fn engine_move(
    state: &mut GameState,
    mode: SearchMode,
    log_search_stats: bool,
) -> Result<usize, Box<dyn Error>> {
    let mover = state.current_mark;
    let report = search(&state.board, mover, mode)?;
    if log_search_stats {
        log!(
            "{} searched {} nodes ({} leaves), score {}",
            mover,
            report.nodes,
            report.leaves,
            report.score
        );
    }
    state.place_mark(report.index)?;
    if let Some(position) = Position::from_index(report.index) {
        log!("{} plays {} at {}", mover, report.index, position);
    }
    Ok(report.index)
}

fn write_result(state: &GameState, output: &mut impl Write) -> Result<(), Box<dyn Error>> {
    writeln!(output, "{}", state.board)?;
    match state.winning_line() {
        Some(line) => writeln!(
            output,
            "{} wins from {} to {}",
            line.mark,
            line.start(),
            line.end()
        )?,
        None => writeln!(output, "{}", state.status)?,
    }
    Ok(())
}

/// Accepts a cell index (`4`) or a row and column (`1 1`, `1,1`).
fn parse_cell(input: &str) -> Option<usize> {
    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [index] => index.parse().ok(),
        [row, col] => {
            let position = Position::new(row.parse().ok()?, col.parse().ok()?);
            if position.row >= BOARD_SIZE || position.col >= BOARD_SIZE {
                return None;
            }
            Some(position.to_index())
        }
        _ => None,
    }
}

/// Writes only the chosen index, so the output can be piped.
pub fn best_move(
    board: &Board,
    mover: Mark,
    mode: SearchMode,
    log_search_stats: bool,
    output: &mut impl Write,
) -> Result<usize, Box<dyn Error>> {
    let report = search(board, mover, mode)?;
    if log_search_stats {
        log!(
            "Searched {} nodes ({} leaves), score {}",
            report.nodes,
            report.leaves,
            report.score
        );
    }
    writeln!(output, "{}", report.index)?;
    Ok(report.index)
}

pub fn evaluate_board(board: &Board, output: &mut impl Write) -> Result<Outcome, Box<dyn Error>> {
    let outcome = evaluate(board);
    writeln!(output, "{}", outcome)?;
    Ok(outcome)
}

/// Engine plays `config.automated_mark`, the other side is read from `input`
/// as cell indices. Stops early on end of input or `q`.
pub fn play(
    config: &ConsoleConfig,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<Outcome, Box<dyn Error>> {
    let mut state = GameState::new(config.first_mark)?;

    while state.status == Outcome::Ongoing {
        if state.current_mark == config.automated_mark {
            let index = engine_move(&mut state, config.search_mode, config.log_search_stats)?;
            writeln!(output, "{} plays {}", config.automated_mark, index)?;
            continue;
        }

        writeln!(output, "{}", state.board)?;
        write!(output, "{} to move (0-8 or row col, q to quit): ", state.current_mark)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 || line.trim() == "q" {
            log!("Game abandoned");
            return Ok(state.status);
        }

        let Some(index) = parse_cell(line.trim()) else {
            writeln!(output, "Enter a cell index between 0 and 8, or a row and column")?;
            continue;
        };

        if let Err(err) = state.place_mark(index) {
            log_warn!("Rejected move {}: {}", index, err);
            writeln!(output, "{}", err)?;
        }
    }

    write_result(&state, output)?;
    log!("Game over: {}", state.status);
    Ok(state.status)
}

/// Engine plays both sides from an empty board.
pub fn self_play(
    first: Mark,
    mode: SearchMode,
    log_search_stats: bool,
    output: &mut impl Write,
) -> Result<Outcome, Box<dyn Error>> {
    let mut state = GameState::new(first)?;

    while state.status == Outcome::Ongoing {
        let mover = state.current_mark;
        let index = engine_move(&mut state, mode, log_search_stats)?;
        writeln!(output, "{} plays {}", mover, index)?;
    }

    write_result(&state, output)?;
    log!("Self-play finished: {}", state.status);
    Ok(state.status)
}
