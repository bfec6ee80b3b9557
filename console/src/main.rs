mod config;
mod runner;

use clap::{Parser, Subcommand};
use std::io;
use tictactoe_engine::logger::{self, LogTarget};
use tictactoe_engine::{Board, Mark, SearchMode, log};

#[derive(Parser)]
#[command(name = "tictactoe_console")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// Config file path; defaults to a file next to the executable.
    #[arg(long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the engine's move for a board, e.g. "XX_OO____".
    BestMove {
        #[arg(long)]
        board: Board,
        #[arg(long, value_parser = parse_mark)]
        mover: Mark,
        /// Use alpha-beta pruning instead of the configured search mode.
        #[arg(long)]
        alpha_beta: bool,
    },
    /// Print the outcome of a board: Ongoing, X wins, O wins or Draw.
    Evaluate {
        #[arg(long)]
        board: Board,
    },
    /// Play against the engine on stdin.
    Play,
    /// Let the engine play both sides and print the game.
    SelfPlay,
}

impl Command {
    /// One-shot commands keep stdout for their answer.
    fn log_target(&self) -> LogTarget {
        match self {
            Command::BestMove { .. } | Command::Evaluate { .. } => LogTarget::Stderr,
            Command::Play | Command::SelfPlay => LogTarget::Stdout,
        }
    }
}

fn parse_mark(value: &str) -> Result<Mark, String> {
    match value {
        "X" | "x" => Ok(Mark::X),
        "O" | "o" => Ok(Mark::O),
        _ => Err(format!("Unknown mark '{}', expected X or O", value)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Console".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.command.log_target());

    let config_manager = config::get_config_manager(args.config.as_deref());
    let config = config_manager.get_config()?;
    log!(
        "Loaded config: engine plays {}, {} moves first, {:?} search",
        config.automated_mark,
        config.first_mark,
        config.search_mode
    );

    let mut output = io::stdout();
    match args.command {
        Command::BestMove { board, mover, alpha_beta } => {
            let mode = if alpha_beta {
                SearchMode::AlphaBeta
            } else {
                config.search_mode
            };
            runner::best_move(&board, mover, mode, config.log_search_stats, &mut output)?;
        }
        Command::Evaluate { board } => {
            runner::evaluate_board(&board, &mut output)?;
        }
        Command::Play => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            runner::play(&config, &mut input, &mut output)?;
        }
        Command::SelfPlay => {
            runner::self_play(
                config.first_mark,
                config.search_mode,
                config.log_search_stats,
                &mut output,
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_commands_log_to_stderr() {
        let args = Args::parse_from(["tictactoe_console", "best-move", "--board", "XX_OO____", "--mover", "X"]);
        assert_eq!(args.command.log_target(), LogTarget::Stderr);

        let args = Args::parse_from(["tictactoe_console", "evaluate", "--board", "XOXOXOOXO"]);
        assert_eq!(args.command.log_target(), LogTarget::Stderr);

        let args = Args::parse_from(["tictactoe_console", "self-play"]);
        assert_eq!(args.command.log_target(), LogTarget::Stdout);
    }

    #[test]
    fn test_best_move_arguments_parse() {
        let args = Args::parse_from([
            "tictactoe_console",
            "--config",
            "none.yaml",
            "best-move",
            "--board",
            "XX_OO____",
            "--mover",
            "o",
            "--alpha-beta",
        ]);
        assert_eq!(args.config.as_deref(), Some("none.yaml"));
        match args.command {
            Command::BestMove { board, mover, alpha_beta } => {
                assert_eq!(board, "XX_OO____".parse::<Board>().unwrap());
                assert_eq!(mover, Mark::O);
                assert!(alpha_beta);
            }
            _ => panic!("expected best-move"),
        }
    }

    #[test]
    fn test_unknown_mark_is_rejected() {
        let result = Args::try_parse_from([
            "tictactoe_console", "best-move", "--board", "XX_OO____", "--mover", "Z",
        ]);
        assert!(result.is_err());
    }
}
