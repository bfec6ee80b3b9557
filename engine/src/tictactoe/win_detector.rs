use super::board::Board;
use super::types::{Mark, Outcome, WinningLine};

/// Rows, then columns, then diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn winning_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = cells[a];
        if mark != Mark::Empty && cells[b] == mark && cells[c] == mark {
            Some(WinningLine::new(mark, line))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    winning_line(board).map(|line| line.mark)
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(outcome) = check_win(board).and_then(Outcome::win_for) {
        return outcome;
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::new()), Outcome::Ongoing);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut cells = [Mark::Empty; 9];
            for index in line {
                cells[index] = Mark::O;
            }
            let board = Board::from_cells(cells);
            assert_eq!(evaluate(&board), Outcome::OWon, "line {:?}", line);
            assert_eq!(winning_line(&board), Some(WinningLine::new(Mark::O, line)));
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        assert_eq!(evaluate(&board("XOX OXO OXO")), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        assert_eq!(evaluate(&board("XXX OOX OXO")), Outcome::XWon);
    }

    #[test]
    fn test_partial_board_without_line_is_ongoing() {
        assert_eq!(evaluate(&board("XO_ _X_ __O")), Outcome::Ongoing);
        assert_eq!(winning_line(&board("XO_ _X_ __O")), None);
    }

    #[test]
    fn test_double_win_reports_first_line_found() {
        // Unreachable in play.
        let both = board("XXX OOO ___");
        assert_eq!(evaluate(&both), Outcome::XWon);
        assert_eq!(winning_line(&both).map(|l| l.cells), Some([0, 1, 2]));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let terminal = board("OOO XX_ X__");
        let first = evaluate(&terminal);
        assert_eq!(first, Outcome::OWon);
        assert_eq!(evaluate(&terminal), first);
    }
}
