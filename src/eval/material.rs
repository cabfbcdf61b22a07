//! Material-count heuristic
//!
//! Scores a position from the maximizer's (O's) perspective as a plain
//! mark count: +1 per O cell, -1 per X cell. This is deliberately coarse
//! — it sees no line threats, no forks, no center control. Tactical
//! strength comes entirely from the depth-scaled terminal scores in the
//! search; the heuristic only breaks ties between quiet cutoff positions.

use crate::board::{Board, Mark};

/// Evaluate a non-terminal (or depth-cutoff) position.
///
/// Positive values favor O (the computer), negative values favor X.
#[inline]
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    board.mark_count(Mark::O) as i32 - board.mark_count(Mark::X) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardSize, Pos};

    #[test]
    fn test_empty_board_is_neutral() {
        let board = Board::new(BoardSize::ThreeByThree);
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn test_counts_from_maximizer_perspective() {
        let mut board = Board::new(BoardSize::ThreeByThree);
        board.place(Pos::new(0, 0), Mark::O);
        board.place(Pos::new(1, 1), Mark::O);
        board.place(Pos::new(2, 2), Mark::X);
        assert_eq!(evaluate(&board), 1);
    }

    #[test]
    fn test_balanced_board_is_neutral() {
        let mut board = Board::new(BoardSize::FiveByFive);
        board.place(Pos::new(0, 0), Mark::X);
        board.place(Pos::new(4, 4), Mark::O);
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn test_ignores_line_structure() {
        // Two O in a row and two O scattered score the same: the
        // heuristic is material only.
        let mut in_row = Board::new(BoardSize::ThreeByThree);
        in_row.place(Pos::new(0, 0), Mark::O);
        in_row.place(Pos::new(0, 1), Mark::O);

        let mut scattered = Board::new(BoardSize::ThreeByThree);
        scattered.place(Pos::new(0, 0), Mark::O);
        scattered.place(Pos::new(2, 2), Mark::O);

        assert_eq!(evaluate(&in_row), evaluate(&scattered));
    }
}
