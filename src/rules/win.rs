//! Win and draw detection
//!
//! A mark wins by holding EVERY cell of a row, a column, or one of the
//! two main diagonals. This holds for both board sizes: on 5x5 a full
//! line of five is required, and no shorter-run detection exists.

use crate::board::{Board, Mark, Pos};

/// Round verdict, derived from the board on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    XWins,
    OWins,
    Draw,
    InProgress,
}

/// Check for a winner.
///
/// Scans all N rows, all N columns, then the two main diagonals.
/// Returns `Some(mark)` if any complete line holds the same non-empty
/// mark, `None` otherwise.
#[must_use]
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

/// Find the winning line if one exists.
///
/// Returns the winner together with the N cells of its line; consumed by
/// the UI to highlight the result. Lines are disjoint predicates, so the
/// scan order (rows, columns, diagonals) has no behavioral effect.
#[must_use]
pub fn winning_line(board: &Board) -> Option<(Mark, Vec<Pos>)> {
    let n = board.n() as u8;

    for row in 0..n {
        let line: Vec<Pos> = (0..n).map(|col| Pos::new(row, col)).collect();
        if let Some(mark) = line_holder(board, &line) {
            return Some((mark, line));
        }
    }

    for col in 0..n {
        let line: Vec<Pos> = (0..n).map(|row| Pos::new(row, col)).collect();
        if let Some(mark) = line_holder(board, &line) {
            return Some((mark, line));
        }
    }

    let diag: Vec<Pos> = (0..n).map(|i| Pos::new(i, i)).collect();
    if let Some(mark) = line_holder(board, &diag) {
        return Some((mark, diag));
    }

    let anti: Vec<Pos> = (0..n).map(|i| Pos::new(i, n - 1 - i)).collect();
    if let Some(mark) = line_holder(board, &anti) {
        return Some((mark, anti));
    }

    None
}

/// The mark holding every cell of `line`, if any
fn line_holder(board: &Board, line: &[Pos]) -> Option<Mark> {
    let first = board.get(line[0]);
    if first == Mark::Empty {
        return None;
    }
    line.iter().all(|&pos| board.get(pos) == first).then_some(first)
}

/// Derive the round verdict from the board
#[must_use]
pub fn outcome(board: &Board) -> Outcome {
    match check_winner(board) {
        Some(Mark::X) => Outcome::XWins,
        Some(Mark::O) => Outcome::OWins,
        _ => {
            if board.is_full() {
                Outcome::Draw
            } else {
                Outcome::InProgress
            }
        }
    }
}

/// A move is valid iff the target cell is empty
#[inline]
#[must_use]
pub fn is_valid_move(board: &Board, pos: Pos) -> bool {
    board.is_empty(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;

    fn board_3x3() -> Board {
        Board::new(BoardSize::ThreeByThree)
    }

    fn board_5x5() -> Board {
        Board::new(BoardSize::FiveByFive)
    }

    #[test]
    fn test_row_win() {
        let mut board = board_3x3();
        for col in 0..3 {
            board.place(Pos::new(1, col), Mark::O);
        }
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_column_win() {
        let mut board = board_3x3();
        for row in 0..3 {
            board.place(Pos::new(row, 2), Mark::X);
        }
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_main_diagonal_win() {
        let mut board = board_3x3();
        for i in 0..3 {
            board.place(Pos::new(i, i), Mark::O);
        }
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let mut board = board_3x3();
        for i in 0..3 {
            board.place(Pos::new(i, 2 - i), Mark::X);
        }
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_no_winner_on_empty_board() {
        assert_eq!(check_winner(&board_3x3()), None);
        assert_eq!(check_winner(&board_5x5()), None);
    }

    #[test]
    fn test_5x5_row_win_needs_all_five() {
        let mut board = board_5x5();
        // Four in a row of five, fifth cell empty: not a win.
        for col in 0..4 {
            board.place(Pos::new(2, col), Mark::O);
        }
        assert_eq!(check_winner(&board), None);

        board.place(Pos::new(2, 4), Mark::O);
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_5x5_diagonal_win() {
        let mut board = board_5x5();
        for i in 0..5 {
            board.place(Pos::new(i, i), Mark::X);
        }
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_5x5_column_win() {
        let mut board = board_5x5();
        for row in 0..5 {
            board.place(Pos::new(row, 3), Mark::X);
        }
        assert_eq!(check_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_5x5_anti_diagonal_win() {
        let mut board = board_5x5();
        for i in 0..5 {
            board.place(Pos::new(i, 4 - i), Mark::O);
        }
        assert_eq!(check_winner(&board), Some(Mark::O));
    }

    #[test]
    fn test_off_center_diagonal_is_not_a_win() {
        let mut board = board_5x5();
        // A diagonal run of five that is not a main diagonal does not count.
        board.place(Pos::new(0, 1), Mark::O);
        board.place(Pos::new(1, 2), Mark::O);
        board.place(Pos::new(2, 3), Mark::O);
        board.place(Pos::new(3, 4), Mark::O);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = board_3x3();
        board.place(Pos::new(0, 0), Mark::X);
        board.place(Pos::new(0, 1), Mark::O);
        board.place(Pos::new(0, 2), Mark::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winning_line_positions() {
        let mut board = board_3x3();
        for col in 0..3 {
            board.place(Pos::new(0, col), Mark::X);
        }
        let (mark, line) = winning_line(&board).unwrap();
        assert_eq!(mark, Mark::X);
        assert_eq!(line, vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2)]);
    }

    #[test]
    fn test_outcome_in_progress() {
        let mut board = board_3x3();
        board.place(Pos::new(0, 0), Mark::X);
        assert_eq!(outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_outcome_draw_on_full_board() {
        let mut board = board_3x3();
        // X O X / X O O / O X X: full, no complete line.
        let marks = [
            Mark::X, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::O,
            Mark::O, Mark::X, Mark::X,
        ];
        for (pos, mark) in board.positions().collect::<Vec<_>>().into_iter().zip(marks) {
            board.place(pos, mark);
        }
        assert!(board.is_full());
        assert_eq!(check_winner(&board), None);
        assert_eq!(outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_outcome_wins() {
        let mut board = board_3x3();
        for col in 0..3 {
            board.place(Pos::new(0, col), Mark::O);
        }
        assert_eq!(outcome(&board), Outcome::OWins);

        let mut board = board_3x3();
        for col in 0..3 {
            board.place(Pos::new(0, col), Mark::X);
        }
        assert_eq!(outcome(&board), Outcome::XWins);
    }

    #[test]
    fn test_is_valid_move() {
        let mut board = board_3x3();
        let pos = Pos::new(1, 1);
        assert!(is_valid_move(&board, pos));
        board.place(pos, Mark::X);
        assert!(!is_valid_move(&board, pos));
    }
}
