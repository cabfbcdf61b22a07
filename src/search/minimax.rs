//! Minimax search with alpha-beta pruning and iterative deepening
//!
//! The computer is always the maximizer: every search starts from a
//! position where O is to move and optimizes O's score. Terminal scores
//! are depth-scaled (`10 - depth` for an O win, `depth - 10` for an X
//! win, `0` for a draw) so faster wins score higher and losses are
//! delayed as long as possible. Positions cut off by the depth limit
//! fall back to the material heuristic in [`crate::eval`].
//!
//! Deepening passes run independently at limits 1..=[`MAX_DEPTH`]; there
//! is no transposition table and no result reuse between passes. A
//! pass's best move replaces the running best only when its score is
//! STRICTLY greater, so an equal-scoring deeper pass never displaces the
//! result of a shallower one. Combined with the depth-scaled terminal
//! scores this biases the final choice toward the shallowest pass that
//! achieved the top score.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, BoardSize, Mark, Pos};
//! use tictactoe::search::Searcher;
//!
//! let mut board = Board::new(BoardSize::ThreeByThree);
//! board.place(Pos::new(0, 0), Mark::O);
//! board.place(Pos::new(0, 1), Mark::O);
//!
//! let mut searcher = Searcher::new(BoardSize::ThreeByThree);
//! let result = searcher.best_move(&board);
//! assert_eq!(result.best_move, Some(Pos::new(0, 2)));
//! ```

use crate::board::{Board, BoardSize, Mark, Pos};
use crate::eval::evaluate;
use crate::rules::check_winner;

/// Outer bound on iterative-deepening passes, both board sizes
pub const MAX_DEPTH: u8 = 5;

/// Base magnitude of depth-scaled terminal scores
const WIN_SCORE: i32 = 10;

/// Result of a search: the best move found (absent only when the board
/// has no empty cell) and its score, plus diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the best move, from the maximizer's perspective
    pub score: i32,
    /// Deepening pass that produced the adopted move (0 if none)
    pub depth: u8,
    /// Total nodes visited across all passes
    pub nodes: u64,
}

/// Minimax searcher, configured per board size.
///
/// Stateless with respect to game history: the only state carried across
/// calls is the depth configuration. Each call clones the caller's board
/// into a private work board and explores it in place with a strict
/// place/recurse/clear discipline, so the caller's board is never
/// touched.
#[derive(Debug, Clone)]
pub struct Searcher {
    depth_limit: u8,
    max_depth: u8,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher for the given board size.
    ///
    /// The per-pass cutoff is 3 plies on the 3x3 board and 4 on 5x5;
    /// deepening always runs passes 1..=[`MAX_DEPTH`].
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            depth_limit: match size {
                BoardSize::ThreeByThree => 3,
                BoardSize::FiveByFive => 4,
            },
            max_depth: MAX_DEPTH,
            nodes: 0,
        }
    }

    /// Per-ply search cutoff configured for the board size
    #[must_use]
    pub fn depth_limit(&self) -> u8 {
        self.depth_limit
    }

    /// Outer bound on deepening passes
    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// Find the best move for O on the given board.
    ///
    /// Runs one full root search per depth 1..=`max_depth` and keeps the
    /// move of the pass with the strictly highest score. Returns a
    /// result with no move iff the board is full; callers must derive
    /// the draw verdict from the board, not from this refusal.
    #[must_use]
    pub fn best_move(&mut self, board: &Board) -> SearchResult {
        self.nodes = 0;
        let mut work = board.clone();

        let mut best_move = None;
        let mut best_score = i32::MIN;
        let mut best_depth = 0;

        for limit in 1..=self.max_depth {
            let (mv, score) = self.search_root(&mut work, limit);
            // Strict comparison: an equal-scoring deeper pass keeps the
            // earlier (shallower) result.
            if score > best_score {
                best_score = score;
                best_move = mv;
                best_depth = limit;
            }
        }

        SearchResult {
            best_move,
            score: if best_move.is_some() { best_score } else { 0 },
            depth: best_depth,
            nodes: self.nodes,
        }
    }

    /// One full top-level pass at the given depth limit.
    ///
    /// Tries every empty cell in row-major order: place O, score the
    /// reply position with the minimizer to move, restore the cell. The
    /// first cell reaching the pass's top score wins the pass.
    fn search_root(&mut self, board: &mut Board, limit: u8) -> (Option<Pos>, i32) {
        let mut best_move = None;
        let mut best_score = i32::MIN;

        let moves: Vec<Pos> = board.empty_positions().collect();
        for pos in moves {
            board.place(pos, Mark::O);
            let score = self.minimax(board, 0, false, i32::MIN, i32::MAX, limit);
            board.clear(pos);

            if score > best_score {
                best_score = score;
                best_move = Some(pos);
            }
        }

        (best_move, best_score)
    }

    /// Depth-limited minimax with alpha-beta pruning.
    ///
    /// Every mutation is undone before returning control to the caller,
    /// on every exit path including pruning breaks: no call frame ever
    /// observes a board mutated by a sibling exploration.
    fn minimax(
        &mut self,
        board: &mut Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        limit: u8,
    ) -> i32 {
        self.nodes += 1;

        if depth >= limit {
            return evaluate(board);
        }

        match check_winner(board) {
            Some(Mark::O) => return WIN_SCORE - depth as i32,
            Some(Mark::X) => return depth as i32 - WIN_SCORE,
            _ => {}
        }
        if board.is_full() {
            return 0;
        }

        let moves: Vec<Pos> = board.empty_positions().collect();
        if maximizing {
            let mut best = i32::MIN;
            for pos in moves {
                board.place(pos, Mark::O);
                let score = self.minimax(board, depth + 1, false, alpha, beta, limit);
                board.clear(pos);

                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for pos in moves {
                board.place(pos, Mark::X);
                let score = self.minimax(board, depth + 1, true, alpha, beta, limit);
                board.clear(pos);

                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
