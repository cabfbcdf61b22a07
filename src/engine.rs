//! AI engine facade over the minimax search
//!
//! The engine is the library boundary the game controller talks to: it
//! owns a [`Searcher`] configured for the round's board size and wraps
//! each search with wall-clock timing and diagnostics. The computer is
//! always the maximizer (O); there is no human-search mode.
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, BoardSize, Mark, Pos};
//! use tictactoe::engine::AIEngine;
//!
//! let mut board = Board::new(BoardSize::ThreeByThree);
//! board.place(Pos::new(1, 1), Mark::X);
//!
//! let mut engine = AIEngine::new(BoardSize::ThreeByThree);
//! if let Some(pos) = engine.get_move(&board) {
//!     board.place(pos, Mark::O);
//! }
//! ```

use std::time::Instant;

use crate::board::{Board, BoardSize, Pos};
use crate::search::{SearchResult, Searcher};

/// Result of a move computation with search statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the move, from the maximizer's perspective
    pub score: i32,
    /// Deepening pass that produced the adopted move
    pub depth: u8,
    /// Nodes visited by the search
    pub nodes: u64,
    /// Wall-clock time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
        }
    }
}

/// AI engine for one board size.
///
/// Owns no state across calls except the search configuration; two
/// engines for the same size behave identically.
#[derive(Debug, Clone)]
pub struct AIEngine {
    searcher: Searcher,
    size: BoardSize,
}

impl AIEngine {
    /// Create an engine for the given board size.
    #[must_use]
    pub fn new(size: BoardSize) -> Self {
        Self {
            searcher: Searcher::new(size),
            size,
        }
    }

    /// Get the best move for O on the given board.
    ///
    /// Convenience wrapper around [`AIEngine::get_move_with_stats`].
    /// Returns `None` iff the board has no empty cell; callers must
    /// detect the draw from the board state, not from this refusal.
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move together with search statistics.
    ///
    /// The search is synchronous and blocking: it always runs all
    /// deepening passes to completion before returning.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let result = self.searcher.best_move(board);
        let time_ms = start.elapsed().as_millis() as u64;

        log::debug!(
            "search on {} board: move {:?}, score {}, pass depth {}, {} nodes, {}ms",
            self.size,
            result.best_move,
            result.score,
            result.depth,
            result.nodes,
            time_ms,
        );

        MoveResult::from_search(result, time_ms)
    }

    /// Board size this engine was configured for
    #[must_use]
    pub fn board_size(&self) -> BoardSize {
        self.size
    }

    /// Per-pass search cutoff (3 on 3x3, 4 on 5x5)
    #[must_use]
    pub fn depth_limit(&self) -> u8 {
        self.searcher.depth_limit()
    }

    /// Outer bound on deepening passes
    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.searcher.max_depth()
    }
}
