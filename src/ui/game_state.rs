//! Game state management for the Tic-Tac-Toe GUI
//!
//! Owns the board, the turn sequence and the move log, validates human
//! input, and runs the AI engine on a background thread so the GUI
//! stays responsive. Terminal verdicts are derived from the board after
//! EVERY applied move; the controller never relies on the engine
//! refusing to move to detect a finished round.

use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crate::board::{Board, BoardSize, Mark, Pos};
use crate::engine::{AIEngine, MoveResult};
use crate::rules::{self, Outcome};

use super::move_log::MoveLog;

/// A participant in the round: either the human (moves arrive as board
/// clicks) or the search engine. Closed set; dispatch happens in the
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mover {
    Human,
    Search,
}

/// Result of a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub outcome: Outcome,
    /// Cells of the winning line, for the board highlight (None on draw)
    pub winning_line: Option<Vec<Pos>>,
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_ai_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_ai_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    /// Roster indexed by mark: X (moves first) then O
    pub movers: [Mover; 2],
    pub current_turn: Mark,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Mark)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
    move_log: MoveLog,
}

impl GameState {
    /// Create a fresh round. The human plays X and moves first; the
    /// engine plays O.
    pub fn new(size: BoardSize, move_log: MoveLog) -> Self {
        log::info!("round {} started on a {} board", move_log.round(), size);
        Self {
            board: Board::new(size),
            movers: [Mover::Human, Mover::Search],
            current_turn: Mark::X,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
            move_log,
        }
    }

    /// Start a new round, optionally switching the board size.
    pub fn reset(&mut self, size: Option<BoardSize>) {
        let size = size.unwrap_or_else(|| self.board.size());
        self.board = Board::new(size);
        self.current_turn = Mark::X;
        self.game_over = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.move_timer = MoveTimer::default();
        self.message = None;
        self.move_log.start_new_round();
        log::info!("round {} started on a {} board", self.move_log.round(), size);
    }

    /// Current round number
    pub fn round(&self) -> u32 {
        self.move_log.round()
    }

    /// The mover whose turn it is
    pub fn current_mover(&self) -> Mover {
        match self.current_turn {
            Mark::O => self.movers[1],
            _ => self.movers[0],
        }
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        self.current_mover() == Mover::Human
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        self.current_mover() == Mover::Search
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt to place the human's mark at the given position.
    ///
    /// Occupied cells are rejected here, before the board is touched;
    /// the board itself performs no validation.
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Round is over".to_string());
        }
        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }
        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }
        if !rules::is_valid_move(&self.board, pos) {
            return Err("Cell is occupied".to_string());
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Apply a move for the player to move (human and AI share this
    /// path), then derive the round verdict from the board.
    fn execute_move(&mut self, pos: Pos) {
        let mark = self.current_turn;
        self.board.place(pos, mark);
        log::debug!("{} played ({}, {})", mark, pos.row, pos.col);

        if let Err(err) = self.move_log.record(pos, mark, self.board.n()) {
            log::warn!("move log write failed: {err}");
            self.message = Some(format!("Move log write failed: {err}"));
        }

        self.move_history.push((pos, mark));
        self.last_move = Some(pos);

        match rules::outcome(&self.board) {
            Outcome::InProgress => {
                self.current_turn = mark.opponent();
                self.move_timer.start();
            }
            outcome => {
                let winning_line = rules::winning_line(&self.board).map(|(_, line)| line);
                self.game_over = Some(GameResult {
                    outcome,
                    winning_line,
                });
                log::info!("round {} over: {:?}", self.move_log.round(), outcome);
            }
        }
    }

    /// Start AI thinking on a background thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let board = self.board.clone();
        let (tx, rx) = channel();

        thread::spawn(move || {
            let mut engine = AIEngine::new(board.size());
            let result = engine.get_move_with_stats(&board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Poll for a finished AI computation and apply its move
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed())),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI thread failed".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result);
            self.move_timer.last_ai_time = Some(elapsed);

            match move_result.best_move {
                Some(pos) => self.execute_move(pos),
                // Full board; the outcome check after the previous move
                // already ended the round, so this is a no-op.
                None => self.message = Some("No move available".to_string()),
            }
        }
    }

    /// Search limits configured for the current board size, for the
    /// debug panel: (per-pass depth cutoff, deepening bound)
    pub fn search_limits(&self) -> (u8, u8) {
        let engine = AIEngine::new(self.board.size());
        (engine.depth_limit(), engine.max_depth())
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_state(name: &str) -> GameState {
        let path: PathBuf = std::env::temp_dir().join(format!(
            "ttt_state_{}_{}.txt",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        GameState::new(BoardSize::ThreeByThree, MoveLog::new(path, 1))
    }

    #[test]
    fn test_human_is_x_and_moves_first() {
        let state = temp_state("first");
        assert_eq!(state.current_turn, Mark::X);
        assert!(state.is_human_turn());
        assert!(!state.is_ai_turn());
    }

    #[test]
    fn test_human_move_applies_and_flips_turn() {
        let mut state = temp_state("apply");
        state.try_place_mark(Pos::new(1, 1)).unwrap();

        assert_eq!(state.board.get(Pos::new(1, 1)), Mark::X);
        assert_eq!(state.current_turn, Mark::O);
        assert!(state.is_ai_turn());
        assert_eq!(state.move_history.len(), 1);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = temp_state("occupied");
        state.try_place_mark(Pos::new(0, 0)).unwrap();
        // O's turn now; force it back to make the cell conflict visible.
        state.current_turn = Mark::X;

        let err = state.try_place_mark(Pos::new(0, 0)).unwrap_err();
        assert_eq!(err, "Cell is occupied");
        assert_eq!(state.move_history.len(), 1);
    }

    #[test]
    fn test_move_rejected_on_ai_turn() {
        let mut state = temp_state("turn");
        state.try_place_mark(Pos::new(0, 0)).unwrap();
        assert!(state.try_place_mark(Pos::new(0, 1)).is_err());
    }

    #[test]
    fn test_win_ends_round() {
        let mut state = temp_state("win");
        // Build an X row, forcing the turn back between placements.
        for &(row, col) in &[(0, 0), (0, 1), (0, 2)] {
            state.current_turn = Mark::X;
            state.try_place_mark(Pos::new(row, col)).unwrap();
        }

        let result = state.game_over.as_ref().unwrap();
        assert_eq!(result.outcome, Outcome::XWins);
        let line = result.winning_line.as_ref().unwrap();
        assert_eq!(line.len(), 3);
        assert!(state.try_place_mark(Pos::new(2, 2)).is_err());
    }

    #[test]
    fn test_draw_ends_round() {
        let mut state = temp_state("draw");
        // Hotseat roster so both marks go through the human path.
        state.movers = [Mover::Human, Mover::Human];
        // X O X / X O O / O X X, applied in an order that stays
        // non-terminal until the last cell.
        let moves = [
            (Pos::new(0, 0), Mark::X),
            (Pos::new(0, 1), Mark::O),
            (Pos::new(0, 2), Mark::X),
            (Pos::new(1, 1), Mark::O),
            (Pos::new(1, 0), Mark::X),
            (Pos::new(1, 2), Mark::O),
            (Pos::new(2, 1), Mark::X),
            (Pos::new(2, 0), Mark::O),
            (Pos::new(2, 2), Mark::X),
        ];
        for (pos, mark) in moves {
            state.current_turn = mark;
            state.try_place_mark(pos).unwrap();
        }

        let result = state.game_over.as_ref().unwrap();
        assert_eq!(result.outcome, Outcome::Draw);
        assert_eq!(result.winning_line, None);
    }

    #[test]
    fn test_reset_starts_next_round() {
        let mut state = temp_state("reset");
        state.try_place_mark(Pos::new(0, 0)).unwrap();
        assert_eq!(state.round(), 1);

        state.reset(Some(BoardSize::FiveByFive));
        assert_eq!(state.round(), 2);
        assert_eq!(state.board.size(), BoardSize::FiveByFive);
        assert_eq!(state.current_turn, Mark::X);
        assert!(state.move_history.is_empty());
        assert!(state.game_over.is_none());
    }

    #[test]
    fn test_ai_turn_plays_through_channel() {
        let mut state = temp_state("ai");
        state.try_place_mark(Pos::new(1, 1)).unwrap();

        state.start_ai_thinking();
        assert!(state.is_ai_thinking());

        // The 3x3 search is fast; poll until the result lands.
        let deadline = Instant::now() + Duration::from_secs(10);
        while state.is_ai_thinking() && Instant::now() < deadline {
            state.check_ai_result();
            thread::sleep(Duration::from_millis(10));
        }

        assert!(!state.is_ai_thinking());
        assert_eq!(state.board.mark_count(Mark::O), 1);
        assert_eq!(state.current_turn, Mark::X);
        assert!(state.last_ai_result.is_some());
    }
}
