//! Append-only move log
//!
//! Every round appends a header and its moves to a human-readable text
//! file. The format is two tab-separated columns, one per player:
//!
//! ```text
//! Round 3 (Board Size: 3x3):
//! X	O
//! X:5
//! 	O:1
//! X:9
//! ```
//!
//! Positions are serialized as `row * N + col + 1`, a 1-indexed
//! row-major cell number. Round numbering is explicit state: call
//! [`next_round_number`] once at startup and pass the result into
//! [`MoveLog::new`]; the log itself never reads the file.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::board::{Mark, Pos};

/// Default log file, created in the working directory
pub const DEFAULT_LOG_PATH: &str = "tictactoe.txt";

/// Count the rounds already recorded in the log file.
///
/// Returns the number to use for the next round: one more than the
/// number of round headers found, or 1 if the file does not exist.
#[must_use]
pub fn next_round_number(path: &Path) -> u32 {
    match fs::read_to_string(path) {
        Ok(text) => text.lines().filter(|line| line.starts_with("Round ")).count() as u32 + 1,
        Err(_) => 1,
    }
}

/// Writer for the append-only move log.
///
/// The round header is written lazily with the first move of a round,
/// so restarting before any move leaves no empty header behind.
#[derive(Debug)]
pub struct MoveLog {
    path: PathBuf,
    round: u32,
    header_pending: bool,
}

impl MoveLog {
    /// Create a log writer appending to `path`, starting at the given
    /// round number.
    pub fn new(path: impl Into<PathBuf>, starting_round: u32) -> Self {
        Self {
            path: path.into(),
            round: starting_round,
            header_pending: true,
        }
    }

    /// Current round number
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Record one move. `n` is the board side length, used for the
    /// 1-indexed position serialization.
    pub fn record(&mut self, pos: Pos, mark: Mark, n: usize) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        if self.header_pending {
            writeln!(file)?;
            writeln!(file, "Round {} (Board Size: {n}x{n}):", self.round)?;
            writeln!(file, "X\tO")?;
            self.header_pending = false;
        }

        let cell = pos.row as usize * n + pos.col as usize + 1;
        match mark {
            Mark::X => writeln!(file, "X:{cell}\t")?,
            Mark::O => writeln!(file, "\tO:{cell}")?,
            Mark::Empty => {}
        }
        Ok(())
    }

    /// Advance to the next round. The new round's header is written
    /// with its first move.
    pub fn start_new_round(&mut self) {
        self.round += 1;
        self.header_pending = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn temp_log(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("ttt_move_log_{}_{}.txt", name, std::process::id()));
        let _ = fs::remove_file(&path);
        path
    }

    #[test]
    fn test_next_round_number_without_file() {
        let path = temp_log("missing");
        assert_eq!(next_round_number(&path), 1);
    }

    #[test]
    fn test_header_written_once_per_round() {
        let path = temp_log("header");
        let mut log = MoveLog::new(&path, 1);

        log.record(Pos::new(0, 0), Mark::X, 3).unwrap();
        log.record(Pos::new(1, 1), Mark::O, 3).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("Round 1 (Board Size: 3x3):").count(), 1);
        assert!(text.contains("X\tO"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_position_serialization_is_one_indexed() {
        let path = temp_log("positions");
        let mut log = MoveLog::new(&path, 1);

        log.record(Pos::new(0, 0), Mark::X, 3).unwrap();
        log.record(Pos::new(1, 1), Mark::O, 3).unwrap();
        log.record(Pos::new(2, 2), Mark::X, 3).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("X:1"));
        assert!(text.contains("O:5"));
        assert!(text.contains("X:9"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_position_serialization_5x5() {
        let path = temp_log("positions_5x5");
        let mut log = MoveLog::new(&path, 1);

        log.record(Pos::new(1, 2), Mark::O, 5).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("O:8"));
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_new_round_bumps_header() {
        let path = temp_log("rounds");
        let mut log = MoveLog::new(&path, 1);

        log.record(Pos::new(0, 0), Mark::X, 3).unwrap();
        log.start_new_round();
        assert_eq!(log.round(), 2);
        log.record(Pos::new(0, 1), Mark::X, 3).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Round 1 (Board Size: 3x3):"));
        assert!(text.contains("Round 2 (Board Size: 3x3):"));
        assert_eq!(next_round_number(&path), 3);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_restart_before_first_move_writes_nothing() {
        let path = temp_log("restart");
        let mut log = MoveLog::new(&path, 1);
        log.start_new_round();
        log.start_new_round();
        assert_eq!(next_round_number(&path), 1);
        assert!(!path.exists());
    }
}
