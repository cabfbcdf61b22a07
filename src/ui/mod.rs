//! GUI module for the Tic-Tac-Toe game
//!
//! This module is the game controller: turn sequencing, mouse input,
//! board rendering and the move log. The search core never depends on
//! anything in here.

mod app;
mod board_view;
mod game_state;
pub mod move_log;
mod theme;

pub use app::TicTacToeApp;
pub use game_state::{GameResult, GameState, Mover};
pub use move_log::{next_round_number, MoveLog, DEFAULT_LOG_PATH};
