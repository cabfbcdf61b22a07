//! Tic-Tac-Toe GUI
//!
//! A graphical human-vs-computer Tic-Tac-Toe game on a 3x3 or 5x5 board.

use std::path::Path;

use tictactoe::ui::{next_round_number, TicTacToeApp, DEFAULT_LOG_PATH};

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    // Round numbering is explicit startup state, derived once here and
    // handed to the controller.
    let starting_round = next_round_number(Path::new(DEFAULT_LOG_PATH));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([920.0, 680.0])
            .with_min_inner_size([700.0, 520.0])
            .with_title("Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic-Tac-Toe",
        options,
        Box::new(move |cc| Ok(Box::new(TicTacToeApp::new(cc, starting_round)))),
    )
}
