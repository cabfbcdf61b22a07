//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use crate::board::{BoardSize, Mark};
use crate::rules::Outcome;

use super::board_view::BoardView;
use super::game_state::{GameResult, GameState};
use super::move_log::{MoveLog, DEFAULT_LOG_PATH};
use super::theme::*;

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl TicTacToeApp {
    /// Create the app. `starting_round` is the round number computed
    /// once at startup (from the existing log); the controller never
    /// re-derives it.
    pub fn new(_cc: &eframe::CreationContext<'_>, starting_round: u32) -> Self {
        let move_log = MoveLog::new(DEFAULT_LOG_PATH, starting_round);
        Self {
            state: GameState::new(BoardSize::ThreeByThree, move_log),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (3x3)").clicked() {
                        self.state.reset(Some(BoardSize::ThreeByThree));
                        ui.close_menu();
                    }
                    if ui.button("New Game (5x5)").clicked() {
                        self.state.reset(Some(BoardSize::FiveByFive));
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Restart Round (R)").clicked() {
                        self.state.reset(None);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "Round {} - {} - You: X",
                        self.state.round(),
                        self.state.board.size()
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over.clone() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(20.0).strong().color(X_COLOR));
            ui.label(RichText::new("O").size(20.0).strong().color(O_COLOR));
            ui.add_space(4.0);
            ui.label(
                RichText::new("TIC-TAC-TOE")
                    .size(20.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_x = self.state.current_turn == Mark::X;
            let (symbol, name, accent) = if is_x {
                ("X", "YOU", X_COLOR)
            } else {
                ("O", "COMPUTER", O_COLOR)
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(symbol).size(32.0).strong().color(accent));
                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(name).size(16.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_ai_thinking() {
                        ("thinking...", TIMER_WARNING)
                    } else if self.state.game_over.is_some() {
                        ("round over", TEXT_MUTED)
                    } else if is_x {
                        ("your turn", TIMER_NORMAL)
                    } else {
                        ("to move", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("{:.2}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .strong()
                        .color(TIMER_WARNING),
                );
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(ai_time) = self.state.move_timer.last_ai_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            if ui.button("Restart Round").clicked() {
                self.state.reset(None);
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card with the last search diagnostics
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let (depth_limit, max_depth) = self.state.search_limits();
            ui.label(
                RichText::new(format!(
                    "depth limit {depth_limit}, passes 1..={max_depth}"
                ))
                .size(10.0)
                .color(TEXT_SECONDARY),
            );

            if let Some(result) = &self.state.last_ai_result {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Score: {}", result.score))
                        .size(11.0)
                        .strong()
                        .color(TIMER_NORMAL),
                );
                ui.label(
                    RichText::new(format!("Adopted at pass {}", result.depth))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
                ui.label(
                    RichText::new(format!("{} nodes, {}ms", result.nodes, result.time_ms))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );

                if let Some(pos) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("-> ({}, {})", pos.row, pos.col))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
            } else {
                ui.label(
                    RichText::new("No search yet")
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        let (headline, accent) = match result.outcome {
            Outcome::XWins => ("YOU WIN!", X_COLOR),
            Outcome::OWins => ("COMPUTER WINS!", O_COLOR),
            _ => ("IT'S A DRAW", TEXT_SECONDARY),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 60, 50))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("ROUND OVER").size(11.0).color(TEXT_MUTED));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(accent));
                    ui.add_space(10.0);

                    if ui.button("New Round").clicked() {
                        self.state.reset(None);
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self
                .state
                .game_over
                .as_ref()
                .and_then(|r| r.winning_line.clone());

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.current_turn,
                self.state.last_move,
                winning_line.as_deref(),
                self.state.game_over.is_some(),
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_mark(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // R - Restart round
            if i.key_pressed(egui::Key::R) {
                self.state.reset(None);
            }

            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Check AI result
        self.state.check_ai_result();

        // Start AI thinking if needed
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none()
        {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling while the engine is computing
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
