//! Board rendering for the Tic-Tac-Toe GUI

use egui::{CornerRadius, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::board::{Board, Mark, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Mark,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        game_over: bool,
    ) -> Option<Pos> {
        let n = board.n();
        let available_size = ui.available_size();

        // Square drawing area that fits the available space
        let board_px = available_size.x.min(available_size.y) - 16.0;
        self.cell_size = (board_px - 2.0 * BOARD_MARGIN) / n as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_px, board_px), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        self.draw_grid(&painter, n);

        if let Some(pos) = last_move {
            painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(4), LAST_MOVE_TINT);
        }

        for pos in board.positions() {
            match board.get(pos) {
                Mark::X => self.draw_x(&painter, pos),
                Mark::O => self.draw_o(&painter, pos),
                Mark::Empty => {}
            }
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, line);
        }

        // Hover preview and click handling
        let mut clicked_pos = None;
        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos, n) {
                    let is_valid = board.is_empty(pos);
                    self.draw_hover_preview(&painter, pos, current_turn, is_valid);

                    if response.clicked() && is_valid {
                        clicked_pos = Some(pos);
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the inner grid lines separating the N x N cells
    fn draw_grid(&self, painter: &egui::Painter, n: usize) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = n as f32 * self.cell_size;
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);

        for i in 1..n {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            let start = origin + Vec2::new(offset, 0.0);
            painter.line_segment([start, start + Vec2::new(0.0, span)], stroke);

            // Horizontal line
            let start = origin + Vec2::new(0.0, offset);
            painter.line_segment([start, start + Vec2::new(span, 0.0)], stroke);
        }
    }

    /// Draw an X as two crossing strokes
    fn draw_x(&self, painter: &egui::Painter, pos: Pos) {
        let rect = self.cell_rect(pos).shrink(self.cell_size * MARK_INSET_RATIO);
        let stroke = Stroke::new(self.cell_size * MARK_STROKE_RATIO, X_COLOR);
        painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
        painter.line_segment([rect.right_top(), rect.left_bottom()], stroke);
    }

    /// Draw an O as a circle stroke
    fn draw_o(&self, painter: &egui::Painter, pos: Pos) {
        let radius = self.cell_size * (0.5 - MARK_INSET_RATIO * 0.8);
        let stroke = Stroke::new(self.cell_size * MARK_STROKE_RATIO, O_COLOR);
        painter.circle_stroke(self.cell_center(pos), radius, stroke);
    }

    /// Strike through the winning line
    fn draw_winning_line(&self, painter: &egui::Painter, line: &[Pos]) {
        let Some((&first, &last)) = line.first().zip(line.last()) else {
            return;
        };
        let stroke = Stroke::new(WIN_STROKE_WIDTH, WIN_HIGHLIGHT);
        painter.line_segment([self.cell_center(first), self.cell_center(last)], stroke);

        for &pos in line {
            painter.rect_stroke(
                self.cell_rect(pos).shrink(2.0),
                CornerRadius::same(4),
                Stroke::new(2.0, WIN_HIGHLIGHT),
                StrokeKind::Inside,
            );
        }
    }

    /// Ghost mark under the pointer; red tint on occupied cells
    fn draw_hover_preview(
        &self,
        painter: &egui::Painter,
        pos: Pos,
        turn: Mark,
        is_valid: bool,
    ) {
        if !is_valid {
            painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(4), hover_invalid());
            return;
        }

        painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(4), hover_valid());
        let rect = self.cell_rect(pos).shrink(self.cell_size * MARK_INSET_RATIO);
        let stroke = Stroke::new(2.0, TEXT_MUTED);
        match turn {
            Mark::X => {
                painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
                painter.line_segment([rect.right_top(), rect.left_bottom()], stroke);
            }
            Mark::O => {
                let radius = self.cell_size * (0.5 - MARK_INSET_RATIO * 0.8);
                painter.circle_stroke(self.cell_center(pos), radius, stroke);
            }
            Mark::Empty => {}
        }
    }

    /// Convert screen coordinates to a board cell
    pub fn screen_to_board(&self, screen_pos: Pos2, n: usize) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if relative.x >= 0.0 && relative.y >= 0.0 && row < n as i32 && col < n as i32 {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Top-left based rectangle of a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::splat(BOARD_MARGIN)
            + Vec2::new(
                pos.col as f32 * self.cell_size,
                pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Center point of a cell
    fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}
