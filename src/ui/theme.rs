//! Theme constants for the Tic-Tac-Toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(28, 30, 34);
pub const GRID_LINE: Color32 = Color32::from_rgb(90, 94, 102);

// Mark colors
pub const X_COLOR: Color32 = Color32::from_rgb(235, 90, 90);
pub const O_COLOR: Color32 = Color32::from_rgb(90, 200, 120);

// Markers
pub const LAST_MOVE_TINT: Color32 = Color32::from_rgba_premultiplied(60, 64, 72, 90);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Hover previews
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(200, 200, 200, 60)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const MARK_INSET_RATIO: f32 = 0.26;
pub const MARK_STROKE_RATIO: f32 = 0.08;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const WIN_STROKE_WIDTH: f32 = 5.0;
