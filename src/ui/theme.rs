//! Theme constants for the Runline GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(236, 228, 210);
pub const GRID_LINE: Color32 = Color32::from_rgb(70, 60, 50);
pub const LABEL_TEXT: Color32 = Color32::from_rgb(180, 182, 190);

// Marks
pub const HUMAN_MARK: Color32 = Color32::from_rgb(40, 90, 200);
pub const AI_MARK: Color32 = Color32::from_rgb(200, 55, 55);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(250, 200, 60);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(40, 90, 200, 60)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_READY: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
/// Space left of and above the grid for row and column labels
pub const LABEL_MARGIN: f32 = 28.0;
pub const BOARD_PADDING: f32 = 12.0;
pub const MARK_RATIO: f32 = 0.32;
pub const MARK_WIDTH_RATIO: f32 = 0.08;
pub const GRID_LINE_WIDTH: f32 = 1.5;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
