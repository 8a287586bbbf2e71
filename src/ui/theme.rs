//! Theme constants for the Six Pawns GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(222, 184, 135); // Burlywood
pub const CELL_BG: Color32 = Color32::from_rgb(235, 205, 160);
pub const CELL_BORDER: Color32 = Color32::from_rgb(139, 90, 43); // Saddle brown
pub const CELL_LABEL: Color32 = Color32::from_rgb(90, 60, 30);

// Pawn colors with better contrast
pub const BLACK_PAWN: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_PAWN_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_PAWN: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_PAWN_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const SELECTED_RING: Color32 = Color32::from_rgb(70, 130, 220);
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 200, 120, 100)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_THINKING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const PAWN_RADIUS_RATIO: f32 = 0.36;
pub const CELL_GAP: f32 = 4.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
