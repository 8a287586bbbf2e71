//! Board rendering for the Six Pawns GUI

use crate::rules::is_legal;
use crate::{Board, Cell, Move, BOARD_CELLS};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the 13-cell strip
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 56.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        selected: Option<usize>,
        last_move: Option<Move>,
        human_turn: bool,
        game_over: bool,
    ) -> Option<usize> {
        let available = ui.available_size();

        // Fit the strip to the available width
        self.cell_size =
            ((available.x - 2.0 * BOARD_MARGIN) / BOARD_CELLS as f32).min(available.y * 0.5);
        let strip_width = self.cell_size * BOARD_CELLS as f32 + 2.0 * BOARD_MARGIN;
        let strip_height = self.cell_size + 2.0 * BOARD_MARGIN;

        let (response, painter) = ui.allocate_painter(
            Vec2::new(strip_width.min(available.x), strip_height),
            Sense::click(),
        );

        self.board_rect = response.rect;

        // Draw board background
        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        // Draw cells, labels and pawns
        for i in 0..BOARD_CELLS {
            self.draw_cell(&painter, i);
        }
        self.draw_labels(&painter);
        for i in 0..BOARD_CELLS {
            let cell = board.get(i);
            if cell.is_piece() {
                self.draw_pawn(&painter, i, cell);
            }
        }

        // Selection ring
        if let Some(index) = selected {
            self.draw_selection(&painter, index);
        }

        // Last move marker on the destination cell
        if let Some(mv) = last_move {
            self.draw_last_move_marker(&painter, mv.to);
        }

        // Handle hover preview and click
        let mut clicked_cell = None;

        if !game_over && human_turn {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(index) = self.screen_to_cell(pointer_pos) {
                    let is_valid = match selected {
                        None => board.get(index) == Cell::White,
                        Some(from) => {
                            from == index || is_legal(board, from, index, Cell::White)
                        }
                    };

                    let hover_color = if is_valid {
                        hover_valid()
                    } else {
                        hover_invalid()
                    };
                    self.draw_hover_preview(&painter, index, hover_color);

                    if response.clicked() {
                        clicked_cell = Some(index);
                    }
                }
            }
        }

        clicked_cell
    }

    /// Draw a single cell slot
    fn draw_cell(&self, painter: &Painter, index: usize) {
        let rect = self.cell_rect(index).shrink(CELL_GAP * 0.5);
        painter.rect_filled(rect, CornerRadius::same(4), CELL_BG);
        painter.rect_stroke(
            rect,
            CornerRadius::same(4),
            Stroke::new(1.5, CELL_BORDER),
            egui::StrokeKind::Inside,
        );
    }

    /// Draw the cell indices under the strip
    fn draw_labels(&self, painter: &Painter) {
        let font = egui::FontId::proportional(12.0);
        for i in 0..BOARD_CELLS {
            let rect = self.cell_rect(i);
            let pos = Pos2::new(rect.center().x, rect.max.y + 12.0);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                format!("{i}"),
                font.clone(),
                CELL_LABEL,
            );
        }
    }

    /// Draw a single pawn with visual polish
    fn draw_pawn(&self, painter: &Painter, index: usize, cell: Cell) {
        let center = self.cell_rect(index).center();
        let radius = self.cell_size * PAWN_RADIUS_RATIO;

        match cell {
            Cell::Black => {
                // Shadow
                painter.circle_filled(
                    center + Vec2::new(2.0, 2.0),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_PAWN);
                // Highlight
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_PAWN_HIGHLIGHT,
                );
            }
            Cell::White => {
                painter.circle_filled(
                    center + Vec2::new(2.0, 2.0),
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_PAWN);
                // Inner shadow for depth
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_PAWN_SHADOW),
                );
            }
            Cell::Empty => {}
        }
    }

    /// Draw the ring around the selected pawn
    fn draw_selection(&self, painter: &Painter, index: usize) {
        let center = self.cell_rect(index).center();
        let radius = self.cell_size * PAWN_RADIUS_RATIO + 4.0;
        painter.circle_stroke(center, radius, Stroke::new(3.0, SELECTED_RING));
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, index: usize) {
        let rect = self.cell_rect(index);
        let center = Pos2::new(rect.center().x, rect.min.y + 8.0);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, index: usize, color: Color32) {
        let rect = self.cell_rect(index).shrink(CELL_GAP * 0.5);
        painter.rect_filled(rect, CornerRadius::same(4), color);
    }

    /// Rectangle of a cell in screen coordinates
    fn cell_rect(&self, index: usize) -> Rect {
        let min = Pos2::new(
            self.board_rect.min.x + BOARD_MARGIN + index as f32 * self.cell_size,
            self.board_rect.min.y + BOARD_MARGIN,
        );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a cell index
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<usize> {
        let relative = screen_pos - self.board_rect.min;
        let x = (relative.x - BOARD_MARGIN) / self.cell_size;
        let y = relative.y - BOARD_MARGIN;

        let index = x.floor() as i32;
        if index >= 0 && index < BOARD_CELLS as i32 && y >= 0.0 && y <= self.cell_size {
            Some(index as usize)
        } else {
            None
        }
    }
}
