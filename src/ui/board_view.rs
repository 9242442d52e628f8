//! Board rendering for the Runline GUI

use crate::{Board, Pos, Stone};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Side length of one square cell
    cell_size: f32,
    /// Top-left corner of the grid (inside the label margin)
    grid_origin: Pos2,
    /// Cells per side of the board last laid out
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            grid_origin: Pos2::ZERO,
            size: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        accepting_input: bool,
    ) -> Option<Pos> {
        let available = ui.available_size();
        let side = (available.x.min(available.y) - 2.0 * BOARD_PADDING).max(120.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.layout(response.rect, board.size());

        let grid_rect = self.grid_rect();
        painter.rect_filled(grid_rect, CornerRadius::same(4), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_labels(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        let mut clicked_pos = None;
        if accepting_input {
            if let Some(board_pos) = response.hover_pos().and_then(|p| self.screen_to_board(p)) {
                let is_valid = board.is_empty(board_pos);
                let color = if is_valid { hover_valid() } else { hover_invalid() };
                painter.rect_filled(self.cell_rect(board_pos).shrink(2.0), CornerRadius::ZERO, color);

                if response.clicked() {
                    // Occupied cells are passed through so the caller can report them
                    clicked_pos = Some(board_pos);
                }
            }
        }

        clicked_pos
    }

    /// Fit an N×N grid into `rect`, keeping room for the labels.
    pub fn layout(&mut self, rect: Rect, size: usize) {
        self.size = size;
        let usable = rect.width().min(rect.height()) - LABEL_MARGIN;
        self.cell_size = usable / size.max(1) as f32;
        self.grid_origin = rect.min + Vec2::splat(LABEL_MARGIN);
    }

    fn grid_rect(&self) -> Rect {
        Rect::from_min_size(self.grid_origin, Vec2::splat(self.cell_size * self.size as f32))
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_origin
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Cell borders, N+1 lines each way
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = self.cell_size * self.size as f32;

        for i in 0..=self.size {
            let offset = i as f32 * self.cell_size;

            let start = self.grid_origin + Vec2::new(offset, 0.0);
            painter.line_segment([start, start + Vec2::new(0.0, extent)], stroke);

            let start = self.grid_origin + Vec2::new(0.0, offset);
            painter.line_segment([start, start + Vec2::new(extent, 0.0)], stroke);
        }
    }

    /// Row letters down the left side, column numbers across the top
    fn draw_labels(&self, painter: &Painter) {
        let font = egui::FontId::proportional((self.cell_size * 0.35).clamp(10.0, 16.0));

        for i in 0..self.size {
            let center = self.grid_origin.to_vec2() + Vec2::splat((i as f32 + 0.5) * self.cell_size);

            let letter = (b'A' + i as u8) as char;
            let pos = Pos2::new(self.grid_origin.x - LABEL_MARGIN * 0.5, center.y);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), LABEL_TEXT);

            let pos = Pos2::new(center.x, self.grid_origin.y - LABEL_MARGIN * 0.5);
            painter.text(pos, egui::Align2::CENTER_CENTER, i + 1, font.clone(), LABEL_TEXT);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for stone in [Stone::Human, Stone::Ai] {
            if let Some(bits) = board.stones(stone) {
                for idx in bits.iter_ones() {
                    self.draw_mark(painter, Pos::from_index(idx, self.size), stone);
                }
            }
        }
    }

    /// `X` as two strokes, `O` as a ring
    fn draw_mark(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let reach = self.cell_size * MARK_RATIO;
        let width = (self.cell_size * MARK_WIDTH_RATIO).max(2.0);

        match stone {
            Stone::Human => {
                let stroke = Stroke::new(width, HUMAN_MARK);
                painter.line_segment(
                    [center + Vec2::new(-reach, -reach), center + Vec2::new(reach, reach)],
                    stroke,
                );
                painter.line_segment(
                    [center + Vec2::new(-reach, reach), center + Vec2::new(reach, -reach)],
                    stroke,
                );
            }
            Stone::Ai => {
                painter.circle_stroke(center, reach, Stroke::new(width, AI_MARK));
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let corner = self.cell_rect(pos).right_top() + Vec2::new(-8.0, 8.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if self.cell_size <= 0.0 {
            return None;
        }
        let relative = screen_pos - self.grid_origin;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col, self.size) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laid_out(size: usize) -> BoardView {
        let mut view = BoardView::default();
        let side = LABEL_MARGIN + 50.0 * size as f32;
        view.layout(Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::splat(side)), size);
        view
    }

    #[test]
    fn test_cell_centers_map_back() {
        let view = laid_out(5);
        for idx in 0..25 {
            let pos = Pos::from_index(idx, 5);
            assert_eq!(view.screen_to_board(view.board_to_screen(pos)), Some(pos));
        }
    }

    #[test]
    fn test_label_margin_and_outside_are_not_cells() {
        let view = laid_out(3);
        let origin = Pos2::new(10.0 + LABEL_MARGIN, 20.0 + LABEL_MARGIN);

        assert_eq!(view.screen_to_board(origin + Vec2::new(1.0, 1.0)), Some(Pos::new(0, 0)));
        assert_eq!(view.screen_to_board(origin - Vec2::new(5.0, 0.0)), None);
        assert_eq!(view.screen_to_board(origin + Vec2::new(151.0, 10.0)), None);
        assert_eq!(view.screen_to_board(origin + Vec2::new(120.0, 60.0)), Some(Pos::new(1, 2)));
    }
}
