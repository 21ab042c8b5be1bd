use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::snake::{Cell, SnakeEngine};

pub fn snake_glyph(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::HorizontalWall => '=',
        Cell::VerticalWall => '|',
        Cell::Food => '*',
        Cell::Body(_) => '#',
    }
}

/// Draws the snake board, one terminal cell per board cell
pub struct SnakeView<'a> {
    engine: &'a SnakeEngine,
}

impl<'a> SnakeView<'a> {
    pub fn new(engine: &'a SnakeEngine) -> Self {
        Self { engine }
    }
}

impl Widget for SnakeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let cols = self.engine.cols();
        let visible_cols = cols.min(area.width as usize);
        let visible_rows = self.engine.rows().min(area.height as usize);

        for (idx, &board_cell) in self.engine.cells().iter().enumerate() {
            let (row, col) = (idx / cols, idx % cols);
            if row >= visible_rows || col >= visible_cols {
                continue;
            }
            let pos = (area.x + col as u16, area.y + row as u16);
            if let Some(cell) = buf.cell_mut(pos) {
                cell.set_char(snake_glyph(board_cell));
            }
        }
    }
}
