use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::life::LifeEngine;

/// Character for one Life cell; the outermost ring is drawn as the frame
pub fn life_glyph(engine: &LifeEngine, row: usize, col: usize) -> char {
    let last_row = engine.rows() - 1;
    let last_col = engine.cols() - 1;

    if row == 0 || row == last_row {
        '='
    } else if col == 0 || col == last_col {
        '|'
    } else if engine.is_alive(row, col) {
        '*'
    } else {
        ' '
    }
}

/// Draws the whole Life grid, one terminal cell per grid cell
pub struct LifeView<'a> {
    engine: &'a LifeEngine,
}

impl<'a> LifeView<'a> {
    pub fn new(engine: &'a LifeEngine) -> Self {
        Self { engine }
    }
}

impl Widget for LifeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.engine.rows().min(area.height as usize);
        let cols = self.engine.cols().min(area.width as usize);

        for row in 0..rows {
            for col in 0..cols {
                let x = area.x + col as u16;
                let y = area.y + row as u16;
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(life_glyph(self.engine, row, col));
                }
            }
        }
    }
}
