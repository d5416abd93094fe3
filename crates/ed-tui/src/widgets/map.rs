//! Map display widget

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Widget};

use ed_core::dungeon::{Coord, Level};

use crate::display::GlyphSet;
use crate::theme::Theme;

/// Widget for rendering the dungeon map, one terminal cell per tile
pub struct MapWidget<'a> {
    level: &'a Level,
    theme: &'a Theme,
    glyphs: &'a dyn GlyphSet,
}

impl<'a> MapWidget<'a> {
    pub fn new(level: &'a Level, theme: &'a Theme, glyphs: &'a dyn GlyphSet) -> Self {
        Self {
            level,
            theme,
            glyphs,
        }
    }

    fn cell_display(&self, x: usize, y: usize) -> (char, Style) {
        let tile = self
            .level
            .grid
            .get(Coord::new(x as i32, y as i32))
            .unwrap_or_default();
        let style = Style::default().fg(self.theme.tile_color(tile));
        (self.glyphs.tile_char(tile), style)
    }
}

impl Widget for MapWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border))
            .title("Endless Dungeon");

        let inner = block.inner(area);
        block.render(area, buf);

        let grid = &self.level.grid;
        for y in 0..grid.height().min(inner.height as usize) {
            for x in 0..grid.width().min(inner.width as usize) {
                let (ch, style) = self.cell_display(x, y);
                if let Some(cell) =
                    buf.cell_mut(Position::new(inner.x + x as u16, inner.y + y as u16))
                {
                    cell.set_char(ch);
                    cell.set_style(style);
                }
            }
        }
    }
}
