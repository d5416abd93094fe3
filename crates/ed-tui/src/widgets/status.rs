//! Status line widget

use ratatui::prelude::*;
use ratatui::widgets::Widget;

use ed_core::Generator;
use ed_core::dungeon::Coord;

use crate::theme::Theme;

pub const HINT: &str = "Press SPACE to generate a new dungeon, q to quit";

/// Widget for rendering the two status lines under the map
pub struct StatusWidget<'a> {
    generator: &'a Generator,
    theme: &'a Theme,
}

impl<'a> StatusWidget<'a> {
    pub fn new(generator: &'a Generator, theme: &'a Theme) -> Self {
        Self { generator, theme }
    }

    /// First status line: generation counters and start/end positions
    pub fn summary_line(&self) -> String {
        let summary = self.generator.level().summary();
        format!(
            "Gen:{} Seed:{} Rooms:{}/{} Corridor:{} Start:{} End:{}",
            self.generator.generation(),
            self.generator.seed(),
            summary.rooms,
            self.generator.level().max_rooms(),
            summary.corridor_tiles,
            coord_or_none(summary.start),
            coord_or_none(summary.end),
        )
    }
}

fn coord_or_none(pos: Option<Coord>) -> String {
    pos.map_or_else(|| "none".to_string(), |p| p.to_string())
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line1 = self.summary_line();

        buf.set_string(area.x, area.y, &line1, Style::default().fg(self.theme.text));
        if area.height > 1 {
            buf.set_string(
                area.x,
                area.y + 1,
                HINT,
                Style::default().fg(self.theme.text_dim),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_or_none() {
        assert_eq!(coord_or_none(None), "none");
        assert_eq!(coord_or_none(Some(Coord::new(4, 12))), "(4, 12)");
    }
}
