//! Terminal color theme system
//!
//! Provides adaptive color palettes for dark and light terminal backgrounds.
//! Auto-detects via COLORFGBG env var, or manual override with --light flag
//! or ED_LIGHT_BG=1 environment variable.

use ed_core::dungeon::TileType;
use ratatui::style::Color;

/// Color theme for terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // General UI text
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, instructions)
    pub text_dim: Color,

    // Borders
    pub border: Color,

    // Map tiles
    pub map_empty: Color,
    pub map_wall: Color,
    pub map_floor: Color,
    pub map_corridor: Color,
    pub map_start: Color,
    pub map_end: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::Gray,
            border: Color::White,
            map_empty: Color::Black,
            map_wall: Color::DarkGray,
            map_floor: Color::Gray,
            map_corridor: Color::Blue,
            map_start: Color::Green,
            map_end: Color::Red,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            border: Color::DarkGray,
            map_empty: Color::White,
            map_wall: Color::DarkGray,
            map_floor: Color::Gray,
            map_corridor: Color::Blue,
            map_start: Color::Green,
            map_end: Color::Red,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and ED_LIGHT_BG override.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Foreground color for a tile
    pub fn tile_color(&self, tile: TileType) -> Color {
        match tile {
            TileType::Empty => self.map_empty,
            TileType::Wall => self.map_wall,
            TileType::Floor => self.map_floor,
            TileType::Corridor => self.map_corridor,
            TileType::Start => self.map_start,
            TileType::End => self.map_end,
        }
    }

    fn is_light_background() -> bool {
        if let Ok(val) = std::env::var("ED_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is set by many terminals (xterm, rxvt, iTerm2, etc.)
        // Format: "fg;bg" where values are color indices (0-15)
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_text_is_white() {
        let theme = Theme::dark();
        assert_eq!(theme.text, Color::White);
    }

    #[test]
    fn test_light_theme_text_is_black() {
        let theme = Theme::light();
        assert_eq!(theme.text, Color::Black);
    }

    #[test]
    fn test_tile_palette() {
        let theme = Theme::dark();
        assert_eq!(theme.tile_color(TileType::Wall), Color::DarkGray);
        assert_eq!(theme.tile_color(TileType::Floor), Color::Gray);
        assert_eq!(theme.tile_color(TileType::Corridor), Color::Blue);
        assert_eq!(theme.tile_color(TileType::Start), Color::Green);
        assert_eq!(theme.tile_color(TileType::End), Color::Red);
    }

    #[test]
    fn test_start_end_colors_same_both_themes() {
        let dark = Theme::dark();
        let light = Theme::light();
        assert_eq!(dark.tile_color(TileType::Start), light.tile_color(TileType::Start));
        assert_eq!(dark.tile_color(TileType::End), light.tile_color(TileType::End));
    }
}
