//! Glyph system for TUI rendering
//!
//! Provides support for both classic ASCII and shaded Unicode block characters.

use ed_core::dungeon::TileType;
use strum::{Display, EnumString, VariantNames};

/// Available graphics modes for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, VariantNames, Default)]
#[strum(serialize_all = "lowercase")]
pub enum GraphicsMode {
    /// Classic ASCII characters.
    Classic,
    /// Unicode shaded blocks.
    Fancy,
    /// Automatically detect support.
    #[default]
    Auto,
}

/// Set of glyphs used for rendering tiles.
pub trait GlyphSet: Send + Sync {
    /// Get the character for a tile.
    fn tile_char(&self, tile: TileType) -> char;
}

/// Plain ASCII glyph set.
pub struct ClassicGlyphs;

impl GlyphSet for ClassicGlyphs {
    fn tile_char(&self, tile: TileType) -> char {
        tile.symbol()
    }
}

/// Unicode block glyph set, closest to the solid tiles of a pixel renderer.
pub struct FancyGlyphs;

impl GlyphSet for FancyGlyphs {
    fn tile_char(&self, tile: TileType) -> char {
        match tile {
            TileType::Empty => ' ',
            TileType::Wall => '▓',
            TileType::Floor => '░',
            TileType::Corridor => '▒',
            TileType::Start | TileType::End => '█',
        }
    }
}

/// Detect if the terminal supports Unicode/UTF-8.
pub fn supports_unicode() -> bool {
    // Check LANG, LC_ALL, or LC_CTYPE for "UTF-8"
    let vars = ["LANG", "LC_ALL", "LC_CTYPE"];
    for var in vars {
        if let Ok(val) = std::env::var(var) {
            let val = val.to_uppercase();
            if val.contains("UTF-8") || val.contains("UTF8") {
                return true;
            }
        }
    }

    if let Ok(term) = std::env::var("TERM")
        && matches!(term.as_str(), "xterm-256color" | "alacritty" | "kitty" | "iterm")
    {
        return true;
    }

    false
}

/// Returns the best available glyph set for the current environment.
pub fn detect_glyph_set(mode: GraphicsMode) -> Box<dyn GlyphSet> {
    match mode {
        GraphicsMode::Classic => Box::new(ClassicGlyphs),
        GraphicsMode::Fancy => Box::new(FancyGlyphs),
        GraphicsMode::Auto => {
            if supports_unicode() {
                Box::new(FancyGlyphs)
            } else {
                Box::new(ClassicGlyphs)
            }
        }
    }
}
