//! Rendering tests for the map and status widgets using an in-memory buffer

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect as Area};
use ratatui::widgets::Widget;

use ed_core::dungeon::{Level, Rect, ScriptedRooms, generate_level};
use ed_core::{DungeonConfig, GameRng, Generator};
use ed_tui::Theme;
use ed_tui::display::{ClassicGlyphs, FancyGlyphs};
use ed_tui::widgets::{HINT, MapWidget, StatusWidget};

fn two_room_level() -> Level {
    let config = DungeonConfig {
        display_width: 20,
        display_height: 20,
        tile_size: 1,
        max_rooms: 2,
        min_room_size: 4,
        max_room_size: 4,
    };
    let mut level = Level::new(20, 20, config.max_rooms);
    let mut source = ScriptedRooms::new([Rect::new(2, 2, 4, 4), Rect::new(10, 10, 4, 4)]);
    generate_level(&mut level, &config, &mut source);
    level
}

fn symbol_at(buf: &Buffer, x: u16, y: u16) -> String {
    buf.cell(Position::new(x, y))
        .map(|cell| cell.symbol().to_string())
        .unwrap_or_default()
}

fn row_text(buf: &Buffer, y: u16) -> String {
    (0..buf.area.width).map(|x| symbol_at(buf, x, y)).collect()
}

#[test]
fn test_map_draws_start_and_end() {
    let level = two_room_level();
    let theme = Theme::dark();
    let mut buf = Buffer::empty(Area::new(0, 0, 22, 22));

    MapWidget::new(&level, &theme, &ClassicGlyphs).render(buf.area, &mut buf);

    // Inner area starts one cell in from the border
    assert_eq!(symbol_at(&buf, 5, 5), "S");
    assert_eq!(symbol_at(&buf, 13, 13), "E");
    assert_eq!(buf.cell(Position::new(5, 5)).map(|c| c.fg), Some(theme.map_start));
    assert_eq!(buf.cell(Position::new(13, 13)).map(|c| c.fg), Some(theme.map_end));
}

#[test]
fn test_map_draws_every_tile_kind() {
    let level = two_room_level();
    let theme = Theme::dark();
    let mut buf = Buffer::empty(Area::new(0, 0, 22, 22));

    MapWidget::new(&level, &theme, &ClassicGlyphs).render(buf.area, &mut buf);

    // Grid (0, 0) is wall, (3, 3) is inside the first room, (8, 4) is on the corridor
    assert_eq!(symbol_at(&buf, 1, 1), "#");
    assert_eq!(symbol_at(&buf, 4, 4), ".");
    assert_eq!(symbol_at(&buf, 9, 5), ",");
    assert_eq!(buf.cell(Position::new(9, 5)).map(|c| c.fg), Some(theme.map_corridor));
}

#[test]
fn test_map_title_in_border() {
    let level = two_room_level();
    let theme = Theme::light();
    let mut buf = Buffer::empty(Area::new(0, 0, 22, 22));

    MapWidget::new(&level, &theme, &FancyGlyphs).render(buf.area, &mut buf);

    assert!(row_text(&buf, 0).contains("Endless Dungeon"));
    assert_eq!(symbol_at(&buf, 1, 1), "▓");
}

#[test]
fn test_map_clips_to_small_area() {
    let level = two_room_level();
    let theme = Theme::dark();
    let mut buf = Buffer::empty(Area::new(0, 0, 8, 8));

    // Only the top-left corner of the grid fits; must not panic
    MapWidget::new(&level, &theme, &ClassicGlyphs).render(buf.area, &mut buf);

    assert_eq!(symbol_at(&buf, 5, 5), "S");
}

#[test]
fn test_status_lines() {
    let generator = Generator::new(DungeonConfig::default(), GameRng::new(42));
    let theme = Theme::dark();
    let mut buf = Buffer::empty(Area::new(0, 0, 80, 2));

    StatusWidget::new(&generator, &theme).render(buf.area, &mut buf);

    let line1 = row_text(&buf, 0);
    assert!(line1.starts_with("Gen:1 Seed:42 Rooms:"));
    assert!(line1.contains("/15"));
    assert!(row_text(&buf, 1).starts_with(HINT));
}

#[test]
fn test_status_single_row_skips_hint() {
    let generator = Generator::new(DungeonConfig::default(), GameRng::new(42));
    let theme = Theme::dark();
    let mut buf = Buffer::empty(Area::new(0, 0, 80, 1));

    StatusWidget::new(&generator, &theme).render(buf.area, &mut buf);

    assert!(!row_text(&buf, 0).contains("SPACE"));
}
