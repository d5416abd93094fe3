//! ed-tui: Terminal UI layer using ratatui
//!
//! Draws the generated level and turns key presses into regenerate/quit
//! commands. The level is only ever read from here.

pub mod app;
pub mod display;
pub mod input;
pub mod logging;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use display::GraphicsMode;
pub use input::Command;
pub use theme::Theme;
