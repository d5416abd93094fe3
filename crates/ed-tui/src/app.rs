//! Application state and main UI controller

use crossterm::event::Event;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use ed_core::Generator;

use crate::display::{self, GlyphSet, GraphicsMode};
use crate::input::{Command, key_to_command};
use crate::theme::Theme;
use crate::widgets::{MapWidget, StatusWidget};

/// Main application state
pub struct App {
    generator: Generator,

    /// Set once the user asked to leave
    should_quit: bool,

    /// Color theme (adapts to light/dark terminal background)
    theme: Theme,

    /// Glyph set for rendering tiles
    glyph_set: Box<dyn GlyphSet>,
}

impl App {
    pub fn new(generator: Generator, theme: Theme, graphics_mode: GraphicsMode) -> Self {
        Self {
            generator,
            should_quit: false,
            theme,
            glyph_set: display::detect_glyph_set(graphics_mode),
        }
    }

    /// Read-only access to the generator and its current level
    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Translate a terminal event into a command, if it maps to one
    pub fn handle_event(&mut self, event: Event) -> Option<Command> {
        match event {
            Event::Key(key) => key_to_command(key),
            _ => None,
        }
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Regenerate => self.generator.regenerate(),
            Command::Quit => {
                log::info!("quit after {} generations", self.generator.generation());
                self.should_quit = true;
            }
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        // Layout: map on top, two status lines below
        let grid_height = self.generator.level().grid.height() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(grid_height.saturating_add(2)), // Map + border
                Constraint::Length(2),                          // Status lines
            ])
            .split(frame.area());

        let map_widget = MapWidget::new(self.generator.level(), &self.theme, self.glyph_set.as_ref());
        frame.render_widget(map_widget, chunks[0]);

        let status_widget = StatusWidget::new(&self.generator, &self.theme);
        frame.render_widget(status_widget, chunks[1]);
    }
}
