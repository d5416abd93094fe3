//! Terminal setup and teardown
//!
//! Each setup step that fails undoes the steps before it, so an error never
//! leaves the terminal in raw mode or on the alternate screen.

use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run `setup`; if it fails, run `undo` before handing the error back
pub fn or_undo<T, E>(setup: impl FnOnce() -> Result<T, E>, undo: impl FnOnce()) -> Result<T, E> {
    setup().inspect_err(|_| undo())
}

/// Enter raw mode and the alternate screen
pub fn init() -> io::Result<Tui> {
    enable_raw_mode()?;
    or_undo(enter_alternate_screen, || {
        let _ = disable_raw_mode();
    })
}

fn enter_alternate_screen() -> io::Result<Tui> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    or_undo(
        || Terminal::new(CrosstermBackend::new(io::stdout())),
        || {
            let mut stdout = io::stdout();
            let _ = execute!(stdout, LeaveAlternateScreen);
        },
    )
}

/// Leave the alternate screen and raw mode
pub fn restore(terminal: &mut Tui) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}
