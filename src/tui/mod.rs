//! Terminal UI for interactive search

pub mod app;
pub mod colors;
pub mod debounce;
pub mod input;
pub mod list;
pub mod ui;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use std::io;

use crate::AppConfig;

/// Entry point: take over the terminal and run the search loop
pub fn run(config: &AppConfig) -> crate::Result<()> {
    let mut app = app::App::new(config)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    // Restore the terminal whether the loop ended cleanly or not
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    crate::logging::flush();
    result
}
