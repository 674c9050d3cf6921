//! Interactive workbench built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — workbench state, keyboard event loop, pane focus, running
//!   the selected exercise against the queued input
//! - **[`panes`]** — stateless render functions for each visible pane (menu,
//!   terminal, input, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! Construct an [`App`] and call [`App::run`] to start the event loop, or
//! [`run_workbench`] to have the terminal set up and restored around it.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Take over the terminal, run the workbench, and restore the terminal
pub fn run_workbench(mut app: App) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
