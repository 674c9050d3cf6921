//! Workbench pane rendering modules
//!
//! - [`menu`]: exercise list with the current selection
//! - [`terminal`]: transcript of the last run
//! - [`input`]: queued input lines and the line being typed
//! - [`status`]: status bar with keybindings and run state
//!
//! Each module exports a single `render_*` function that draws into a
//! [`ratatui::Frame`] and holds no state of its own.

pub mod input;
pub mod menu;
pub mod status;
pub mod terminal;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

pub use input::render_input_pane;
pub use menu::render_menu_pane;
pub use status::render_status_bar;
pub use terminal::render_terminal_pane;

/// Border style shared by every pane
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}
