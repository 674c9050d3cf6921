//! Queued input pane rendering

use crate::ui::panes::border_style;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the committed input lines followed by the line being typed.
///
/// Only the last lines that fit are shown.
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[String],
    buffer: &str,
    is_focused: bool,
) {
    let block = Block::default()
        .title(format!(" Input ({} queued) ", lines.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    let mut rendered: Vec<Line> = lines
        .iter()
        .map(|l| Line::styled(l.as_str(), Style::default().fg(DEFAULT_THEME.fg)))
        .collect();

    let cursor = if is_focused { "▏" } else { "" };
    rendered.push(Line::from(vec![
        Span::styled(
            buffer,
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(cursor, Style::default().fg(DEFAULT_THEME.border_focused)),
    ]));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let skip = rendered.len().saturating_sub(visible_height);
    let visible: Vec<Line> = rendered.into_iter().skip(skip).collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}
