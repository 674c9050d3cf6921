//! Transcript pane rendering

use crate::transcript::{Origin, Transcript};
use crate::ui::panes::border_style;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the terminal output pane
pub fn render_terminal_pane(
    frame: &mut Frame,
    area: Rect,
    transcript: &Transcript,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Terminal Output ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines = transcript.styled_output();

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no output, press F5 to run)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = lines
        .into_iter()
        .map(|(text, origin)| match origin {
            Origin::Output => ListItem::new(text).style(Style::default().fg(DEFAULT_THEME.fg)),
            Origin::Input => ListItem::new(format!("› {}", text))
                .style(Style::default().fg(DEFAULT_THEME.secondary)),
        })
        .collect();

    // Calculate visible range for scrolling
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // Clamp scroll offset only if content exceeds visible area
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
