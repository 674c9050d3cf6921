//! Exercise menu rendering

use crate::exercises::Exercise;
use crate::ui::panes::border_style;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the exercise list, highlighting `selected`
pub fn render_menu_pane(
    frame: &mut Frame,
    area: Rect,
    exercises: &[Exercise],
    selected: usize,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Exercises ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let items: Vec<ListItem> = exercises
        .iter()
        .enumerate()
        .map(|(i, exercise)| {
            let is_selected = i == selected;
            let marker = if is_selected { "▶ " } else { "  " };
            let mut name_style = Style::default().fg(DEFAULT_THEME.name);
            if is_selected {
                name_style = name_style.add_modifier(Modifier::BOLD);
            }
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.primary)),
                Span::styled(format!("{:<10}", exercise.name()), name_style),
                Span::styled(exercise.summary(), Style::default().fg(DEFAULT_THEME.comment)),
            ]);
            let item = ListItem::new(line);
            if is_selected {
                item.style(Style::default().bg(DEFAULT_THEME.selection_bg))
            } else {
                item
            }
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
