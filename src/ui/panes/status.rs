//! Status bar rendering with keybindings and run state

use crate::ui::app::{FocusedPane, RunState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    run_state: &RunState,
    focused: FocusedPane,
) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let (badge, badge_bg) = match run_state {
        RunState::Idle => (" READY ", DEFAULT_THEME.primary),
        RunState::Succeeded => (" OK ", DEFAULT_THEME.success),
        RunState::Failed(_) => (" ERROR ", DEFAULT_THEME.error),
    };

    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(if matches!(run_state, RunState::Failed(_)) {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);

    let mut right_spans = match focused {
        FocusedPane::Menu => vec![
            Span::styled(" ↑/↓ ", key_style),
            Span::styled(" select ", desc_style),
        ],
        FocusedPane::Input => vec![
            Span::styled(" ↵ ", key_style),
            Span::styled(" queue line ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ", desc_style),
            Span::styled(" ⌦ ", key_style),
            Span::styled(" clear ", desc_style),
        ],
        FocusedPane::Terminal => vec![
            Span::styled(" ↑/↓ ", key_style),
            Span::styled(" scroll ", desc_style),
        ],
    };

    right_spans.extend([
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" F5 ", key_style),
        Span::styled(" run ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⇥ ", key_style),
        Span::styled(" focus ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" esc ", key_style),
        Span::styled(" quit ", desc_style),
    ]);

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
