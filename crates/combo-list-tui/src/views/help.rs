use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    prelude::*,
    widgets::*,
};

use crate::shortcuts::get_shortcuts;
use crate::theme::Theme;

/// Render the shortcuts help panel as a centered floating window
/// Returns the maximum scroll offset
pub fn render_help_panel(f: &mut Frame, area: Rect, scroll_offset: usize, theme: &Theme) -> usize {
    // Calculated centered area (70% width, 80% height)
    let popup_width = (area.width * 70 / 100).min(90);
    let popup_height = (area.height * 80 / 100).min(35);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    let popup_area = Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    };

    // Clear the area and render background
    f.render_widget(Clear, popup_area);
    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_panel)),
        popup_area,
    );
    f.render_widget(
        Block::default()
            .borders(Borders::ALL)
            .title(" Keyboard Shortcuts ")
            .title_style(
                Style::default()
                    .fg(theme.accent_primary)
                    .add_modifier(Modifier::BOLD),
            )
            .border_style(Style::default().fg(theme.accent_primary)),
        popup_area,
    );

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    // Split inner area: scrollable content and 1-line sticky footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let content_area = chunks[0];
    let footer_area = chunks[1];

    let mut text_lines = Vec::new();
    for category in get_shortcuts() {
        text_lines.push(Line::from(Span::styled(
            category.name,
            Style::default()
                .fg(theme.status_warning)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )));
        text_lines.push(Line::from(""));

        for shortcut in category.shortcuts {
            text_lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:18}", shortcut.key_display),
                    Style::default()
                        .fg(theme.status_success)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    shortcut.description,
                    Style::default().fg(theme.text_secondary),
                ),
            ]));
        }

        text_lines.push(Line::from(""));
    }

    let total_lines = text_lines.len();
    let visible_height = content_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible_height);
    let scroll = scroll_offset.min(max_scroll);

    let content = Paragraph::new(text_lines).scroll((scroll as u16, 0));
    f.render_widget(content, content_area);

    let footer = Paragraph::new(Line::from(Span::styled(
        " j/k Scroll | F1 or Esc Close ",
        Style::default().fg(theme.text_muted),
    )))
    .alignment(Alignment::Center);
    f.render_widget(footer, footer_area);

    max_scroll
}
