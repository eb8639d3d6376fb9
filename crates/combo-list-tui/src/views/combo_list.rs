use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    prelude::*,
    widgets::*,
};

use crate::App;
use crate::view_models::combo_list::ComboListViewModel;

/// Render the combo list popup
/// Pure presentation - all row formatting comes from the view model
pub fn render_combo_list(f: &mut Frame, area: Rect, app: &App) {
    use ratatui::widgets::Clear;

    let state = app.store.state();
    let theme = &state.theme;

    // Calculate centered area (60% width, 80% height)
    let popup_width = (area.width * 60 / 100).min(80);
    let popup_height = (area.height * 80 / 100).min(40);
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

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Select Action ")
        .title_style(
            Style::default()
                .fg(theme.accent_primary)
                .add_modifier(Modifier::BOLD),
        )
        .border_style(Style::default().fg(theme.accent_primary))
        .style(Style::default().bg(theme.bg_panel));
    f.render_widget(block, popup_area);

    let inner = popup_area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    // Split into input area, row list, and footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Filter input box
            Constraint::Min(3),    // Row list
            Constraint::Length(2), // Footer
        ])
        .split(inner);

    // The list height decides which rows the view model materializes
    let visible_height = chunks[1].height as usize;
    let vm = ComboListViewModel::from_state(&state.list, visible_height, theme);

    // Filter input box
    let input_paragraph = Paragraph::new(vm.input_text.clone())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent_primary))
                .style(Style::default().bg(theme.bg_secondary)),
        )
        .style(
            Style::default()
                .fg(theme.text_primary)
                .bg(theme.bg_secondary),
        );
    f.render_widget(input_paragraph, chunks[0]);

    // Row list
    if vm.visible_rows.is_empty() {
        let no_results = Paragraph::new("No matching items")
            .style(Style::default().fg(theme.text_muted))
            .alignment(Alignment::Center);
        f.render_widget(no_results, chunks[1]);
    } else {
        let result_lines: Vec<Line> = vm
            .visible_rows
            .iter()
            .map(|row_vm| {
                if row_vm.is_group {
                    // Group headers span the full width
                    return Line::from(Span::styled(
                        format!("{}{}", row_vm.checkmark, row_vm.label),
                        Style::default()
                            .fg(row_vm.fg_color)
                            .bg(row_vm.bg_color)
                            .add_modifier(Modifier::BOLD),
                    ));
                }

                Line::from(vec![
                    Span::styled(
                        row_vm.checkmark.clone(),
                        Style::default()
                            .fg(theme.checkmark_fg)
                            .bg(row_vm.bg_color),
                    ),
                    Span::styled(
                        row_vm.label.clone(),
                        Style::default()
                            .fg(row_vm.fg_color)
                            .bg(row_vm.bg_color)
                            .add_modifier(if row_vm.is_cursor {
                                Modifier::BOLD
                            } else {
                                Modifier::empty()
                            }),
                    ),
                ])
            })
            .collect();
        let results = Paragraph::new(result_lines);
        f.render_widget(results, chunks[1]);
    }

    // Footer: selection status plus key hints
    let selection_line = if let Some(label) = &vm.selected_label {
        Line::from(vec![
            Span::styled("Selected: ", Style::default().fg(theme.text_muted)),
            Span::styled(label.clone(), Style::default().fg(theme.status_success)),
        ])
    } else if vm.selected_hidden {
        Line::from(Span::styled(
            "Selection hidden by filter",
            Style::default().fg(theme.status_warning),
        ))
    } else {
        Line::from(Span::styled(
            "No selection",
            Style::default().fg(theme.text_muted),
        ))
    };
    let hints_line = Line::from(Span::styled(
        format!(
            "{} rows | Enter select | F1 help | Esc quit",
            vm.total_rows
        ),
        Style::default().fg(theme.text_muted),
    ));
    let footer = Paragraph::new(vec![selection_line, hints_line]);
    f.render_widget(footer, chunks[2]);
}
