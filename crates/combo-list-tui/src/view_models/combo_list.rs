use ratatui::style::Color;

use combo_list_core::RowContent;

use crate::{state::ListState, theme::Theme};

/// View model for the combo list - all presentation data pre-computed
#[derive(Debug, Clone)]
pub struct ComboListViewModel {
    /// Pre-formatted filter input with prompt
    pub input_text: String,
    /// Total number of filtered rows
    pub total_rows: usize,
    /// Pre-computed visible rows with all formatting applied
    pub visible_rows: Vec<ListRow>,
    /// Pre-calculated scroll offset
    pub scroll_offset: usize,
    /// Label of the committed selection, if its row is currently visible
    pub selected_label: Option<String>,
    /// True when a selection exists but its row is filtered out
    pub selected_hidden: bool,
}

/// A single row in the combo list
#[derive(Debug, Clone)]
pub struct ListRow {
    /// Group header rows render full-width and cannot be highlighted
    pub is_group: bool,
    /// Whether this row is under the cursor
    pub is_cursor: bool,
    /// Checkmark column: "✓ " on the committed selection's row
    pub checkmark: String,
    pub label: String,
    pub fg_color: Color,
    pub bg_color: Color,
}

impl ComboListViewModel {
    /// Build view model from list state
    pub fn from_state(state: &ListState, visible_height: usize, theme: &Theme) -> Self {
        let list = &state.list;
        let total_rows = list.row_count();
        let cursor = state.cursor;
        let selected_row = list
            .selected_tag()
            .and_then(|tag| list.row_index_of_tag(tag));

        // Keep the cursor roughly centered while scrolling
        let scroll_offset = if total_rows == 0 {
            0
        } else {
            let cursor = cursor.unwrap_or(0);
            if cursor < visible_height / 2 {
                0
            } else if cursor >= total_rows.saturating_sub(visible_height / 2) {
                total_rows.saturating_sub(visible_height)
            } else {
                cursor.saturating_sub(visible_height / 2)
            }
        };

        let visible_rows = (0..total_rows)
            .skip(scroll_offset)
            .take(visible_height)
            .map(|i| {
                let is_cursor = cursor == Some(i);
                let is_selected = selected_row == Some(i);
                let checkmark = if is_selected { "✓ " } else { "  " }.to_string();

                match list.row_at(i) {
                    RowContent::Group(group) => ListRow {
                        is_group: true,
                        is_cursor: false,
                        checkmark: "  ".to_string(),
                        label: group.label.clone(),
                        fg_color: theme.group_header_fg,
                        bg_color: theme.group_header_bg,
                    },
                    RowContent::Item(item, _) => {
                        let (fg_color, bg_color) = if is_cursor {
                            (theme.selected_fg, theme.selected_bg)
                        } else {
                            (theme.text_primary, Color::Reset)
                        };
                        ListRow {
                            is_group: false,
                            is_cursor,
                            checkmark,
                            label: item.label.clone(),
                            fg_color,
                            bg_color,
                        }
                    }
                }
            })
            .collect();

        let selected_label = list
            .item_with_tag(list.selected_tag())
            .map(|item| item.label.clone());
        let selected_hidden = list.selected_tag().is_some() && selected_row.is_none();

        Self {
            input_text: format!("> {}", list.filter()),
            total_rows,
            visible_rows,
            scroll_offset,
            selected_label,
            selected_hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn list_state() -> ListState {
        ListState::new(&Catalog::builtin())
    }

    #[test]
    fn test_checkmark_follows_committed_selection() {
        let mut state = list_state();
        let cursor = state.cursor.unwrap();
        let tag = state.list.tag_at(cursor).unwrap();
        state.list.set_selected_tag(Some(tag));

        let vm = ComboListViewModel::from_state(&state, 50, &Theme::default());
        assert_eq!(vm.visible_rows[cursor].checkmark, "✓ ");
        let marked = vm
            .visible_rows
            .iter()
            .filter(|row| row.checkmark == "✓ ")
            .count();
        assert_eq!(marked, 1);
    }

    #[test]
    fn test_group_rows_are_never_cursor_rows() {
        let state = list_state();
        let vm = ComboListViewModel::from_state(&state, 50, &Theme::default());
        for row in &vm.visible_rows {
            if row.is_group {
                assert!(!row.is_cursor);
            }
        }
        assert_eq!(vm.visible_rows.iter().filter(|r| r.is_cursor).count(), 1);
    }

    #[test]
    fn test_hidden_selection_is_flagged() {
        let mut state = list_state();
        state.list.set_selected_tag(Some(300)); // Copy
        state.set_filter("session");

        let vm = ComboListViewModel::from_state(&state, 50, &Theme::default());
        assert!(vm.selected_hidden);
        assert_eq!(vm.selected_label, None);
    }

    #[test]
    fn test_scroll_offset_keeps_cursor_visible() {
        let mut state = list_state();
        state.cursor_to_last();
        let cursor = state.cursor.unwrap();

        let height = 4;
        let vm = ComboListViewModel::from_state(&state, height, &Theme::default());
        assert!(cursor >= vm.scroll_offset);
        assert!(cursor < vm.scroll_offset + height);
    }

    #[test]
    fn test_input_text_carries_prompt_and_filter() {
        let mut state = list_state();
        state.set_filter("win");
        let vm = ComboListViewModel::from_state(&state, 50, &Theme::default());
        assert_eq!(vm.input_text, "> win");
    }
}
