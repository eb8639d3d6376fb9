use crate::{
    actions::Action,
    effect::Effect,
    state::{AppState, DebugConsoleState, ListState, UiState},
};

/// Root reducer that delegates to sub-reducers based on action type
/// Pure function: takes state and action, returns new state plus effects
pub fn reduce(mut state: AppState, action: &Action) -> (AppState, Vec<Effect>) {
    let mut effects = Vec::new();

    state.ui = ui_reducer(state.ui, action);
    state.list = list_reducer(state.list, action, &mut effects);
    state.debug_console = debug_console_reducer(state.debug_console, action);

    (state, effects)
}

/// UI chrome reducer - quit flag and help panel
fn ui_reducer(mut state: UiState, action: &Action) -> UiState {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::ToggleHelp => {
            state.show_help = !state.show_help;
            state.help_scroll = 0;
        }
        Action::ScrollHelpUp => {
            state.help_scroll = state.help_scroll.saturating_sub(1);
        }
        Action::ScrollHelpDown => {
            if state.help_scroll < state.help_max_scroll {
                state.help_scroll += 1;
            }
        }
        _ => {}
    }

    state
}

/// Combo list reducer - filter editing, cursor movement, selection
fn list_reducer(mut state: ListState, action: &Action, effects: &mut Vec<Effect>) -> ListState {
    match action {
        Action::FilterInput(c) => {
            let mut filter = state.list.filter().to_string();
            filter.push(*c);
            state.set_filter(&filter);
        }
        Action::FilterBackspace => {
            let mut filter = state.list.filter().to_string();
            filter.pop();
            state.set_filter(&filter);
        }
        Action::ClearFilter => {
            state.set_filter("");
        }
        Action::CursorDown => state.cursor_down(),
        Action::CursorUp => state.cursor_up(),
        Action::CursorToFirst => state.cursor_to_first(),
        Action::CursorToLast => state.cursor_to_last(),
        Action::AcceptSelection => {
            if let Some(cursor) = state.cursor
                && let Some(tag) = state.list.tag_at(cursor)
            {
                state.list.set_selected_tag(Some(tag));
                let item = state.list.item_with_tag(Some(tag)).cloned();
                effects.push(Effect::NotifySelection(item));
            }
        }
        Action::ClearSelection => {
            state.list.set_selected_tag(None);
            effects.push(Effect::NotifySelection(None));
        }
        _ => {}
    }

    state
}

/// Debug console reducer
fn debug_console_reducer(mut state: DebugConsoleState, action: &Action) -> DebugConsoleState {
    match action {
        Action::ToggleDebugConsole => {
            state.is_open = !state.is_open;
        }
        Action::ScrollConsoleUp => {
            state.auto_scroll = false;
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
        }
        Action::ScrollConsoleDown => {
            // Clamped against the log count during rendering
            state.scroll_offset += 1;
        }
        Action::ToggleConsoleAutoScroll => {
            state.auto_scroll = !state.auto_scroll;
        }
        Action::ClearConsoleLogs => {
            if let Ok(mut logs) = state.logs.lock() {
                logs.clear();
            }
        }
        _ => {}
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_input_appends_and_resets_cursor() {
        let state = AppState::default();
        let (state, _) = reduce(state, &Action::FilterInput('n'));
        let (state, _) = reduce(state, &Action::FilterInput('e'));
        assert_eq!(state.list.list.filter(), "ne");
        if let Some(cursor) = state.list.cursor {
            assert!(state.list.list.is_selectable(cursor));
        }
    }

    #[test]
    fn test_filter_backspace_removes_last_char() {
        let state = AppState::default();
        let (state, _) = reduce(state, &Action::FilterInput('a'));
        let (state, _) = reduce(state, &Action::FilterBackspace);
        assert_eq!(state.list.list.filter(), "");
    }

    #[test]
    fn test_accept_selection_commits_tag_and_emits_effect() {
        let state = AppState::default();
        let cursor = state.list.cursor.unwrap();
        let expected_tag = state.list.list.tag_at(cursor).unwrap();

        let (state, effects) = reduce(state, &Action::AcceptSelection);
        assert_eq!(state.list.list.selected_tag(), Some(expected_tag));
        assert_eq!(effects.len(), 1);
        match &effects[0] {
            Effect::NotifySelection(Some(item)) => assert_eq!(item.tag, expected_tag),
            other => panic!("unexpected effect {other:?}"),
        }
    }

    #[test]
    fn test_clear_selection_emits_none() {
        let state = AppState::default();
        let (state, _) = reduce(state, &Action::AcceptSelection);
        let (state, effects) = reduce(state, &Action::ClearSelection);
        assert_eq!(state.list.list.selected_tag(), None);
        assert_eq!(effects, vec![Effect::NotifySelection(None)]);
    }

    #[test]
    fn test_selection_survives_filter_round_trip() {
        let state = AppState::default();
        let (state, _) = reduce(state, &Action::AcceptSelection);
        let tag = state.list.list.selected_tag().unwrap();

        // Filter everything out, then clear the filter
        let mut state = state;
        for c in "zzzz".chars() {
            let (next, _) = reduce(state, &Action::FilterInput(c));
            state = next;
        }
        assert_eq!(state.list.list.row_count(), 0);
        assert_eq!(state.list.list.selected_tag(), Some(tag));

        let (state, _) = reduce(state, &Action::ClearFilter);
        assert_eq!(state.list.list.selected_tag(), Some(tag));
        assert!(state.list.list.row_index_of_tag(tag).is_some());
    }

    #[test]
    fn test_help_scroll_clamps_at_max() {
        let mut state = AppState::default();
        state.ui.help_max_scroll = 1;
        let (state, _) = reduce(state, &Action::ScrollHelpDown);
        let (state, _) = reduce(state, &Action::ScrollHelpDown);
        assert_eq!(state.ui.help_scroll, 1);
        let (state, _) = reduce(state, &Action::ScrollHelpUp);
        let (state, _) = reduce(state, &Action::ScrollHelpUp);
        assert_eq!(state.ui.help_scroll, 0);
    }

    #[test]
    fn test_console_toggle_and_manual_scroll() {
        let state = AppState::default();
        let (state, _) = reduce(state, &Action::ToggleDebugConsole);
        assert!(state.debug_console.is_open);
        let (state, _) = reduce(state, &Action::ScrollConsoleUp);
        assert!(!state.debug_console.auto_scroll);
    }
}
