use combo_list_core::{ComboList, Invalidation};

use crate::{catalog::Catalog, config::Config, log_capture, theme::Theme};

/// Root application state following Redux pattern
#[derive(Debug, Clone)]
pub struct AppState {
    pub ui: UiState,
    pub list: ListState,
    pub debug_console: DebugConsoleState,
    pub config: Config,
    pub theme: Theme,
}

impl AppState {
    /// Build initial state from config, loading the catalog it points at.
    pub fn new(config: Config, logs: log_capture::LogBuffer) -> Self {
        let catalog = Catalog::load(config.catalog_file.as_deref());
        let mut list = ListState::new(&catalog);
        if !config.initial_filter.is_empty() {
            list.set_filter(&config.initial_filter);
        }
        Self {
            ui: UiState::default(),
            list,
            debug_console: DebugConsoleState::with_buffer(logs),
            config,
            theme: Theme::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Config::default(),
            log_capture::DebugConsoleLogger::create_buffer(),
        )
    }
}

/// UI chrome state (help panel, quit flag)
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub show_help: bool,
    pub help_scroll: usize,
    pub help_max_scroll: usize,
    pub should_quit: bool,
}

/// Combo list state: the core model plus the view cursor
///
/// The cursor is the highlighted filtered row and is pure view state.
/// The committed selection lives in the model as a tag, so it survives
/// filter changes that hide its row.
#[derive(Debug, Clone)]
pub struct ListState {
    pub list: ComboList,
    pub cursor: Option<usize>,
}

impl ListState {
    pub fn new(catalog: &Catalog) -> Self {
        let mut state = Self {
            list: ComboList::from_provider(catalog),
            cursor: None,
        };
        state.reset_cursor();
        state
    }

    /// Apply a new filter string; any actual change restarts the cursor
    /// at the first selectable row since row positions are not stable
    /// across filter changes.
    pub fn set_filter(&mut self, filter: &str) {
        if self.list.set_filter(filter) != Invalidation::None {
            self.reset_cursor();
        }
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = self.first_selectable();
    }

    pub fn cursor_down(&mut self) {
        self.cursor = match self.cursor {
            Some(cursor) => (cursor + 1..self.list.row_count())
                .find(|&i| self.list.is_selectable(i))
                .or_else(|| self.first_selectable()),
            None => self.first_selectable(),
        };
    }

    pub fn cursor_up(&mut self) {
        self.cursor = match self.cursor {
            Some(cursor) => (0..cursor)
                .rev()
                .find(|&i| self.list.is_selectable(i))
                .or_else(|| self.last_selectable()),
            None => self.last_selectable(),
        };
    }

    pub fn cursor_to_first(&mut self) {
        self.cursor = self.first_selectable();
    }

    pub fn cursor_to_last(&mut self) {
        self.cursor = self.last_selectable();
    }

    fn first_selectable(&self) -> Option<usize> {
        (0..self.list.row_count()).find(|&i| self.list.is_selectable(i))
    }

    fn last_selectable(&self) -> Option<usize> {
        (0..self.list.row_count())
            .rev()
            .find(|&i| self.list.is_selectable(i))
    }
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(&Catalog::builtin())
    }
}

/// Debug console state (drop-down log console)
#[derive(Debug, Clone)]
pub struct DebugConsoleState {
    pub is_open: bool,
    pub scroll_offset: usize,
    pub auto_scroll: bool, // Follow new logs as they arrive
    pub height_percent: u16,
    pub logs: log_capture::LogBuffer,
    pub viewport_height: usize, // Updated during rendering for scroll clamping
}

impl DebugConsoleState {
    pub fn with_buffer(logs: log_capture::LogBuffer) -> Self {
        Self {
            logs,
            ..Self::default()
        }
    }
}

impl Default for DebugConsoleState {
    fn default() -> Self {
        Self {
            is_open: false,
            scroll_offset: 0,
            auto_scroll: true,
            height_percent: 50,
            logs: log_capture::DebugConsoleLogger::create_buffer(),
            viewport_height: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_cursor_lands_on_first_item_row() {
        let state = ListState::default();
        let cursor = state.cursor.expect("cursor set");
        assert!(state.list.is_selectable(cursor));
        // Row 0 is always a group header in the built-in catalog
        assert_eq!(cursor, 1);
    }

    #[test]
    fn test_cursor_navigation_skips_group_headers() {
        let mut state = ListState::default();
        let first = state.cursor.unwrap();
        for _ in 0..state.list.row_count() {
            state.cursor_down();
            assert!(state.list.is_selectable(state.cursor.unwrap()));
        }
        // Wrapped all the way around
        state.cursor = Some(first);
        state.cursor_up();
        let last = state.cursor.unwrap();
        assert!(state.list.is_selectable(last));
        assert!(last > first);
    }

    #[test]
    fn test_filter_change_resets_cursor() {
        let mut state = ListState::default();
        state.cursor_down();
        state.cursor_down();
        state.set_filter("zzz no such entry");
        assert_eq!(state.cursor, None);
        state.set_filter("");
        assert!(state.cursor.is_some());
    }
}
