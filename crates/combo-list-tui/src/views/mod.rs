use ratatui::prelude::*;

use crate::App;

pub mod combo_list;
pub mod debug_console;
pub mod help;

/// Top-level render: the combo list, then any overlays on top of it
pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();

    combo_list::render_combo_list(f, area, app);

    if app.store.state().ui.show_help {
        let scroll = app.store.state().ui.help_scroll;
        let theme = app.store.state().theme.clone();
        let max_scroll = help::render_help_panel(f, area, scroll, &theme);
        app.store.state_mut().ui.help_max_scroll = max_scroll;
    }

    if app.store.state().debug_console.is_open {
        let viewport_height = debug_console::render_debug_console(f, area, app);
        app.store.state_mut().debug_console.viewport_height = viewport_height;
    }
}
