use anyhow::Result;
use ratatui::{
    crossterm::{
        self,
        event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    },
    prelude::*,
};

use combo_list_core::Item;

use crate::actions::Action;
use crate::config::Config;
use crate::effect::Effect;
use crate::state::AppState;
use crate::store::Store;

mod actions;
mod catalog;
mod config;
mod effect;
mod log_capture;
mod reducer;
mod shortcuts;
mod state;
mod store;
mod theme;
mod view_models;
mod views;

pub struct App {
    // Redux store - centralized state management
    pub store: Store,
    // Most recent selection announced by the model (reported on exit)
    pub last_selection: Option<Item>,
}

pub fn initialize_panic_handler() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        shutdown().unwrap();
        original_hook(panic_info);
    }));
}

fn startup() -> Result<()> {
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(std::io::stderr(), crossterm::terminal::EnterAlternateScreen)?;
    Ok(())
}

fn shutdown() -> Result<()> {
    crossterm::execute!(std::io::stderr(), crossterm::terminal::LeaveAlternateScreen)?;
    crossterm::terminal::disable_raw_mode()?;
    Ok(())
}

/// Dispatch an action and execute whatever effects come back
fn update(app: &mut App, msg: Action) {
    let effects = app.store.dispatch(msg);
    for effect in effects {
        execute_effect(app, effect);
    }
}

fn execute_effect(app: &mut App, effect: Effect) {
    match effect {
        Effect::NotifySelection(item) => {
            match &item {
                Some(item) => log::info!("Selected {:?} (tag {})", item.label, item.tag),
                None => log::info!("Selection cleared"),
            }
            app.last_selection = item;
        }
    }
}

/// Map a key event to an action, depending on which overlay is open
///
/// Overlays capture the keyboard while open; in normal mode printable
/// characters feed the filter, so chrome bindings live on function keys
/// and control combinations only.
fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    let state = app.store.state();

    if state.debug_console.is_open {
        return match key.code {
            KeyCode::F(12) | KeyCode::Esc => Action::ToggleDebugConsole,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollConsoleDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollConsoleUp,
            KeyCode::Char('a') => Action::ToggleConsoleAutoScroll,
            KeyCode::Char('c') => Action::ClearConsoleLogs,
            _ => Action::None,
        };
    }

    if state.ui.show_help {
        return match key.code {
            KeyCode::F(1) | KeyCode::Esc | KeyCode::Char('q') => Action::ToggleHelp,
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollHelpDown,
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollHelpUp,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Enter => Action::AcceptSelection,
        KeyCode::Down => Action::CursorDown,
        KeyCode::Up => Action::CursorUp,
        KeyCode::Home => Action::CursorToFirst,
        KeyCode::End => Action::CursorToLast,
        KeyCode::Backspace => Action::FilterBackspace,
        KeyCode::F(1) => Action::ToggleHelp,
        KeyCode::F(12) => Action::ToggleDebugConsole,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::ClearFilter,
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::ClearSelection
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Action::FilterInput(c)
        }
        _ => Action::None,
    }
}

fn run(config: Config, log_buffer: log_capture::LogBuffer) -> Result<Option<Item>> {
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stderr()))?;

    let mut app = App {
        store: Store::new(AppState::new(config, log_buffer)),
        last_selection: None,
    };

    loop {
        terminal.draw(|f| views::render(f, &mut app))?;

        if event::poll(std::time::Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let action = handle_key_event(key, &app);
            update(&mut app, action);
        }

        if app.store.state().ui.should_quit {
            break;
        }
    }

    Ok(app.last_selection)
}

fn main() -> Result<()> {
    let log_buffer = log_capture::init_logger();
    let config = Config::load();

    initialize_panic_handler();
    startup()?;
    let result = run(config, log_buffer);
    shutdown()?;

    // Announce the final selection once the terminal is restored
    match result? {
        Some(item) => println!("{} (tag {})", item.label, item.tag),
        None => println!("No selection"),
    }
    Ok(())
}
