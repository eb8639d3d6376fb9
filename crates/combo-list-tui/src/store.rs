use crate::{actions::Action, effect::Effect, reducer::reduce, state::AppState};

/// Redux-style Store that holds application state and dispatches actions
///
/// The Store follows the Redux pattern:
/// - Centralized state management
/// - Actions are dispatched to modify state
/// - Pure reducers handle state transitions
/// - State is immutable (replaced on each action)
pub struct Store {
    state: AppState,
}

impl Store {
    /// Create a new store with initial state
    pub fn new(initial_state: AppState) -> Self {
        Self {
            state: initial_state,
        }
    }

    /// Get immutable reference to current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get mutable reference to current state
    /// Note: Direct mutation should be avoided - prefer dispatch() for state
    /// changes; the views use this only for render-derived metrics
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Dispatch an action to update state
    ///
    /// This is the primary way to modify state. The action is passed to the
    /// root reducer which delegates to appropriate sub-reducers.
    /// Returns a vector of effects to be executed by the caller.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        let (new_state, effects) = reduce(self.state.clone(), &action);
        self.state = new_state;
        effects
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_dispatch_quit() {
        let mut store = Store::default();
        assert!(!store.state().ui.should_quit);

        let _effects = store.dispatch(Action::Quit);
        assert!(store.state().ui.should_quit);
    }

    #[test]
    fn test_store_dispatch_toggle_help() {
        let mut store = Store::default();
        assert!(!store.state().ui.show_help);

        let _effects = store.dispatch(Action::ToggleHelp);
        assert!(store.state().ui.show_help);

        let _effects = store.dispatch(Action::ToggleHelp);
        assert!(!store.state().ui.show_help);
    }

    #[test]
    fn test_store_returns_selection_effects() {
        let mut store = Store::default();
        let effects = store.dispatch(Action::AcceptSelection);
        assert_eq!(effects.len(), 1);
    }
}
