/// Effect system for the Redux loop
/// Reducers return (State, Vec<Effect>) where Effects describe side effects
/// to perform; the main loop executes them after dispatch
use combo_list_core::Item;

/// Effects that reducers can request to be performed
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Announce the committed selection to the outside world (the widget's
    /// delegate callback). `None` means "no item selected".
    NotifySelection(Option<Item>),
}
