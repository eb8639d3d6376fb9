/// Action enum - represents all possible actions in the application
/// Actions are dispatched to the reducer to update state
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Filter field editing
    FilterInput(char),
    FilterBackspace,
    ClearFilter,

    // List navigation (the cursor skips group header rows)
    CursorDown,
    CursorUp,
    CursorToFirst,
    CursorToLast,

    // Selection
    AcceptSelection, // Commit the cursor row's tag and notify the observer
    ClearSelection,

    // Help panel
    ToggleHelp,
    ScrollHelpUp,
    ScrollHelpDown,

    // Debug console
    ToggleDebugConsole,
    ScrollConsoleUp,
    ScrollConsoleDown,
    ToggleConsoleAutoScroll,
    ClearConsoleLogs,

    Quit,
    None,
}
