/// Shortcut definitions surfaced in the help panel
///
/// Key handling itself lives in main.rs; this table is the single place
/// the help panel reads from so the two cannot drift apart silently.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key_display: &'static str,
    pub description: &'static str,
}

/// Category of shortcuts
#[derive(Debug, Clone)]
pub struct ShortcutCategory {
    pub name: &'static str,
    pub shortcuts: Vec<Shortcut>,
}

/// Get all shortcut definitions organized by category
pub fn get_shortcuts() -> Vec<ShortcutCategory> {
    vec![
        ShortcutCategory {
            name: "Filtering",
            shortcuts: vec![
                Shortcut {
                    key_display: "any character",
                    description: "Type to filter the list",
                },
                Shortcut {
                    key_display: "Backspace",
                    description: "Delete the last filter character",
                },
                Shortcut {
                    key_display: "Ctrl+U",
                    description: "Clear the filter",
                },
            ],
        },
        ShortcutCategory {
            name: "Navigation",
            shortcuts: vec![
                Shortcut {
                    key_display: "↑/↓",
                    description: "Move between items (group headers are skipped)",
                },
                Shortcut {
                    key_display: "Home/End",
                    description: "Jump to the first/last item",
                },
            ],
        },
        ShortcutCategory {
            name: "Selection",
            shortcuts: vec![
                Shortcut {
                    key_display: "Enter",
                    description: "Select the highlighted item",
                },
                Shortcut {
                    key_display: "Ctrl+X",
                    description: "Clear the selection",
                },
            ],
        },
        ShortcutCategory {
            name: "General",
            shortcuts: vec![
                Shortcut {
                    key_display: "F1",
                    description: "Toggle this help panel",
                },
                Shortcut {
                    key_display: "F12",
                    description: "Toggle the debug console",
                },
                Shortcut {
                    key_display: "Esc",
                    description: "Quit (the selection is reported on exit)",
                },
            ],
        },
    ]
}
