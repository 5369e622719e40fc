//! Key bindings for listbox navigation and selection.
//!
//! The navigation keys move the focus cursor through the selectable items
//! with wraparound; the select binding commits a selection at the cursor.
//!
//! ## Default Keys
//!
//! - **Cursor movement**: `↑/k` (up), `↓/j` (down)
//! - **Jump navigation**: `home/g` (first item), `end/G` (last item)
//! - **Commit**: `enter/space` (select at cursor)

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for listbox cursor movement and selection commits.
#[derive(Debug, Clone)]
pub struct ListBoxKeyMap {
    /// Move the focus cursor up one selectable item, wrapping at the top.
    pub cursor_up: key::Binding,
    /// Move the focus cursor down one selectable item, wrapping at the bottom.
    pub cursor_down: key::Binding,
    /// Jump the focus cursor to the first selectable item.
    pub go_to_start: key::Binding,
    /// Jump the focus cursor to the last selectable item.
    pub go_to_end: key::Binding,
    /// Commit a selection at the focus cursor.
    pub select: key::Binding,
}

impl Default for ListBoxKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')])
                .with_help("↑/k", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            go_to_start: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "go to start"),
            go_to_end: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "go to end"),
            select: key::Binding::new(vec![KeyCode::Enter, KeyCode::Char(' ')])
                .with_help("enter/space", "select"),
        }
    }
}

impl key::KeyMap for ListBoxKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.cursor_up, &self.cursor_down, &self.select]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            // Column 1: cursor movement
            vec![
                &self.cursor_up,
                &self.cursor_down,
                &self.go_to_start,
                &self.go_to_end,
            ],
            // Column 2: selection
            vec![&self.select],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyMap;
    use bubbletea_rs::KeyMsg;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_default_bindings_cover_spaced_commit() {
        let keymap = ListBoxKeyMap::default();
        let space = KeyMsg {
            key: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
        };
        let enter = KeyMsg {
            key: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
        };
        assert!(keymap.select.matches(&space));
        assert!(keymap.select.matches(&enter));
    }

    #[test]
    fn test_help_views_are_populated() {
        let keymap = ListBoxKeyMap::default();
        assert_eq!(keymap.short_help().len(), 3);
        let full = keymap.full_help();
        assert_eq!(full.len(), 2);
        assert_eq!(full[0].len(), 4);
    }
}
