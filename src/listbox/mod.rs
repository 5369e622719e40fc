//! Listbox component with mode-aware selection, a roving focus cursor,
//! and accessibility metadata.
//!
//! This module exposes a generic `Model<I: ListBoxItem>` plus supporting
//! types and submodules:
//! - `ListBoxItem`: Implement for your item type; must be `Display + Clone`
//!   and return a stable [`ItemKey`]
//! - `SelectionState`: The embeddable selection store, usable without the
//!   widget surface
//! - Submodules: `types`, `selection`, `keys`, `aria`, and `style`
//!
//! ## Architecture Overview
//!
//! The component is split into two layers that can be used together or
//! apart:
//!
//! ### Selection store
//! [`SelectionState`] owns the items, the selection mode, the selected-key
//! set, and the disabled predicate. All selection math lives here. The
//! store supports controlled and uncontrolled operation: uncontrolled, it
//! owns the selected set and reports changes; controlled, it treats the
//! host-supplied set as authoritative and every mutation becomes a
//! proposal delivered through the change callback.
//!
//! ### Widget model
//! [`Model`] wraps a store and adds the interaction surface: a focus
//! cursor that roves over the selectable items with wraparound, pointer
//! click handling, per-item render state with stable positional metadata,
//! and derived assistive-technology attributes. The cursor has the same
//! controlled/uncontrolled duality as the selection.
//!
//! ### Selection modes
//! Three closed modes govern what a commit does:
//! - `Single`: a commit replaces the selected set with the committed key
//! - `Multiple`: a commit toggles the committed key's membership
//! - `None`: a commit reports the empty set
//!
//! ### Help Integration
//! The model implements the crate's `key::KeyMap` trait, so help renderers
//! driven by that trait pick up the listbox bindings automatically.

// Module declarations

/// Core types: item keys, selection modes, ownership, and the item trait.
///
/// These are the fundamental building blocks:
/// - `ItemKey`: A stable per-item identity, textual or numeric
/// - `SelectionMode`: `Single`, `Multiple`, or `None`
/// - `Ownership`: Whether a piece of state is host- or widget-owned
/// - `ListBoxItem`: Trait for displayable, keyed items
/// - `DefaultItem`: A ready-to-use item with name, description, and a
///   disabled flag
pub mod types;

/// The selection store.
///
/// [`SelectionState`] can be embedded on its own wherever selection
/// semantics are needed without the widget surface, for example inside a
/// larger composite component.
pub mod selection;

/// Key bindings for listbox navigation and selection commits.
///
/// `ListBoxKeyMap` holds one binding per operation (cursor up/down,
/// jump to start/end, select) and ships terminal-convention defaults.
/// Individual bindings can be replaced to match application preferences.
pub mod keys;

/// Assistive-technology attribute derivation.
///
/// Pure functions and plain structs describing the listbox container and
/// each option the way a screen reader consumes them: roles, stable
/// option identifiers, the active-descendant reference, and 1-based
/// positional metadata.
pub mod aria;

/// Visual styling for the listbox.
///
/// `ListBoxStyles` covers every visual element with adaptive colors that
/// follow the terminal's light or dark background.
pub mod style;

// Internal modules
mod model;
mod rendering;

// Re-export public types from submodules

/// The main listbox component model.
///
/// `Model<I>` is a generic listbox over any item type implementing
/// [`ListBoxItem`]. It provides mode-aware selection, keyboard navigation
/// over the selectable items, and derived accessibility metadata.
///
/// # Examples
///
/// ```
/// use bubbletea_listbox::listbox::{DefaultItem, Model, SelectionMode};
///
/// let items = vec![
///     DefaultItem::new("1", "Apple").with_description("Red fruit"),
///     DefaultItem::new("2", "Banana").with_description("Yellow fruit"),
/// ];
/// let listbox = Model::new("fruit", items, SelectionMode::Multiple);
/// ```
pub use model::{EmptyStateRenderer, FocusCallback, ListEntry, Model};

/// Key binding configuration for listbox interaction.
pub use keys::ListBoxKeyMap;

/// Visual styling configuration for listbox appearance.
pub use style::ListBoxStyles;

/// The selection store and its change-callback type.
pub use selection::{SelectionCallback, SelectionState};

/// Core item and selection types.
pub use types::{DefaultItem, ItemKey, ListBoxItem, Ownership, Selection, SelectionMode};

/// Assistive-metadata snapshots for the container and each option.
pub use aria::{ListBoxAttrs, OptionAttrs};

use crate::key;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

// Help integration
impl<I: ListBoxItem> key::KeyMap for Model<I> {
    fn short_help(&self) -> Vec<&key::Binding> {
        key::KeyMap::short_help(&self.keymap)
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        key::KeyMap::full_help(&self.keymap)
    }
}

// BubbleTeaModel implementation - integrates with bubbletea-rs runtime
impl<I: ListBoxItem + Send + Sync + 'static> BubbleTeaModel for Model<I> {
    /// Initializes an empty single-select listbox with default settings.
    fn init() -> (Self, Option<Cmd>) {
        let model = Self::new("listbox", Vec::new(), SelectionMode::Single);
        (model, None)
    }

    /// Handles keyboard input.
    ///
    /// Navigation keys move the focus cursor over the selectable items
    /// only, wrapping at both ends:
    ///
    /// - **Up/k**: Previous selectable item (wraps to last; with no
    ///   cursor set, moves to the last selectable item)
    /// - **Down/j**: Next selectable item (wraps to first; with no
    ///   cursor set, moves to the first selectable item)
    /// - **Home/g**: First selectable item
    /// - **End/G**: Last selectable item
    /// - **Enter/Space**: Commit a selection at the cursor using the
    ///   same mode-aware logic as a pointer click
    ///
    /// Unmatched keys are ignored so the host application sees them.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if self.keymap.cursor_up.matches(key_msg) {
                self.move_cursor_up();
            } else if self.keymap.cursor_down.matches(key_msg) {
                self.move_cursor_down();
            } else if self.keymap.go_to_start.matches(key_msg) {
                self.move_cursor_to_start();
            } else if self.keymap.go_to_end.matches(key_msg) {
                self.move_cursor_to_end();
            } else if self.keymap.select.matches(key_msg) {
                self.select_focused();
            }
        }
        None
    }

    /// Renders the complete listbox as a formatted string.
    ///
    /// The view stacks three sections: the optional title, the options
    /// (or the empty-state content), and the optional status bar.
    fn view(&self) -> String {
        let mut sections = Vec::new();

        let header = self.view_header();
        if !header.is_empty() {
            sections.push(header);
        }

        let items = self.view_items();
        if !items.is_empty() {
            sections.push(items);
        }

        let footer = self.view_footer();
        if !footer.is_empty() {
            sections.push(footer);
        }

        sections.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn five_languages() -> Vec<DefaultItem> {
        vec![
            DefaultItem::new("1", "JavaScript"),
            DefaultItem::new("2", "TypeScript").with_disabled(true),
            DefaultItem::new("3", "React"),
            DefaultItem::new("4", "Vue"),
            DefaultItem::new("5", "Angular"),
        ]
    }

    fn press(model: &mut Model<DefaultItem>, key: KeyCode) {
        let msg = Box::new(KeyMsg {
            key,
            modifiers: KeyModifiers::NONE,
        }) as Msg;
        model.update(msg);
    }

    #[test]
    fn test_arrow_navigation_skips_disabled_items() {
        let mut listbox = Model::new("langs", five_languages(), SelectionMode::Single);

        press(&mut listbox, KeyCode::Down);
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("1")));

        press(&mut listbox, KeyCode::Down);
        assert_eq!(
            listbox.focused_key(),
            Some(&ItemKey::from("3")),
            "disabled item 2 is skipped"
        );
    }

    #[test]
    fn test_end_then_down_wraps_to_first() {
        let mut listbox = Model::new("langs", five_languages(), SelectionMode::Single);

        press(&mut listbox, KeyCode::End);
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("5")));

        press(&mut listbox, KeyCode::Down);
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("1")));
    }

    #[test]
    fn test_home_then_up_wraps_to_last() {
        let mut listbox = Model::new("langs", five_languages(), SelectionMode::Single);

        press(&mut listbox, KeyCode::Home);
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("1")));

        press(&mut listbox, KeyCode::Up);
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("5")));
    }

    #[test]
    fn test_vim_bindings_move_the_cursor() {
        let mut listbox = Model::new("langs", five_languages(), SelectionMode::Single);
        press(&mut listbox, KeyCode::Char('j'));
        press(&mut listbox, KeyCode::Char('j'));
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("3")));
        press(&mut listbox, KeyCode::Char('k'));
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("1")));
        press(&mut listbox, KeyCode::Char('G'));
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("5")));
        press(&mut listbox, KeyCode::Char('g'));
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("1")));
    }

    #[test]
    fn test_enter_commits_selection_at_cursor() {
        let mut listbox = Model::new("langs", five_languages(), SelectionMode::Single);

        press(&mut listbox, KeyCode::Down);
        press(&mut listbox, KeyCode::Down);
        press(&mut listbox, KeyCode::Enter);

        assert!(listbox.selected_keys().contains(&ItemKey::from("3")));
        assert_eq!(listbox.selected_keys().len(), 1);
    }

    #[test]
    fn test_space_toggles_in_multiple_mode() {
        let mut listbox = Model::new("langs", five_languages(), SelectionMode::Multiple);

        press(&mut listbox, KeyCode::Down);
        press(&mut listbox, KeyCode::Char(' '));
        assert!(listbox.selected_keys().contains(&ItemKey::from("1")));

        press(&mut listbox, KeyCode::Char(' '));
        assert!(listbox.selected_keys().is_empty());
    }

    #[test]
    fn test_enter_without_cursor_does_nothing() {
        let mut listbox = Model::new("langs", five_languages(), SelectionMode::Single);
        press(&mut listbox, KeyCode::Enter);
        assert!(listbox.selected_keys().is_empty());
    }

    #[test]
    fn test_navigation_noop_when_all_items_disabled() {
        let items = vec![
            DefaultItem::new("1", "A").with_disabled(true),
            DefaultItem::new("2", "B").with_disabled(true),
        ];
        let mut listbox = Model::new("off", items, SelectionMode::Single);
        press(&mut listbox, KeyCode::Down);
        press(&mut listbox, KeyCode::Up);
        press(&mut listbox, KeyCode::Home);
        press(&mut listbox, KeyCode::End);
        assert_eq!(listbox.focused_key(), None);
    }

    #[test]
    fn test_unmatched_keys_are_ignored() {
        let mut listbox = Model::new("langs", five_languages(), SelectionMode::Single);
        press(&mut listbox, KeyCode::Char('q'));
        press(&mut listbox, KeyCode::Esc);
        assert_eq!(listbox.focused_key(), None);
        assert!(listbox.selected_keys().is_empty());
    }

    #[test]
    fn test_view_contains_title_items_and_status() {
        let mut listbox = Model::new("langs", five_languages(), SelectionMode::Multiple)
            .with_title("Languages");
        press(&mut listbox, KeyCode::Down);
        press(&mut listbox, KeyCode::Char(' '));

        let view = listbox.view();
        assert!(view.contains("Languages"));
        assert!(view.contains("JavaScript"));
        assert!(view.contains("5 items"));
        assert!(view.contains("1 selected"));
    }

    #[test]
    fn test_keymap_help_is_exposed() {
        use crate::key::KeyMap;
        let listbox = Model::new("langs", five_languages(), SelectionMode::Single);
        assert!(!listbox.short_help().is_empty());
        assert!(!listbox.full_help().is_empty());
    }
}
