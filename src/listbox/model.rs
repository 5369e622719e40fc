//! Main Model struct and core functionality for the listbox component.
//!
//! This module contains the primary `Model` struct that represents a
//! listbox, along with construction, state accessors, the per-item render
//! contract, pointer-click handling, and focus-cursor movement. Keyboard
//! message handling and view rendering live in the parent module.

use super::aria::{self, ListBoxAttrs, OptionAttrs, LISTBOX_ROLE, OPTION_ROLE};
use super::keys::ListBoxKeyMap;
use super::selection::SelectionState;
use super::style::ListBoxStyles;
use super::types::{ItemKey, ListBoxItem, Ownership, Selection, SelectionMode};
use std::collections::BTreeSet;

/// Callback invoked with the new focus cursor after each focus change.
pub type FocusCallback = Box<dyn FnMut(Option<&ItemKey>) + Send>;

/// Renderer invoked in place of options when the list has no items.
pub type EmptyStateRenderer = Box<dyn Fn() -> String + Send + Sync>;

/// One rendered item with its derived interaction state.
///
/// Positional metadata counts all rendered items, disabled ones included,
/// so positions stay stable as items are enabled and disabled.
#[derive(Debug)]
pub struct ListEntry<'a, I: ListBoxItem> {
    /// The underlying item.
    pub item: &'a I,
    /// Zero-based index in the supplied item order.
    pub index: usize,
    /// The item's key.
    pub key: ItemKey,
    /// Whether the item is in the current selected set.
    pub selected: bool,
    /// Whether the item is disabled by either source.
    pub disabled: bool,
    /// Whether the focus cursor is on this item.
    pub focused: bool,
    /// 1-based position among all rendered items.
    pub posinset: usize,
    /// Total number of rendered items.
    pub setsize: usize,
}

/// An accessible listbox with mode-aware selection and a roving focus
/// cursor.
///
/// The model composes a [`SelectionState`] store with a focus cursor that
/// has the same controlled/uncontrolled duality: supply
/// [`with_focused_key`](Self::with_focused_key) and the host owns the
/// cursor, otherwise the widget tracks it internally. Pointer clicks and
/// keyboard commits flow through the store's mode-aware logic; keyboard
/// navigation moves the cursor over the selectable (non-disabled) items
/// only, wrapping at both ends.
///
/// # Examples
///
/// ```
/// use bubbletea_listbox::listbox::{DefaultItem, ItemKey, Model, SelectionMode};
///
/// let items = vec![
///     DefaultItem::new("1", "JavaScript"),
///     DefaultItem::new("2", "TypeScript").with_disabled(true),
///     DefaultItem::new("3", "React"),
/// ];
/// let mut listbox = Model::new("langs", items, SelectionMode::Multiple);
///
/// listbox.click(&ItemKey::from("1"));
/// listbox.click(&ItemKey::from("2")); // disabled: fully ignored
/// assert_eq!(listbox.selected_keys().len(), 1);
/// ```
pub struct Model<I: ListBoxItem> {
    pub(super) list_id: String,
    pub(super) title: String,
    pub(super) selection: SelectionState<I>,
    pub(super) focused: Option<ItemKey>,
    pub(super) focus_ownership: Ownership,
    pub(super) on_focused_change: Option<FocusCallback>,
    pub(super) follow_keyboard_focus: bool,
    pub(super) keymap: ListBoxKeyMap,
    pub(super) styles: ListBoxStyles,
    pub(super) render_empty_state: Option<EmptyStateRenderer>,
    pub(super) show_status_bar: bool,
    pub(super) width: usize,
}

impl<I: ListBoxItem> Model<I> {
    /// Creates a listbox with the given unique id, items, and selection
    /// mode.
    ///
    /// The id must be unique per rendered list; all option identifiers
    /// and the active-descendant reference are derived from it. Both the
    /// selection and the focus cursor start uncontrolled; use the
    /// builder methods to hand either to the host.
    pub fn new(list_id: &str, items: Vec<I>, mode: SelectionMode) -> Self {
        Self {
            list_id: list_id.to_string(),
            title: String::new(),
            selection: SelectionState::new(items, mode),
            focused: None,
            focus_ownership: Ownership::Uncontrolled,
            on_focused_change: None,
            follow_keyboard_focus: true,
            keymap: ListBoxKeyMap::default(),
            styles: ListBoxStyles::default(),
            render_empty_state: None,
            show_status_bar: true,
            width: 0,
        }
    }

    /// Sets the title shown above the options, builder-style.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Hands selection ownership to the host with the given authoritative
    /// set, builder-style.
    pub fn with_selected_keys(mut self, keys: Selection) -> Self {
        self.selection = self.selection.with_selected_keys(keys);
        self
    }

    /// Seeds the uncontrolled selection, builder-style.
    pub fn with_default_selected(mut self, keys: Selection) -> Self {
        self.selection = self.selection.with_default_selected(keys);
        self
    }

    /// Sets the list-level disabled keys, builder-style.
    pub fn with_disabled_keys(mut self, keys: BTreeSet<ItemKey>) -> Self {
        self.selection = self.selection.with_disabled_keys(keys);
        self
    }

    /// Registers the selection-change callback, builder-style.
    pub fn on_selection_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Selection) + Send + 'static,
    {
        self.selection = self.selection.on_selection_change(callback);
        self
    }

    /// Hands focus-cursor ownership to the host with the given cursor,
    /// builder-style.
    pub fn with_focused_key(mut self, key: Option<ItemKey>) -> Self {
        self.focus_ownership = Ownership::Controlled;
        self.focused = key;
        self
    }

    /// Registers the focus-change callback, builder-style.
    pub fn on_focused_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(Option<&ItemKey>) + Send + 'static,
    {
        self.on_focused_change = Some(Box::new(callback));
        self
    }

    /// Controls whether pointer clicks move the focus cursor to the
    /// clicked item (on by default), builder-style.
    pub fn with_follow_keyboard_focus(mut self, follow: bool) -> Self {
        self.follow_keyboard_focus = follow;
        self
    }

    /// Replaces the key bindings, builder-style.
    pub fn with_keymap(mut self, keymap: ListBoxKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the styles, builder-style.
    pub fn with_styles(mut self, styles: ListBoxStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the content rendered in place of options when the list is
    /// empty, builder-style.
    pub fn with_empty_state<F>(mut self, renderer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        self.render_empty_state = Some(Box::new(renderer));
        self
    }

    /// Shows or hides the status bar, builder-style.
    pub fn with_status_bar(mut self, show: bool) -> Self {
        self.show_status_bar = show;
        self
    }

    /// Sets the render width in terminal columns; zero means unbounded,
    /// builder-style.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Returns the list's unique identifier.
    pub fn list_id(&self) -> &str {
        &self.list_id
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the items, in render order.
    pub fn items(&self) -> &[I] {
        self.selection.items()
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.selection.items().len()
    }

    /// Returns whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// Returns the selection store for direct mutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_listbox::listbox::{DefaultItem, Model, SelectionMode};
    ///
    /// let items = vec![DefaultItem::new("1", "One"), DefaultItem::new("2", "Two")];
    /// let mut listbox = Model::new("nums", items, SelectionMode::Multiple);
    /// listbox.selection_mut().select_all();
    /// assert_eq!(listbox.selected_keys().len(), 2);
    /// ```
    pub fn selection_mut(&mut self) -> &mut SelectionState<I> {
        &mut self.selection
    }

    /// Returns the selection store for inspection.
    pub fn selection(&self) -> &SelectionState<I> {
        &self.selection
    }

    /// Returns the current effective selected-key set.
    pub fn selected_keys(&self) -> &Selection {
        self.selection.selected_keys()
    }

    /// Returns the current focus cursor, if any.
    pub fn focused_key(&self) -> Option<&ItemKey> {
        self.focused.as_ref()
    }

    /// Replaces the items.
    ///
    /// If the focus cursor's key no longer exists among the new items,
    /// the cursor is cleared and a focus-change notification with no key
    /// is emitted.
    pub fn set_items(&mut self, items: Vec<I>) {
        self.selection.set_items(items);
        if let Some(key) = self.focused.clone() {
            if !self.contains_key(&key) {
                self.apply_focus(None);
            }
        }
    }

    /// Updates the mirrored cursor in controlled operation without
    /// invoking the change callback. No-op when uncontrolled.
    pub fn sync_focused_key(&mut self, key: Option<ItemKey>) {
        if self.focus_ownership == Ownership::Controlled {
            self.focused = key;
        }
    }

    /// Handles a pointer click on the item with the given key.
    ///
    /// Clicks on disabled or unknown keys are fully ignored: no selection
    /// change, no focus change, no callbacks. Otherwise the commit is
    /// mode-aware (single replaces the set with the clicked key, multiple
    /// toggles membership, none reports an empty set) and the focus
    /// cursor follows the click unless that was disabled at construction.
    pub fn click(&mut self, key: &ItemKey) {
        if !self.contains_key(key) || self.selection.is_disabled(key) {
            return;
        }
        self.commit(key.clone());
        if self.follow_keyboard_focus {
            self.apply_focus(Some(key.clone()));
        }
    }

    /// Moves the focus cursor to the next selectable item, wrapping from
    /// the last to the first. With no cursor set, moves to the first
    /// selectable item. No-op when nothing is selectable.
    pub fn move_cursor_down(&mut self) {
        let selectable = self.selection.selectable_keys();
        if selectable.is_empty() {
            return;
        }
        let next = match self.cursor_position(&selectable) {
            Some(i) if i + 1 < selectable.len() => i + 1,
            _ => 0,
        };
        self.apply_focus(Some(selectable[next].clone()));
    }

    /// Moves the focus cursor to the previous selectable item, wrapping
    /// from the first to the last. With no cursor set, moves to the last
    /// selectable item. No-op when nothing is selectable.
    pub fn move_cursor_up(&mut self) {
        let selectable = self.selection.selectable_keys();
        if selectable.is_empty() {
            return;
        }
        let next = match self.cursor_position(&selectable) {
            Some(i) if i > 0 => i - 1,
            _ => selectable.len() - 1,
        };
        self.apply_focus(Some(selectable[next].clone()));
    }

    /// Jumps the focus cursor to the first selectable item.
    pub fn move_cursor_to_start(&mut self) {
        let selectable = self.selection.selectable_keys();
        if let Some(first) = selectable.first() {
            self.apply_focus(Some(first.clone()));
        }
    }

    /// Jumps the focus cursor to the last selectable item.
    pub fn move_cursor_to_end(&mut self) {
        let selectable = self.selection.selectable_keys();
        if let Some(last) = selectable.last() {
            self.apply_focus(Some(last.clone()));
        }
    }

    /// Commits a selection at the focus cursor with the same mode-aware
    /// logic as a click. No-op when no cursor is set or the cursor points
    /// at a key that is disabled or gone.
    pub fn select_focused(&mut self) {
        let Some(key) = self.focused.clone() else {
            return;
        };
        if !self.contains_key(&key) || self.selection.is_disabled(&key) {
            return;
        }
        self.commit(key);
    }

    /// Returns one entry per item with its derived interaction state and
    /// positional metadata.
    pub fn entries(&self) -> Vec<ListEntry<'_, I>> {
        let setsize = self.len();
        self.selection
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let key = item.key();
                ListEntry {
                    selected: self.selection.is_selected(&key),
                    disabled: self.selection.is_disabled(&key),
                    focused: self.focused.as_ref() == Some(&key),
                    posinset: index + 1,
                    setsize,
                    item,
                    index,
                    key,
                }
            })
            .collect()
    }

    /// Returns the list container's assistive-metadata snapshot.
    pub fn listbox_attrs(&self) -> ListBoxAttrs {
        ListBoxAttrs {
            id: self.list_id.clone(),
            role: LISTBOX_ROLE,
            multiselectable: self.selection.mode() == SelectionMode::Multiple,
            active_descendant: self
                .focused
                .as_ref()
                .map(|key| aria::option_id(&self.list_id, key)),
        }
    }

    /// Returns the per-option assistive-metadata snapshots, in render
    /// order.
    pub fn option_attrs(&self) -> Vec<OptionAttrs> {
        self.entries()
            .iter()
            .map(|entry| OptionAttrs {
                id: aria::option_id(&self.list_id, &entry.key),
                role: OPTION_ROLE,
                selected: entry.selected,
                disabled: entry.disabled,
                posinset: entry.posinset,
                setsize: entry.setsize,
                label: aria::accessible_label(entry.item),
            })
            .collect()
    }

    fn contains_key(&self, key: &ItemKey) -> bool {
        self.selection.items().iter().any(|item| &item.key() == key)
    }

    fn cursor_position(&self, selectable: &[ItemKey]) -> Option<usize> {
        self.focused
            .as_ref()
            .and_then(|key| selectable.iter().position(|candidate| candidate == key))
    }

    /// Mode-aware selection commit shared by clicks and keyboard commits.
    fn commit(&mut self, key: ItemKey) {
        match self.selection.mode() {
            SelectionMode::Single => self.selection.select_key(key),
            SelectionMode::Multiple => self.selection.toggle_key(key),
            SelectionMode::None => self.selection.deselect_all(),
        }
    }

    /// Commits a cursor value: stores it when this side owns the cursor,
    /// then reports it.
    pub(super) fn apply_focus(&mut self, key: Option<ItemKey>) {
        if self.focus_ownership == Ownership::Uncontrolled {
            self.focused = key.clone();
        }
        if let Some(callback) = self.on_focused_change.as_mut() {
            callback(key.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listbox::DefaultItem;
    use std::sync::{Arc, Mutex};

    fn scenario_items() -> Vec<DefaultItem> {
        vec![
            DefaultItem::new("1", "JavaScript"),
            DefaultItem::new("2", "TypeScript").with_disabled(true),
            DefaultItem::new("3", "React"),
        ]
    }

    fn keys(raw: &[&str]) -> Selection {
        raw.iter().map(|k| ItemKey::from(*k)).collect()
    }

    #[test]
    fn test_click_sequence_multiple_mode() {
        let mut listbox = Model::new("langs", scenario_items(), SelectionMode::Multiple);

        listbox.click(&ItemKey::from("1"));
        assert_eq!(listbox.selected_keys(), &keys(&["1"]));

        listbox.click(&ItemKey::from("2"));
        assert_eq!(listbox.selected_keys(), &keys(&["1"]), "disabled click must not change selection");

        listbox.click(&ItemKey::from("3"));
        assert_eq!(listbox.selected_keys(), &keys(&["1", "3"]));

        listbox.click(&ItemKey::from("1"));
        assert_eq!(listbox.selected_keys(), &keys(&["3"]));
    }

    #[test]
    fn test_click_sequence_single_mode() {
        let mut listbox = Model::new("langs", scenario_items(), SelectionMode::Single);

        listbox.click(&ItemKey::from("1"));
        assert_eq!(listbox.selected_keys(), &keys(&["1"]));

        listbox.click(&ItemKey::from("3"));
        assert_eq!(listbox.selected_keys(), &keys(&["3"]));
    }

    #[test]
    fn test_click_none_mode_reports_empty_set() {
        let seen: Arc<Mutex<Vec<Selection>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut listbox = Model::new("langs", scenario_items(), SelectionMode::None)
            .on_selection_change(move |s| sink.lock().unwrap().push(s.clone()));

        listbox.click(&ItemKey::from("1"));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1, "the empty set is reported, not omitted");
        assert!(seen[0].is_empty());
    }

    #[test]
    fn test_disabled_click_changes_nothing_at_all() {
        let focus_events: Arc<Mutex<Vec<Option<ItemKey>>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&focus_events);
        let mut listbox = Model::new("langs", scenario_items(), SelectionMode::Multiple)
            .on_focused_change(move |k| sink.lock().unwrap().push(k.cloned()));

        listbox.click(&ItemKey::from("2"));

        assert!(listbox.selected_keys().is_empty());
        assert_eq!(listbox.focused_key(), None);
        assert!(focus_events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_click_on_unknown_key_is_ignored() {
        let mut listbox = Model::new("langs", scenario_items(), SelectionMode::Multiple);
        listbox.click(&ItemKey::from("missing"));
        assert!(listbox.selected_keys().is_empty());
        assert_eq!(listbox.focused_key(), None);
    }

    #[test]
    fn test_click_moves_focus_when_following() {
        let mut listbox = Model::new("langs", scenario_items(), SelectionMode::Single);
        listbox.click(&ItemKey::from("3"));
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("3")));
    }

    #[test]
    fn test_click_leaves_focus_when_not_following() {
        let mut listbox = Model::new("langs", scenario_items(), SelectionMode::Single)
            .with_follow_keyboard_focus(false);
        listbox.click(&ItemKey::from("3"));
        assert_eq!(listbox.focused_key(), None);
    }

    #[test]
    fn test_cursor_skips_disabled_and_wraps() {
        let mut listbox = Model::new("langs", scenario_items(), SelectionMode::Multiple);

        listbox.move_cursor_down();
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("1")));

        listbox.move_cursor_down();
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("3")), "disabled item is skipped");

        listbox.move_cursor_down();
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("1")), "wraps to first");
    }

    #[test]
    fn test_cursor_up_wraps_to_last_selectable() {
        let mut listbox = Model::new("langs", scenario_items(), SelectionMode::Multiple);

        listbox.move_cursor_up();
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("3")), "unset cursor goes to last");

        listbox.move_cursor_up();
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("1")));

        listbox.move_cursor_up();
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("3")), "wraps to last");
    }

    #[test]
    fn test_cursor_home_and_end() {
        let mut listbox = Model::new("langs", scenario_items(), SelectionMode::Multiple);
        listbox.move_cursor_to_end();
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("3")));
        listbox.move_cursor_to_start();
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("1")));
    }

    #[test]
    fn test_cursor_noop_when_nothing_selectable() {
        let items = vec![
            DefaultItem::new("1", "A").with_disabled(true),
            DefaultItem::new("2", "B").with_disabled(true),
        ];
        let mut listbox = Model::new("all-off", items, SelectionMode::Multiple);
        listbox.move_cursor_down();
        listbox.move_cursor_up();
        listbox.move_cursor_to_start();
        listbox.move_cursor_to_end();
        assert_eq!(listbox.focused_key(), None);
    }

    #[test]
    fn test_select_focused_commits_like_a_click() {
        let mut listbox = Model::new("langs", scenario_items(), SelectionMode::Multiple);
        listbox.move_cursor_down();
        listbox.select_focused();
        assert_eq!(listbox.selected_keys(), &keys(&["1"]));
        listbox.select_focused();
        assert!(listbox.selected_keys().is_empty(), "second commit toggles off");
    }

    #[test]
    fn test_select_focused_noop_without_cursor() {
        let mut listbox = Model::new("langs", scenario_items(), SelectionMode::Multiple);
        listbox.select_focused();
        assert!(listbox.selected_keys().is_empty());
    }

    #[test]
    fn test_entries_carry_positional_metadata() {
        let listbox = Model::new("langs", scenario_items(), SelectionMode::Multiple)
            .with_default_selected(keys(&["3"]));
        let entries = listbox.entries();
        assert_eq!(entries.len(), 3);
        for (j, entry) in entries.iter().enumerate() {
            assert_eq!(entry.posinset, j + 1);
            assert_eq!(entry.setsize, 3);
        }
        assert!(entries[1].disabled);
        assert!(entries[2].selected);
        assert!(!entries[0].selected);
    }

    #[test]
    fn test_set_items_clears_vanished_cursor_and_notifies() {
        let focus_events: Arc<Mutex<Vec<Option<ItemKey>>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&focus_events);
        let mut listbox = Model::new("langs", scenario_items(), SelectionMode::Multiple)
            .on_focused_change(move |k| sink.lock().unwrap().push(k.cloned()));

        listbox.move_cursor_down();
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("1")));

        listbox.set_items(vec![DefaultItem::new("3", "React")]);
        assert_eq!(listbox.focused_key(), None);
        assert_eq!(
            focus_events.lock().unwrap().last(),
            Some(&None),
            "cursor-cleared notification emitted"
        );
    }

    #[test]
    fn test_set_items_keeps_surviving_cursor() {
        let mut listbox = Model::new("langs", scenario_items(), SelectionMode::Multiple);
        listbox.move_cursor_down();
        listbox.set_items(vec![
            DefaultItem::new("1", "JavaScript"),
            DefaultItem::new("4", "Svelte"),
        ]);
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("1")));
    }

    #[test]
    fn test_controlled_focus_proposes_without_writing() {
        let focus_events: Arc<Mutex<Vec<Option<ItemKey>>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&focus_events);
        let mut listbox = Model::new("langs", scenario_items(), SelectionMode::Multiple)
            .with_focused_key(Some(ItemKey::from("1")))
            .on_focused_change(move |k| sink.lock().unwrap().push(k.cloned()));

        listbox.move_cursor_down();

        // Proposal observed, local mirror untouched until the host syncs.
        assert_eq!(
            focus_events.lock().unwrap().as_slice(),
            &[Some(ItemKey::from("3"))]
        );
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("1")));

        listbox.sync_focused_key(Some(ItemKey::from("3")));
        assert_eq!(listbox.focused_key(), Some(&ItemKey::from("3")));
    }

    #[test]
    fn test_listbox_attrs_derivation() {
        let mut listbox = Model::new("test-list", scenario_items(), SelectionMode::Multiple);
        let attrs = listbox.listbox_attrs();
        assert_eq!(attrs.id, "test-list");
        assert_eq!(attrs.role, "listbox");
        assert!(attrs.multiselectable);
        assert_eq!(attrs.active_descendant, None);

        listbox.move_cursor_down();
        let attrs = listbox.listbox_attrs();
        assert_eq!(attrs.active_descendant, Some("test-list-item-1".to_string()));
    }

    #[test]
    fn test_listbox_attrs_not_multiselectable_in_single_mode() {
        let listbox = Model::new("test-list", scenario_items(), SelectionMode::Single);
        assert!(!listbox.listbox_attrs().multiselectable);
    }

    #[test]
    fn test_option_attrs_derivation() {
        let listbox = Model::new("test-list", scenario_items(), SelectionMode::Multiple)
            .with_default_selected(keys(&["1"]));
        let attrs = listbox.option_attrs();
        assert_eq!(attrs.len(), 3);
        assert_eq!(attrs[0].id, "test-list-item-1");
        assert_eq!(attrs[0].role, "option");
        assert!(attrs[0].selected);
        assert!(!attrs[0].disabled);
        assert!(attrs[1].disabled);
        assert_eq!(attrs[2].posinset, 3);
        assert_eq!(attrs[2].setsize, 3);
    }
}
