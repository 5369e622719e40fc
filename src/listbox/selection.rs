//! Selection state management for the listbox.
//!
//! [`SelectionState`] owns the canonical selected-key set and provides
//! mode-aware mutation primitives. It supports controlled operation (the
//! host supplies the authoritative set and receives proposals through a
//! callback) and uncontrolled operation (the state lives here), resolved
//! once at construction.
//!
//! The store's mutation primitives operate purely on keys. Disabled state
//! is advisory for renderers and interaction handlers; pointer and
//! keyboard gating happens at the [`Model`](super::Model) layer, not here.
//! The one exception is [`SelectionState::select_all`], which skips keys
//! that are disabled at the time of the call.

use super::types::{ItemKey, ListBoxItem, Ownership, Selection, SelectionMode};
use std::collections::BTreeSet;

/// Callback invoked with the complete new selection after each mutation.
pub type SelectionCallback = Box<dyn FnMut(&Selection) + Send>;

/// Mode-aware selection store with controlled/uncontrolled duality.
///
/// Every mutation computes the complete next set and reports it through
/// the change callback exactly once, synchronously. Mutations never
/// panic; operations that are invalid for the current mode (such as
/// [`select_all`](Self::select_all) outside multiple mode) degrade to
/// silent no-ops.
///
/// # Examples
///
/// ```
/// use bubbletea_listbox::listbox::{DefaultItem, ItemKey, SelectionMode, SelectionState};
///
/// let items = vec![
///     DefaultItem::new("1", "JavaScript"),
///     DefaultItem::new("2", "TypeScript"),
/// ];
/// let mut state = SelectionState::new(items, SelectionMode::Multiple);
///
/// state.toggle_key(ItemKey::from("1"));
/// assert!(state.is_selected(&ItemKey::from("1")));
///
/// state.toggle_key(ItemKey::from("1"));
/// assert!(state.selected_keys().is_empty());
/// ```
pub struct SelectionState<I: ListBoxItem> {
    items: Vec<I>,
    mode: SelectionMode,
    ownership: Ownership,
    selected: Selection,
    disabled_keys: BTreeSet<ItemKey>,
    /// List-level disabled keys unioned with item-level flags, rebuilt
    /// whenever either source changes.
    effective_disabled: BTreeSet<ItemKey>,
    on_selection_change: Option<SelectionCallback>,
}

impl<I: ListBoxItem> SelectionState<I> {
    /// Creates an uncontrolled store with an empty selection.
    pub fn new(items: Vec<I>, mode: SelectionMode) -> Self {
        let mut state = Self {
            items,
            mode,
            ownership: Ownership::Uncontrolled,
            selected: Selection::new(),
            disabled_keys: BTreeSet::new(),
            effective_disabled: BTreeSet::new(),
            on_selection_change: None,
        };
        state.rebuild_disabled();
        state
    }

    /// Seeds the selection for uncontrolled operation, builder-style.
    ///
    /// Ignored when the store was made controlled with
    /// [`with_selected_keys`](Self::with_selected_keys); the host's set
    /// wins.
    pub fn with_default_selected(mut self, keys: Selection) -> Self {
        if self.ownership == Ownership::Uncontrolled {
            self.selected = keys;
        }
        self
    }

    /// Switches the store to controlled operation with the given
    /// authoritative set, builder-style.
    ///
    /// Supplying a set here (even an empty one) means the host owns the
    /// selection: mutations compute the proposed set and forward it to the
    /// change callback without altering local state. The host pushes the
    /// accepted value back with [`sync_selected_keys`](Self::sync_selected_keys).
    pub fn with_selected_keys(mut self, keys: Selection) -> Self {
        self.ownership = Ownership::Controlled;
        self.selected = keys;
        self
    }

    /// Sets the list-level disabled keys, builder-style.
    pub fn with_disabled_keys(mut self, keys: BTreeSet<ItemKey>) -> Self {
        self.disabled_keys = keys;
        self.rebuild_disabled();
        self
    }

    /// Registers the selection-change callback, builder-style.
    pub fn on_selection_change<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&Selection) + Send + 'static,
    {
        self.on_selection_change = Some(Box::new(callback));
        self
    }

    /// Replaces the items backing this store.
    ///
    /// The selection is left untouched even if it now references missing
    /// keys; callers reconcile. The disabled set is rebuilt from the new
    /// items' flags.
    pub fn set_items(&mut self, items: Vec<I>) {
        self.items = items;
        self.rebuild_disabled();
    }

    /// Changes the selection mode.
    ///
    /// An existing selection is never migrated or pruned to fit the new
    /// mode; callers reconcile.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    /// Updates the mirrored set in controlled operation without invoking
    /// the change callback.
    ///
    /// No-op when uncontrolled; local state is authoritative there.
    pub fn sync_selected_keys(&mut self, keys: Selection) {
        if self.ownership == Ownership::Controlled {
            self.selected = keys;
        }
    }

    /// Returns the items backing this store, in render order.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Returns the current selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Returns who owns the selected set.
    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Returns the current effective selected-key set.
    pub fn selected_keys(&self) -> &Selection {
        &self.selected
    }

    /// Returns the keys of the selectable (non-disabled) items, in their
    /// original relative order.
    pub fn selectable_keys(&self) -> Vec<ItemKey> {
        self.items
            .iter()
            .map(ListBoxItem::key)
            .filter(|key| !self.is_disabled(key))
            .collect()
    }

    /// Returns true when the key is in the current selected set.
    pub fn is_selected(&self, key: &ItemKey) -> bool {
        self.selected.contains(key)
    }

    /// Returns true when the key is disabled by either source: the
    /// list-level disabled set or the item's own flag.
    pub fn is_disabled(&self, key: &ItemKey) -> bool {
        self.effective_disabled.contains(key)
    }

    /// Toggles a key's membership in the selection.
    ///
    /// In single mode, toggling a key on first clears the set, so the
    /// result holds at most the newly toggled key; toggling off the sole
    /// selected key yields the empty set. Other modes toggle membership
    /// directly.
    pub fn toggle_key(&mut self, key: ItemKey) {
        let mut next = self.selected.clone();
        if !next.remove(&key) {
            if self.mode == SelectionMode::Single {
                next.clear();
            }
            next.insert(key);
        }
        self.apply(next);
    }

    /// Replaces the entire selection with the single given key,
    /// regardless of mode.
    pub fn select_key(&mut self, key: ItemKey) {
        let mut next = Selection::new();
        next.insert(key);
        self.apply(next);
    }

    /// Removes a key from the selection if present.
    ///
    /// Idempotent with respect to the resulting set.
    pub fn deselect_key(&mut self, key: &ItemKey) {
        let mut next = self.selected.clone();
        next.remove(key);
        self.apply(next);
    }

    /// Selects every selectable item.
    ///
    /// Only effective in multiple mode; in single and none modes this is a
    /// no-op and the change callback is not invoked. Keys that are
    /// disabled at the time of the call are excluded from the resulting
    /// set.
    pub fn select_all(&mut self) {
        if self.mode != SelectionMode::Multiple {
            return;
        }
        let next: Selection = self.selectable_keys().into_iter().collect();
        self.apply(next);
    }

    /// Clears the selection unconditionally, regardless of mode.
    pub fn deselect_all(&mut self) {
        self.apply(Selection::new());
    }

    /// Bulk-replaces the selection with the given set.
    ///
    /// Used for externally driven selection, e.g. restoring a persisted
    /// choice.
    pub fn set_selected_keys(&mut self, keys: Selection) {
        self.apply(keys);
    }

    /// Commits a computed set: stores it when this side owns the state,
    /// then reports it. The callback fires once per mutation even when
    /// the set is unchanged, so hosts observe commits in none mode too.
    fn apply(&mut self, keys: Selection) {
        if self.ownership == Ownership::Uncontrolled {
            self.selected = keys.clone();
        }
        if let Some(callback) = self.on_selection_change.as_mut() {
            callback(&keys);
        }
    }

    fn rebuild_disabled(&mut self) {
        self.effective_disabled = self.disabled_keys.clone();
        for item in &self.items {
            if item.disabled() {
                self.effective_disabled.insert(item.key());
            }
        }
    }
}
