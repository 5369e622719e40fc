//! Core types and traits for the listbox component.
//!
//! This module contains the fundamental vocabulary of the widget:
//! - [`ItemKey`]: string-or-integer item identity
//! - [`SelectionMode`]: how many items may be selected at once
//! - [`Ownership`]: controlled vs. uncontrolled state authority
//! - [`ListBoxItem`] trait for displayable, selectable items
//! - [`DefaultItem`]: a ready-made item implementation

use std::collections::BTreeSet;
use std::fmt::Display;

/// Unique identifier for a list item within one listbox instance.
///
/// Keys are either text or numbers, mirroring the two identifier shapes
/// host applications typically already have (slugs vs. database ids). A
/// key's `Display` form is what option identifiers are derived from, so
/// `ItemKey::from(1)` and `ItemKey::from("1")` produce the same derived
/// identifier even though they compare unequal as keys.
///
/// # Examples
///
/// ```
/// use bubbletea_listbox::listbox::ItemKey;
///
/// let a = ItemKey::from("inbox");
/// let b = ItemKey::from(42);
/// assert_eq!(a.to_string(), "inbox");
/// assert_eq!(b.to_string(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ItemKey {
    /// Textual key.
    Text(String),
    /// Numeric key.
    Number(i64),
}

impl Display for ItemKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(s) => write!(f, "{}", s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for ItemKey {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ItemKey {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<i64> for ItemKey {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for ItemKey {
    fn from(n: i32) -> Self {
        Self::Number(n as i64)
    }
}

/// The set of currently selected item keys.
///
/// Selections are always communicated as complete sets, never as deltas.
/// A `BTreeSet` keeps iteration order deterministic, which matters for
/// derived output and for tests.
pub type Selection = BTreeSet<ItemKey>;

/// Policy governing how many items may be simultaneously selected.
///
/// The mode is fixed per listbox instance for the duration of a render
/// cycle. Changing it later is valid but never migrates an existing
/// selection; callers reconcile themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one item selected; committing a new item replaces the set.
    #[default]
    Single,
    /// Any number of items selected; committing toggles membership.
    Multiple,
    /// Nothing is ever selected; commits report an empty set.
    None,
}

/// Who owns a piece of widget state: the host application or the widget.
///
/// Resolved exactly once at construction, based on whether the host
/// supplied the state up front. In `Controlled` mode the widget never
/// writes the state itself; every mutation computes the would-be value and
/// proposes it through the corresponding change callback, and the host
/// feeds the authoritative value back in. In `Uncontrolled` mode the
/// widget persists the state internally and the callback is purely
/// observational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// The host owns the state; the widget only proposes changes.
    Controlled,
    /// The widget owns the state internally.
    Uncontrolled,
}

/// Trait for items that can be displayed and selected in a listbox.
///
/// The `Display` implementation provides the item's name; `key` provides
/// its identity within the list. Items may additionally carry a
/// description and an item-level disabled flag.
///
/// # Examples
///
/// ```
/// use bubbletea_listbox::listbox::{ItemKey, ListBoxItem};
/// use std::fmt::Display;
///
/// #[derive(Clone)]
/// struct Language {
///     id: i64,
///     name: String,
/// }
///
/// impl Display for Language {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.name)
///     }
/// }
///
/// impl ListBoxItem for Language {
///     fn key(&self) -> ItemKey {
///         ItemKey::from(self.id)
///     }
/// }
/// ```
pub trait ListBoxItem: Display + Clone {
    /// Returns the item's key, unique within its list.
    fn key(&self) -> ItemKey;

    /// Returns the item's secondary text, if any.
    fn description(&self) -> Option<String> {
        None
    }

    /// Returns true when the item itself is marked disabled.
    ///
    /// This is one of two disabled sources; the listbox unions it with its
    /// list-level disabled-key set.
    fn disabled(&self) -> bool {
        false
    }
}

/// Simple item with a key, a name, an optional description, and a
/// disabled flag.
///
/// # Examples
///
/// ```
/// use bubbletea_listbox::listbox::DefaultItem;
///
/// let item = DefaultItem::new("rs", "Rust").with_description("Systems language");
/// assert_eq!(item.to_string(), "Rust");
/// ```
#[derive(Debug, Clone)]
pub struct DefaultItem {
    /// The item's key.
    pub id: ItemKey,
    /// Main item text.
    pub name: String,
    /// Secondary item text.
    pub description: Option<String>,
    /// Item-level disabled flag.
    pub is_disabled: bool,
}

impl DefaultItem {
    /// Creates a new item with the given key and name.
    pub fn new(id: impl Into<ItemKey>, name: &str) -> Self {
        Self {
            id: id.into(),
            name: name.to_string(),
            description: None,
            is_disabled: false,
        }
    }

    /// Adds a description, builder-style.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Marks the item disabled, builder-style.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }
}

impl Display for DefaultItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl ListBoxItem for DefaultItem {
    fn key(&self) -> ItemKey {
        self.id.clone()
    }

    fn description(&self) -> Option<String> {
        self.description.clone()
    }

    fn disabled(&self) -> bool {
        self.is_disabled
    }
}
