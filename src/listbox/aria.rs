//! Assistive-technology metadata derivation.
//!
//! The listbox exposes the same attribute set an accessible listbox does
//! on the web: a `listbox` role with a multi-selectable flag and an
//! active-descendant reference, and one `option` per item with a stable
//! derived identifier, selected/disabled booleans, and 1-based positional
//! metadata. Hosts embedding the widget in accessibility-aware frontends
//! (or accessibility test suites) read these snapshots instead of
//! re-deriving state from the render output.

use super::types::{ItemKey, ListBoxItem};

/// Role name exposed by the list container.
pub const LISTBOX_ROLE: &str = "listbox";

/// Role name exposed by each item.
pub const OPTION_ROLE: &str = "option";

/// Derives the stable identifier for an option within a list.
///
/// The format is `{list_id}-item-{key}` and is part of the public
/// contract: the list's active-descendant reference points at these ids.
///
/// # Examples
///
/// ```
/// use bubbletea_listbox::listbox::{aria, ItemKey};
///
/// assert_eq!(aria::option_id("langs", &ItemKey::from("rs")), "langs-item-rs");
/// assert_eq!(aria::option_id("langs", &ItemKey::from(3)), "langs-item-3");
/// ```
pub fn option_id(list_id: &str, key: &ItemKey) -> String {
    format!("{}-item-{}", list_id, key)
}

/// Derives an option's accessible name.
///
/// Combines the item's name with its description when both are present;
/// otherwise the name stands alone.
pub fn accessible_label<I: ListBoxItem>(item: &I) -> String {
    match item.description() {
        Some(description) if !description.is_empty() => {
            format!("{} {}", item, description)
        }
        _ => item.to_string(),
    }
}

/// Attribute snapshot for the list container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBoxAttrs {
    /// The list's unique identifier, as supplied at construction.
    pub id: String,
    /// Always [`LISTBOX_ROLE`].
    pub role: &'static str,
    /// True iff the selection mode is multiple.
    pub multiselectable: bool,
    /// Derived id of the focused option; absent when no cursor is set.
    pub active_descendant: Option<String>,
}

/// Attribute snapshot for a single option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionAttrs {
    /// Derived identifier, `{list_id}-item-{key}`.
    pub id: String,
    /// Always [`OPTION_ROLE`].
    pub role: &'static str,
    /// Whether the option is in the current selected set.
    pub selected: bool,
    /// Whether the option is disabled by either source.
    pub disabled: bool,
    /// 1-based position among all rendered options.
    pub posinset: usize,
    /// Total count of rendered options.
    pub setsize: usize,
    /// Accessible name (name plus description when present).
    pub label: String,
}
