#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-listbox/")]

//! # bubbletea-listbox
//!
//! An accessible listbox widget for [bubbletea-rs](https://github.com/joshka/bubbletea-rs),
//! providing mode-aware selection state and keyboard navigation for
//! terminal applications.
//!
//! ## Overview
//!
//! bubbletea-listbox separates a listbox into two composable layers. The
//! selection store ([`SelectionState`]) owns the items, the selection
//! mode, the selected-key set, and the disabled predicate; it can be
//! embedded anywhere selection semantics are needed. The widget model
//! ([`ListBox`]) wraps a store and adds the interaction surface: a roving
//! focus cursor over the selectable items, pointer-click handling,
//! rendering, and derived assistive-technology metadata. The widget
//! follows the Elm Architecture pattern with `init()`, `update()`, and
//! `view()` methods.
//!
//! ## Features
//!
//! - **Three selection modes**: single (replace), multiple (toggle), and
//!   none (always-empty)
//! - **Controlled and uncontrolled operation** for both the selection and
//!   the focus cursor, resolved once at construction
//! - **Complete-set change callbacks**: observers always receive the full
//!   selected set, never deltas
//! - **Wraparound keyboard navigation** that skips disabled items
//! - **Accessibility metadata**: stable option identifiers,
//!   active-descendant tracking, and positional info per option
//! - **Theming support** through customizable adaptive styles
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_listbox::prelude::*;
//!
//! let items = vec![
//!     DefaultItem::new("1", "JavaScript"),
//!     DefaultItem::new("2", "TypeScript").with_disabled(true),
//!     DefaultItem::new("3", "React"),
//! ];
//!
//! let mut listbox = ListBox::new("langs", items, SelectionMode::Multiple)
//!     .with_title("Languages")
//!     .on_selection_change(|selected| {
//!         // receives the complete selected set after every commit
//!         let _ = selected.len();
//!     });
//!
//! listbox.click(&ItemKey::from("1"));
//! assert!(listbox.selected_keys().contains(&ItemKey::from("1")));
//! ```
//!
//! ## Controlled Selection
//!
//! Supplying the selected set at construction hands ownership to the
//! host. The widget then never writes its own selection; every commit is
//! delivered as a proposal through the change callback, and the host
//! feeds the authoritative set back:
//!
//! ```rust
//! use bubbletea_listbox::prelude::*;
//! use std::collections::BTreeSet;
//!
//! let items = vec![DefaultItem::new("1", "One"), DefaultItem::new("2", "Two")];
//! let mut listbox = ListBox::new("nums", items, SelectionMode::Multiple)
//!     .with_selected_keys(BTreeSet::new())
//!     .on_selection_change(|proposed| {
//!         // persist `proposed` wherever the host keeps it...
//!         let _ = proposed;
//!     });
//!
//! listbox.click(&ItemKey::from("1"));
//! // ...then mirror it back:
//! let authoritative: Selection = [ItemKey::from("1")].into_iter().collect();
//! listbox.selection_mut().sync_selected_keys(authoritative);
//! ```
//!
//! ## Key Bindings
//!
//! Navigation uses the type-safe binding system from the `key` module:
//!
//! ```rust
//! use bubbletea_listbox::key::{Binding, KeyMap};
//! use crossterm::event::KeyCode;
//!
//! let confirm = Binding::new(vec![KeyCode::Enter])
//!     .with_help("enter", "Confirm selection");
//!
//! struct MyKeyMap {
//!     confirm: Binding,
//! }
//!
//! impl KeyMap for MyKeyMap {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.confirm]
//!     }
//!
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.confirm]]
//!     }
//! }
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! The model plugs straight into a bubbletea-rs application:
//!
//! ```rust
//! use bubbletea_listbox::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     listbox: ListBox<DefaultItem>,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let items = vec![
//!             DefaultItem::new("1", "Apple"),
//!             DefaultItem::new("2", "Banana"),
//!         ];
//!         let listbox = ListBox::new("fruit", items, SelectionMode::Single);
//!         (Self { listbox }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.listbox.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.listbox.view()
//!     }
//! }
//! ```

pub mod key;
pub mod listbox;

pub use key::{Binding, Help as KeyHelp, KeyMap};
pub use listbox::Model as ListBox;
pub use listbox::{
    DefaultItem, ItemKey, ListBoxAttrs, ListBoxItem, ListBoxKeyMap, ListBoxStyles, ListEntry,
    OptionAttrs, Ownership, Selection, SelectionMode, SelectionState,
};

/// Prelude module for convenient imports.
///
/// Re-exports the most commonly used types so applications can pull in
/// everything with a single `use` statement:
///
/// ```rust
/// use bubbletea_listbox::prelude::*;
///
/// let items = vec![DefaultItem::new("1", "One")];
/// let listbox = ListBox::new("nums", items, SelectionMode::Single);
/// ```
pub mod prelude {
    pub use crate::key::{Binding, KeyMap};
    pub use crate::listbox::Model as ListBox;
    pub use crate::listbox::{
        DefaultItem, ItemKey, ListBoxAttrs, ListBoxItem, ListBoxKeyMap, ListBoxStyles,
        OptionAttrs, Selection, SelectionMode, SelectionState,
    };
}
