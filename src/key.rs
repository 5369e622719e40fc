//! Type-safe key bindings with attached help metadata.
//!
//! Components describe their keyboard interface as a struct of [`Binding`]s.
//! Each binding carries the key codes it responds to plus the short help
//! text shown by host applications. The [`KeyMap`] trait exposes bindings
//! for compact and expanded help views.
//!
//! # Examples
//!
//! ```
//! use bubbletea_listbox::key::{Binding, KeyMap};
//! use crossterm::event::KeyCode;
//!
//! struct AppKeyMap {
//!     confirm: Binding,
//!     quit: Binding,
//! }
//!
//! impl KeyMap for AppKeyMap {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.confirm, &self.quit]
//!     }
//!
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.confirm], vec![&self.quit]]
//!     }
//! }
//!
//! let keymap = AppKeyMap {
//!     confirm: Binding::new(vec![KeyCode::Enter]).with_help("enter", "confirm"),
//!     quit: Binding::new(vec![KeyCode::Char('q')]).with_help("q", "quit"),
//! };
//! assert_eq!(keymap.short_help().len(), 2);
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// Help text for a single key binding.
///
/// The `key` field is the compact key label (e.g. `"↑/k"`), the `desc`
/// field the action it performs (e.g. `"up"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Compact label for the key(s), e.g. `"enter"` or `"↑/k"`.
    pub key: String,
    /// Short description of the action, e.g. `"select"`.
    pub desc: String,
}

/// A keyboard binding: one action, any number of key codes that trigger it.
///
/// Bindings are matched against incoming [`KeyMsg`] values by key code. A
/// binding with no keys matches nothing, which is how callers disable an
/// action without restructuring their keymap.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Key codes that trigger this binding.
    pub keys: Vec<KeyCode>,
    /// Help metadata displayed by help views.
    pub help: Help,
}

impl Binding {
    /// Creates a binding for the given key codes with empty help text.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: Help::default(),
        }
    }

    /// Attaches help text, builder-style.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_listbox::key::Binding;
    /// use crossterm::event::KeyCode;
    ///
    /// let up = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up");
    /// assert_eq!(up.help.key, "↑/k");
    /// ```
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns true when the key message's code is one of this binding's keys.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.keys.contains(&msg.key)
    }
}

/// Trait implemented by component keymaps to surface help information.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings for the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key_msg(key: KeyCode) -> KeyMsg {
        KeyMsg {
            key,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_binding_matches_any_of_its_keys() {
        let b = Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]);
        assert!(b.matches(&key_msg(KeyCode::Up)));
        assert!(b.matches(&key_msg(KeyCode::Char('k'))));
        assert!(!b.matches(&key_msg(KeyCode::Down)));
    }

    #[test]
    fn test_empty_binding_matches_nothing() {
        let b = Binding::new(vec![]);
        assert!(!b.matches(&key_msg(KeyCode::Enter)));
    }

    #[test]
    fn test_with_help_sets_both_fields() {
        let b = Binding::new(vec![KeyCode::Enter]).with_help("enter", "select");
        assert_eq!(b.help.key, "enter");
        assert_eq!(b.help.desc, "select");
    }
}
