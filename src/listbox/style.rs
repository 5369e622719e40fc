//! Styling for the listbox component.
//!
//! Every visual state an option can be in (normal, selected, focused,
//! disabled) has its own style, plus styles for the title, description
//! text, the multiple-mode checkbox, the status bar, and the empty-list
//! message. Defaults use adaptive colors that adjust to light and dark
//! terminal themes.
//!
//! # Examples
//!
//! ```
//! use bubbletea_listbox::listbox::ListBoxStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListBoxStyles::default();
//! styles.focused_item = Style::new()
//!     .foreground(Color::from("#FFFFFF"))
//!     .background(Color::from("#0284C7"));
//! ```

use lipgloss_extras::prelude::*;

/// Marker drawn in front of the focused option.
pub const CURSOR_MARKER: &str = "❯";

/// Checkbox glyph for a selected option in multiple mode.
pub const CHECKBOX_ON: &str = "[x]";

/// Checkbox glyph for an unselected option in multiple mode.
pub const CHECKBOX_OFF: &str = "[ ]";

/// Style configuration for all listbox UI elements.
#[derive(Debug, Clone)]
pub struct ListBoxStyles {
    /// Style for the list title.
    pub title: Style,
    /// Style for an option in its normal state.
    pub normal_item: Style,
    /// Style for a selected option.
    pub selected_item: Style,
    /// Style for the option under the focus cursor.
    pub focused_item: Style,
    /// Style for a disabled option.
    pub disabled_item: Style,
    /// Style for option description text.
    pub description: Style,
    /// Style for the multiple-mode checkbox glyphs.
    pub checkbox: Style,
    /// Style for the status bar beneath the items.
    pub status_bar: Style,
    /// Style for the message shown when the list has no items.
    pub no_items: Style,
}

impl Default for ListBoxStyles {
    fn default() -> Self {
        let subdued_color = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            normal_item: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            selected_item: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#0369A1",
                    Dark: "#7DD3FC",
                })
                .bold(true),
            focused_item: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#FFFFFF",
                    Dark: "#FFFFFF",
                })
                .background(AdaptiveColor {
                    Light: "#0284C7",
                    Dark: "#0369A1",
                }),
            disabled_item: Style::new().foreground(AdaptiveColor {
                Light: "#C7C7C7",
                Dark: "#4D4D4D",
            }),
            description: Style::new().foreground(subdued_color.clone()),
            checkbox: Style::new().foreground(AdaptiveColor {
                Light: "#0284C7",
                Dark: "#38BDF8",
            }),
            status_bar: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#A49FA5",
                    Dark: "#777777",
                })
                .padding(1, 0, 0, 2),
            no_items: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
        }
    }
}
