//! View rendering functions for the listbox.
//!
//! This module handles the visual composition of the widget:
//! - Header rendering (the optional title)
//! - Option rendering with cursor marker, checkbox, and state styling
//! - Footer rendering (the status bar)

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::model::ListEntry;
use super::style::{CHECKBOX_OFF, CHECKBOX_ON, CURSOR_MARKER};
use super::types::{ListBoxItem, SelectionMode};
use super::Model;

impl<I: ListBoxItem> Model<I> {
    /// Renders the title line, or nothing when no title is set.
    pub(super) fn view_header(&self) -> String {
        if self.title.is_empty() {
            String::new()
        } else {
            self.styles.title.clone().render(&self.title)
        }
    }

    /// Renders the options section.
    ///
    /// Every item renders, disabled ones included, so on-screen positions
    /// match the positional metadata reported for each option. When the
    /// list is empty the caller-supplied empty-state renderer runs
    /// instead, falling back to a plain "No items." line.
    pub(super) fn view_items(&self) -> String {
        if self.is_empty() {
            if let Some(renderer) = self.render_empty_state.as_ref() {
                return renderer();
            }
            return self.styles.no_items.clone().render("No items.");
        }

        self.entries()
            .iter()
            .map(|entry| self.view_entry(entry))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders one option line: cursor marker, checkbox in multiple
    /// mode, then the name styled by state with the disabled style
    /// winning over focus and selection.
    fn view_entry(&self, entry: &ListEntry<'_, I>) -> String {
        let marker = if entry.focused { CURSOR_MARKER } else { " " };
        let mut line = format!("{} ", marker);

        if self.mode() == SelectionMode::Multiple {
            let checkbox = if entry.selected { CHECKBOX_ON } else { CHECKBOX_OFF };
            line.push_str(&self.styles.checkbox.clone().render(checkbox));
            line.push(' ');
        }

        let style = if entry.disabled {
            &self.styles.disabled_item
        } else if entry.focused {
            &self.styles.focused_item
        } else if entry.selected {
            &self.styles.selected_item
        } else {
            &self.styles.normal_item
        };
        line.push_str(&style.clone().render(&self.truncate(&entry.item.to_string())));

        if let Some(description) = entry.item.description() {
            if !description.is_empty() {
                line.push(' ');
                line.push_str(&self.styles.description.clone().render(&description));
            }
        }

        line
    }

    /// Renders the status bar, or nothing when it is hidden.
    pub(super) fn view_footer(&self) -> String {
        if !self.show_status_bar {
            return String::new();
        }
        let noun = if self.len() == 1 { "item" } else { "items" };
        let status = format!(
            "{} {} • {} selected",
            self.len(),
            noun,
            self.selected_keys().len()
        );
        self.styles.status_bar.clone().render(&status)
    }

    /// Truncates text to the configured width in terminal columns,
    /// appending an ellipsis. A width of zero disables truncation.
    fn truncate(&self, text: &str) -> String {
        if self.width == 0 || text.width() <= self.width {
            return text.to_string();
        }
        let mut out = String::new();
        let mut used = 0;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w + 1 > self.width {
                break;
            }
            out.push(ch);
            used += w;
        }
        out.push('…');
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::listbox::{DefaultItem, ItemKey, Model, SelectionMode};

    fn items() -> Vec<DefaultItem> {
        vec![
            DefaultItem::new("1", "JavaScript"),
            DefaultItem::new("2", "TypeScript").with_disabled(true),
            DefaultItem::new("3", "React"),
        ]
    }

    #[test]
    fn test_view_marks_focused_item() {
        let mut listbox = Model::new("langs", items(), SelectionMode::Single).with_status_bar(false);
        listbox.move_cursor_down();
        let view = listbox.view_items();
        let lines: Vec<&str> = view.lines().collect();
        assert!(lines[0].starts_with('❯'));
        assert!(lines[1].starts_with(' '));
        assert!(lines[2].starts_with(' '));
    }

    #[test]
    fn test_view_shows_checkboxes_in_multiple_mode() {
        let mut listbox = Model::new("langs", items(), SelectionMode::Multiple);
        listbox.click(&ItemKey::from("1"));
        let view = listbox.view_items();
        let lines: Vec<&str> = view.lines().collect();
        assert!(lines[0].contains("[x]"));
        assert!(lines[2].contains("[ ]"));
    }

    #[test]
    fn test_view_hides_checkboxes_in_single_mode() {
        let mut listbox = Model::new("langs", items(), SelectionMode::Single);
        listbox.click(&ItemKey::from("1"));
        assert!(!listbox.view_items().contains("[x]"));
    }

    #[test]
    fn test_empty_list_uses_custom_renderer() {
        let listbox = Model::new("langs", Vec::<DefaultItem>::new(), SelectionMode::Single)
            .with_empty_state(|| "Nothing to pick.".to_string());
        assert_eq!(listbox.view_items(), "Nothing to pick.");
    }

    #[test]
    fn test_empty_list_default_message() {
        let listbox = Model::new("langs", Vec::<DefaultItem>::new(), SelectionMode::Single);
        assert!(listbox.view_items().contains("No items."));
    }

    #[test]
    fn test_footer_counts_items_and_selection() {
        let mut listbox = Model::new("langs", items(), SelectionMode::Multiple);
        listbox.click(&ItemKey::from("1"));
        listbox.click(&ItemKey::from("3"));
        let footer = listbox.view_footer();
        assert!(footer.contains("3 items"));
        assert!(footer.contains("2 selected"));
    }

    #[test]
    fn test_footer_hidden_when_disabled() {
        let listbox = Model::new("langs", items(), SelectionMode::Multiple).with_status_bar(false);
        assert_eq!(listbox.view_footer(), "");
    }

    #[test]
    fn test_long_names_truncate_to_width() {
        let long = vec![DefaultItem::new("1", "An unreasonably long option name")];
        let listbox = Model::new("langs", long, SelectionMode::Single)
            .with_width(12)
            .with_status_bar(false);
        let view = listbox.view_items();
        assert!(view.contains('…'));
        assert!(!view.contains("unreasonably long"));
    }
}
