//! Shared type definitions for the autosuggest widgets.
//!
//! This crate holds the types both widgets and their host application agree
//! on: the selection event payload, application messages and side effects,
//! and the accessibility view-models that expose each widget's semantic
//! surface (roles, ids, selection flags) as plain data for rendering and
//! automation.

use serde::{Deserialize, Serialize};

/// Payload of the selection event emitted when the user commits a choice.
///
/// Both widgets emit exactly one of these per commit (Enter key or pointer
/// press on an option row). The host dispatches it synchronously to every
/// registered listener.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSelected {
    /// Display string of the committed option.
    pub value: String,
}

impl OptionSelected {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into() }
    }
}

/// Semantic role of a rendered element, mirroring the WAI-ARIA vocabulary
/// the widgets expose for styling and automation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// The combobox input wrapper.
    ComboBox,
    /// A container of option rows.
    ListBox,
    /// A single selectable option row.
    Option,
}

impl Role {
    /// The attribute value as it would appear in markup.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::ComboBox => "combobox",
            Role::ListBox => "listbox",
            Role::Option => "option",
        }
    }
}

/// Stable per-row element identifier, of the form `item-<index>`.
pub fn option_row_id(index: usize) -> String {
    format!("item-{index}")
}

/// View-model for a single option row.
///
/// A pure function of widget state; rendering and tests read it instead of
/// poking at widget internals. `tab_index` implements the roving-tabindex
/// pattern: row 0 is the single tab stop, every other row is skipped by
/// sequential traversal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRow {
    /// Stable identifier, `item-<index>`.
    pub id: String,
    /// Always [`Role::Option`].
    pub role: Role,
    /// 0 for the first row, -1 for all others.
    pub tab_index: i8,
    /// Whether this row is the widget's current selection.
    pub aria_selected: bool,
    /// Whether this row is the keyboard-highlighted row (combobox only;
    /// always false for the plain option list).
    pub active: bool,
    /// Display text.
    pub label: String,
}

impl OptionRow {
    pub fn new(index: usize, label: impl Into<String>) -> Self {
        Self {
            id: option_row_id(index),
            role: Role::Option,
            tab_index: if index == 0 { 0 } else { -1 },
            aria_selected: false,
            active: false,
            label: label.into(),
        }
    }
}

/// View-model for the combobox input wrapper.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboboxProps {
    /// Always [`Role::ComboBox`].
    pub role: Role,
    /// Bound to dropdown visibility.
    pub aria_expanded: bool,
    /// The popup kind this input controls.
    pub aria_haspopup: Role,
    /// Id of the active row, present only while the dropdown is visible and
    /// a row is highlighted. `None` means the attribute is absent.
    pub active_descendant: Option<String>,
}

/// Messages that drive the application state.
///
/// These are coarse host-level events; per-widget key handling lives in the
/// widget components themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Terminal resized.
    Resize(u16, u16),
    /// Move focus to the next widget.
    FocusNext,
    /// Move focus to the previous widget.
    FocusPrev,
    /// Request application exit.
    Quit,
}

/// Side effects reported by widget event handlers.
///
/// Handlers mutate only their own state and report everything else as an
/// effect for the host to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// A selection was committed; dispatch the event to listeners.
    EmitSelection(OptionSelected),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_ids_are_stable_and_positional() {
        assert_eq!(option_row_id(0), "item-0");
        assert_eq!(option_row_id(12), "item-12");
    }

    #[test]
    fn roving_tabindex_marks_first_row_only() {
        let rows: Vec<OptionRow> = (0..3).map(|i| OptionRow::new(i, format!("opt {i}"))).collect();
        assert_eq!(rows[0].tab_index, 0);
        assert!(rows[1..].iter().all(|r| r.tab_index == -1));
    }

    #[test]
    fn selection_event_serializes_with_value_field() {
        let event = OptionSelected::new("This is the option 2");
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["value"], "This is the option 2");
    }

    #[test]
    fn roles_render_aria_names() {
        assert_eq!(Role::ComboBox.as_str(), "combobox");
        assert_eq!(Role::ListBox.as_str(), "listbox");
        assert_eq!(Role::Option.as_str(), "option");
    }
}
