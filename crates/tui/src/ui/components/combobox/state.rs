//! State for the combobox/autosuggest widget.
//!
//! A text input paired with a suggestion dropdown that always shows the
//! full static option list. The dropdown is visible exactly while the
//! input holds non-whitespace content. Arrow keys move a highlighted
//! "active" row with wrap-around; Enter or a pointer press commits the
//! active option, emits the selection event, and resets the widget.
//!
//! The active index is `Option<usize>`: `Some(i)` highlights row `i`,
//! `None` is the explicit nothing-highlighted sentinel. It starts at the
//! baseline selected index and reverts to it on every reset.

use autosuggest_types::{ComboboxProps, Effect, OptionRow, OptionSelected, Role, option_row_id};
use crossterm::event::KeyCode;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::debug;

use crate::ui::components::common::TextInputState;

/// State for the combobox/autosuggest widget.
#[derive(Debug, Clone)]
pub(crate) struct ComboboxState {
    /// Option strings, fixed at construction.
    items: Vec<String>,
    /// Baseline selection the active index reverts to on reset.
    selected_index: usize,
    /// Whether the dropdown is rendered and interactable.
    visible: bool,
    /// Keyboard-highlighted row, `None` when nothing is highlighted.
    active_index: Option<usize>,
    /// The text input buffer.
    input: TextInputState,
    /// Focus flag for the widget as a whole.
    focus: FocusFlag,
}

impl ComboboxState {
    pub fn new(items: Vec<String>) -> Self {
        let selected_index = 0;
        Self {
            items,
            selected_index,
            visible: false,
            active_index: Some(selected_index),
            input: TextInputState::new(),
            focus: FocusFlag::named("autosuggest.combobox"),
        }
    }

    // ===== SELECTORS =====

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn is_focused(&self) -> bool {
        self.focus.get()
    }

    pub fn input(&self) -> &TextInputState {
        &self.input
    }

    /// Accessibility view-model for the input wrapper. The active
    /// descendant attribute is present only while the dropdown is visible
    /// and a row is highlighted.
    pub fn props(&self) -> ComboboxProps {
        ComboboxProps {
            role: Role::ComboBox,
            aria_expanded: self.visible,
            aria_haspopup: Role::ListBox,
            active_descendant: match (self.visible, self.active_index) {
                (true, Some(index)) => Some(option_row_id(index)),
                _ => None,
            },
        }
    }

    /// Accessibility view-model for the dropdown rows. Selection and the
    /// active marker both follow the highlighted row.
    pub fn rows(&self) -> Vec<OptionRow> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let mut row = OptionRow::new(index, label.clone());
                row.aria_selected = Some(index) == self.active_index;
                row.active = Some(index) == self.active_index;
                row
            })
            .collect()
    }

    // ===== REDUCERS =====

    /// Insert a character into the input at the cursor.
    pub fn apply_insert_char(&mut self, c: char) {
        self.input.insert_char(c);
    }

    /// Remove the character before the cursor.
    pub fn reduce_backspace(&mut self) {
        self.input.backspace();
    }

    pub fn reduce_move_cursor_left(&mut self) {
        self.input.move_left();
    }

    pub fn reduce_move_cursor_right(&mut self) {
        self.input.move_right();
    }

    /// Re-evaluates dropdown visibility after anything but arrow keys.
    ///
    /// The dropdown is open exactly while the trimmed input is non-empty;
    /// when it closes here the widget resets without emitting an event.
    pub fn apply_text_changed(&mut self) {
        self.visible = !self.input.is_blank();
        if !self.visible {
            self.reset();
        }
    }

    /// Handles Enter and arrow keys. Entirely a no-op while the trimmed
    /// input is empty.
    pub fn key_down(&mut self, key: KeyCode) -> Vec<Effect> {
        if self.input.is_blank() {
            return Vec::new();
        }
        let len = self.items.len();
        if len == 0 {
            return Vec::new();
        }

        match key {
            KeyCode::Enter => return self.commit(self.active_index),
            KeyCode::Up => {
                self.active_index = match self.active_index {
                    None | Some(0) => Some(len - 1),
                    Some(index) => Some(index - 1),
                };
            }
            KeyCode::Down => {
                self.active_index = match self.active_index {
                    None => Some(0),
                    Some(index) if index >= len - 1 => Some(0),
                    Some(index) => Some(index + 1),
                };
            }
            _ => {}
        }
        Vec::new()
    }

    /// Commits the option at `index`: emits the selection event, then
    /// resets. A sentinel or out-of-range index skips the emission but
    /// still resets.
    pub fn commit(&mut self, index: Option<usize>) -> Vec<Effect> {
        let effects = match index.and_then(|i| self.items.get(i)) {
            Some(value) => {
                debug!(value = %value, "combobox commit");
                vec![Effect::EmitSelection(OptionSelected::new(value.clone()))]
            }
            None => Vec::new(),
        };
        self.reset();
        effects
    }

    /// Closes the dropdown, clears the input, and reverts the active index
    /// to the baseline selection.
    pub fn reset(&mut self) {
        self.visible = false;
        self.input.clear();
        self.active_index = Some(self.selected_index);
    }
}

impl HasFocus for ComboboxState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> ComboboxState {
        ComboboxState::new(vec!["A".into(), "B".into(), "C".into()])
    }

    fn type_str(st: &mut ComboboxState, s: &str) {
        for c in s.chars() {
            st.apply_insert_char(c);
            st.apply_text_changed();
        }
    }

    #[test]
    fn typing_opens_dropdown_with_baseline_active() {
        let mut st = abc();
        type_str(&mut st, "a");
        assert!(st.is_visible());
        assert_eq!(st.active_index(), Some(0));
    }

    #[test]
    fn whitespace_only_input_keeps_dropdown_closed() {
        let mut st = abc();
        type_str(&mut st, "  ");
        assert!(!st.is_visible());
    }

    #[test]
    fn keys_are_ignored_while_input_is_blank() {
        let mut st = abc();
        assert!(st.key_down(KeyCode::Down).is_empty());
        assert_eq!(st.active_index(), Some(0));
        assert!(st.key_down(KeyCode::Enter).is_empty());
    }

    #[test]
    fn arrows_cycle_active_index_circularly() {
        let mut st = abc();
        type_str(&mut st, "a");
        st.key_down(KeyCode::Down);
        assert_eq!(st.active_index(), Some(1));
        st.key_down(KeyCode::Down);
        st.key_down(KeyCode::Down);
        assert_eq!(st.active_index(), Some(0));
        st.key_down(KeyCode::Up);
        assert_eq!(st.active_index(), Some(2));
        for _ in 0..3 {
            st.key_down(KeyCode::Up);
        }
        assert_eq!(st.active_index(), Some(2));
    }

    #[test]
    fn enter_commits_active_option_and_resets() {
        let mut st = abc();
        type_str(&mut st, "a");
        st.key_down(KeyCode::Down);
        let effects = st.key_down(KeyCode::Enter);
        assert_eq!(
            effects,
            vec![Effect::EmitSelection(OptionSelected::new("B"))]
        );
        assert!(!st.is_visible());
        assert_eq!(st.active_index(), Some(0));
        assert!(st.input().is_blank());
    }

    #[test]
    fn deleting_all_text_closes_without_event() {
        let mut st = abc();
        type_str(&mut st, "a");
        assert!(st.is_visible());
        st.reduce_backspace();
        st.apply_text_changed();
        assert!(!st.is_visible());
        assert!(st.input().is_blank());
        assert_eq!(st.active_index(), Some(0));
    }

    #[test]
    fn pointer_commit_emits_clicked_row() {
        let mut st = abc();
        type_str(&mut st, "x");
        let effects = st.commit(Some(2));
        assert_eq!(
            effects,
            vec![Effect::EmitSelection(OptionSelected::new("C"))]
        );
        assert!(!st.is_visible());
    }

    #[test]
    fn commit_with_sentinel_resets_without_event() {
        let mut st = abc();
        type_str(&mut st, "x");
        assert!(st.commit(None).is_empty());
        assert!(!st.is_visible());
        assert_eq!(st.active_index(), Some(0));
    }

    #[test]
    fn active_descendant_present_iff_visible_and_highlighted() {
        let mut st = abc();
        assert_eq!(st.props().active_descendant, None);
        type_str(&mut st, "a");
        st.key_down(KeyCode::Down);
        assert_eq!(st.props().active_descendant.as_deref(), Some("item-1"));
        assert!(st.props().aria_expanded);
        st.reset();
        assert_eq!(st.props().active_descendant, None);
        assert!(!st.props().aria_expanded);
    }

    #[test]
    fn rows_mark_the_active_row() {
        let mut st = abc();
        type_str(&mut st, "a");
        st.key_down(KeyCode::Down);
        let rows = st.rows();
        assert!(rows[1].active && rows[1].aria_selected);
        assert!(!rows[0].active && !rows[2].active);
        assert_eq!(rows[2].id, "item-2");
    }
}
