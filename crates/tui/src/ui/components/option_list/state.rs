//! State for the focus-navigable option list.
//!
//! The widget renders a fixed list of option strings as a single-tab-stop
//! listbox (roving tabindex: row 0 carries tabindex 0, every other row -1).
//! Arrow keys move a live selection index with wrap-around; Enter or a
//! pointer press commits the focused option and emits a selection event.
//!
//! Row-level focus is tracked as the element id (`item-<index>`) currently
//! holding input focus, or `None` when focus sits outside the row set.
//! Arrow-key bounds checks parse the LAST character of that id as a decimal
//! digit; a missing or unparsable id makes the in-bounds branch false, so
//! every arrow press wraps until a row has held focus. That quirk is
//! long-standing observable behavior and is kept as is.

use autosuggest_types::{Effect, OptionRow, OptionSelected, option_row_id};
use crossterm::event::KeyCode;
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::debug;

/// State for the navigable option list widget.
#[derive(Debug, Clone)]
pub(crate) struct OptionListState {
    /// Option strings, fixed at construction.
    items: Vec<String>,
    /// Index of the live selection, moved by arrow keys.
    selected_index: usize,
    /// Element id of the row currently holding input focus, if any.
    focused_element_id: Option<String>,
    /// Focus flag for the widget as a whole.
    focus: FocusFlag,
}

impl OptionListState {
    pub fn new(items: Vec<String>) -> Self {
        Self {
            items,
            selected_index: 0,
            focused_element_id: None,
            focus: FocusFlag::named("autosuggest.option_list"),
        }
    }

    // ===== SELECTORS =====

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn is_focused(&self) -> bool {
        self.focus.get()
    }

    /// Element id of the row holding input focus, if any.
    pub fn focused_element_id(&self) -> Option<&str> {
        self.focused_element_id.as_deref()
    }

    /// Accessibility view-model for every row.
    pub fn rows(&self) -> Vec<OptionRow> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, label)| {
                let mut row = OptionRow::new(index, label.clone());
                row.aria_selected = index == self.selected_index;
                row
            })
            .collect()
    }

    /// Index of the focused row, parsed from the full id suffix. `None`
    /// when focus is outside the row set.
    fn focused_row_index(&self) -> Option<usize> {
        self.focused_element_id
            .as_deref()
            .and_then(|id| id.strip_prefix("item-"))
            .and_then(|suffix| suffix.parse().ok())
            .filter(|&index| index < self.items.len())
    }

    /// The digit used by the arrow-key bounds comparison: the LAST character
    /// of the focused element id parsed base 10.
    fn focused_digit(&self) -> Option<u32> {
        self.focused_element_id
            .as_deref()
            .and_then(|id| id.chars().last())
            .and_then(|c| c.to_digit(10))
    }

    // ===== REDUCERS =====

    /// Gives input focus to the row at `index`. Best effort: out-of-range
    /// indices leave focus unchanged.
    pub fn focus_row(&mut self, index: usize) {
        if index < self.items.len() {
            self.focused_element_id = Some(option_row_id(index));
        }
    }

    /// Gives input focus to the widget's single tab stop (row 0).
    pub fn focus_tab_stop(&mut self) {
        self.focus_row(0);
    }

    /// Drops row-level focus, e.g. when the widget loses focus.
    pub fn clear_row_focus(&mut self) {
        self.focused_element_id = None;
    }

    /// Commits the option at `index` with no internal state change.
    ///
    /// Emits exactly one selection event; an absent row degrades to a
    /// silent no-op.
    pub fn select(&self, index: usize) -> Vec<Effect> {
        match self.items.get(index) {
            Some(value) => {
                debug!(index, value = %value, "option list commit");
                vec![Effect::EmitSelection(OptionSelected::new(value.clone()))]
            }
            None => Vec::new(),
        }
    }

    /// Handles a key press targeting the focused row.
    ///
    /// Enter commits the focused row and returns before any index
    /// mutation. ArrowDown/ArrowUp step the selection with wrap-around,
    /// gated on the focused-digit comparison described in the module docs,
    /// then move input focus onto the newly selected row.
    pub fn key_navigate(&mut self, key: KeyCode) -> Vec<Effect> {
        let len = self.items.len();
        if len == 0 {
            return Vec::new();
        }

        if key == KeyCode::Enter {
            return match self.focused_row_index() {
                Some(index) => self.select(index),
                None => Vec::new(),
            };
        }

        let in_row_set = self.focused_digit().is_some_and(|d| d as usize <= len);
        match key {
            KeyCode::Down => {
                if in_row_set && self.selected_index < len - 1 {
                    self.selected_index += 1;
                } else {
                    self.selected_index = 0;
                }
            }
            KeyCode::Up => {
                if in_row_set && self.selected_index > 0 {
                    self.selected_index -= 1;
                } else {
                    self.selected_index = len - 1;
                }
            }
            _ => return Vec::new(),
        }

        self.focus_row(self.selected_index);
        Vec::new()
    }
}

impl HasFocus for OptionListState {
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
    use autosuggest_types::Role;

    fn abc() -> OptionListState {
        OptionListState::new(vec!["A".into(), "B".into(), "C".into()])
    }

    #[test]
    fn arrow_down_steps_and_wraps() {
        let mut st = abc();
        st.focus_tab_stop();
        st.key_navigate(KeyCode::Down);
        st.key_navigate(KeyCode::Down);
        assert_eq!(st.selected_index(), 2);
        st.key_navigate(KeyCode::Down);
        assert_eq!(st.selected_index(), 0);
    }

    #[test]
    fn arrow_up_wraps_to_last() {
        let mut st = abc();
        st.focus_tab_stop();
        st.key_navigate(KeyCode::Up);
        assert_eq!(st.selected_index(), 2);
        st.key_navigate(KeyCode::Up);
        assert_eq!(st.selected_index(), 1);
    }

    #[test]
    fn n_downs_return_to_start_for_any_origin() {
        for start in 0..5usize {
            let mut st = OptionListState::new((0..5).map(|i| format!("opt {i}")).collect());
            st.focus_row(start);
            // Walk the selection to the chosen origin first.
            while st.selected_index() != start {
                st.key_navigate(KeyCode::Down);
            }
            for _ in 0..5 {
                st.key_navigate(KeyCode::Down);
            }
            assert_eq!(st.selected_index(), start);
        }
    }

    #[test]
    fn n_ups_return_to_start() {
        let mut st = abc();
        st.focus_tab_stop();
        st.key_navigate(KeyCode::Down); // selection 1
        for _ in 0..3 {
            st.key_navigate(KeyCode::Up);
        }
        assert_eq!(st.selected_index(), 1);
    }

    #[test]
    fn arrows_always_wrap_without_row_focus() {
        // No row has ever held focus: the in-bounds branch is skipped and
        // every press lands on the wrap target.
        let mut st = abc();
        assert!(st.focused_element_id().is_none());
        st.key_navigate(KeyCode::Down);
        assert_eq!(st.selected_index(), 0);

        let mut st = abc();
        st.key_navigate(KeyCode::Up);
        assert_eq!(st.selected_index(), 2);
    }

    #[test]
    fn navigation_moves_focus_onto_selected_row() {
        let mut st = abc();
        st.focus_tab_stop();
        st.key_navigate(KeyCode::Down);
        assert_eq!(st.focused_element_id(), Some("item-1"));
    }

    #[test]
    fn enter_commits_focused_row_without_moving_selection() {
        let mut st = abc();
        st.focus_tab_stop();
        st.key_navigate(KeyCode::Down); // focus + selection on row 1
        let effects = st.key_navigate(KeyCode::Enter);
        assert_eq!(
            effects,
            vec![Effect::EmitSelection(OptionSelected::new("B"))]
        );
        assert_eq!(st.selected_index(), 1);
    }

    #[test]
    fn enter_without_row_focus_is_a_no_op() {
        let mut st = abc();
        assert!(st.key_navigate(KeyCode::Enter).is_empty());
    }

    #[test]
    fn select_emits_exactly_one_event() {
        let st = abc();
        let effects = st.select(2);
        assert_eq!(
            effects,
            vec![Effect::EmitSelection(OptionSelected::new("C"))]
        );
        assert!(st.select(9).is_empty());
    }

    #[test]
    fn rows_expose_roving_tabindex_and_selection() {
        let mut st = abc();
        st.focus_tab_stop();
        st.key_navigate(KeyCode::Down);
        let rows = st.rows();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.role == Role::Option));
        assert_eq!(rows[0].tab_index, 0);
        assert_eq!(rows[1].tab_index, -1);
        assert_eq!(rows[0].id, "item-0");
        assert!(rows[1].aria_selected);
        assert!(!rows[0].aria_selected && !rows[2].aria_selected);
    }
}
