//! Component rendering and input routing for the combobox widget.

use autosuggest_types::Effect;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rat_focus::HasFocus;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use autosuggest_types::Msg;

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::{Theme, theme_helpers as th};

/// Combobox/autosuggest component.
///
/// Renders a labeled text input and, while the input holds non-whitespace
/// content, a suggestion dropdown beneath it. Routes typing into the input
/// buffer, arrow keys onto the highlighted row, and Enter/mouse presses to
/// [`super::ComboboxState`].
#[derive(Debug, Default)]
pub(crate) struct ComboboxComponent {
    /// Screen areas of the rendered dropdown rows, for mouse hit-testing.
    dropdown_row_areas: Vec<Rect>,
}

impl ComboboxComponent {
    fn create_rows<'a>(&self, app: &'a App, theme: &dyn Theme) -> Vec<ListItem<'a>> {
        app.combobox
            .rows()
            .into_iter()
            .map(|row| {
                let style = if row.active {
                    theme.selection_style().add_modifier(Modifier::BOLD)
                } else {
                    theme.text_primary_style()
                };
                ListItem::from(Line::from(Span::styled(row.label, style)))
            })
            .collect()
    }

    /// Dropdown row index under the given screen position, if any.
    fn dropdown_row_at(&self, column: u16, row: u16) -> Option<usize> {
        self.dropdown_row_areas
            .iter()
            .position(|area| area.contains((column, row).into()))
    }

    fn position_cursor(&self, frame: &mut Frame, input_inner: Rect, app: &App) {
        if !app.combobox.is_focused() {
            return;
        }
        let input = app.combobox.input();
        let col = input
            .value()
            .get(..input.cursor())
            .map(|prefix| prefix.width() as u16)
            .unwrap_or(0);
        let x = input_inner.x.saturating_add(col).min(input_inner.right().saturating_sub(1));
        frame.set_cursor_position((x, input_inner.y));
    }
}

impl Component for ComboboxComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let is_focused = app.combobox.is_focused();

        let splits = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Label line
                Constraint::Length(3), // Input line with borders
                Constraint::Min(0),    // Dropdown area
            ])
            .split(rect);

        let label = Paragraph::new(Span::styled(
            "Combobox Component",
            theme.text_secondary_style().add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(label, splits[0]);

        let input_block = th::block(theme, None, is_focused);
        let input_inner = input_block.inner(splits[1]);
        let input = Paragraph::new(Span::styled(
            app.combobox.input().value().to_string(),
            theme.text_primary_style(),
        ))
        .block(input_block);
        frame.render_widget(input, splits[1]);
        self.position_cursor(frame, input_inner, app);

        self.dropdown_row_areas.clear();
        if app.combobox.is_visible() {
            let item_count = app.combobox.items().len() as u16;
            let dropdown = Rect::new(
                splits[2].x,
                splits[2].y,
                splits[2].width,
                (item_count + 2).min(splits[2].height),
            );
            let block = th::block(theme, None, is_focused);
            let inner = block.inner(dropdown);

            frame.render_widget(Clear, dropdown);
            let list = List::new(self.create_rows(app, theme)).block(block);
            let mut list_state = ListState::default();
            list_state.select(app.combobox.active_index());
            frame.render_stateful_widget(list, dropdown, &mut list_state);

            self.dropdown_row_areas = (0..item_count)
                .map(|i| Rect::new(inner.x, inner.y + i, inner.width, 1))
                .filter(|area| area.bottom() <= inner.bottom())
                .collect();
        }
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up | KeyCode::Down => app.combobox.key_down(key.code),
            KeyCode::Enter => {
                let effects = app.combobox.key_down(key.code);
                app.combobox.apply_text_changed();
                effects
            }
            KeyCode::Char(c) => {
                app.combobox.apply_insert_char(c);
                app.combobox.apply_text_changed();
                Vec::new()
            }
            KeyCode::Backspace => {
                app.combobox.reduce_backspace();
                app.combobox.apply_text_changed();
                Vec::new()
            }
            KeyCode::Left => {
                app.combobox.reduce_move_cursor_left();
                app.combobox.apply_text_changed();
                Vec::new()
            }
            KeyCode::Right => {
                app.combobox.reduce_move_cursor_right();
                app.combobox.apply_text_changed();
                Vec::new()
            }
            KeyCode::Tab => app.update(Msg::FocusNext),
            KeyCode::BackTab => app.update(Msg::FocusPrev),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        if !app.combobox.is_visible() {
            return Vec::new();
        }
        if let Some(index) = self.dropdown_row_at(mouse.column, mouse.row) {
            let flag = app.combobox.focus();
            app.focus.focus(&flag);
            return app.combobox.commit(Some(index));
        }
        Vec::new()
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        vec![
            Span::styled("Type", theme.accent_emphasis_style()),
            Span::styled(" Open suggestions  ", theme.text_muted_style()),
            Span::styled("↑/↓", theme.accent_emphasis_style()),
            Span::styled(" Highlight  ", theme.text_muted_style()),
            Span::styled("Enter", theme.accent_emphasis_style()),
            Span::styled(" Select  ", theme.text_muted_style()),
            Span::styled("Tab", theme.accent_emphasis_style()),
            Span::styled(" Next widget", theme.text_muted_style()),
        ]
    }
}
