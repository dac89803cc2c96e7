//! Component rendering and input routing for the option list widget.

use autosuggest_types::Effect;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rat_focus::HasFocus;
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
};

use autosuggest_types::Msg;

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::theme::{Theme, theme_helpers as th};

/// Navigable option list component.
///
/// Renders the fixed option set as a single-tab-stop list and routes arrow
/// keys, Enter, and mouse presses to [`super::OptionListState`].
#[derive(Debug, Default)]
pub(crate) struct OptionListComponent {
    /// Screen areas of the rendered rows, for mouse hit-testing.
    row_areas: Vec<Rect>,
}

impl OptionListComponent {
    fn create_rows<'a>(&self, app: &'a App, theme: &dyn Theme) -> Vec<ListItem<'a>> {
        app.option_list
            .rows()
            .into_iter()
            .map(|row| {
                let style = if Some(row.id.as_str()) == app.option_list.focused_element_id() {
                    theme.selection_style()
                } else {
                    theme.text_primary_style()
                };
                ListItem::from(Line::from(Span::styled(row.label, style)))
            })
            .collect()
    }

    /// Row index under the given screen position, if any.
    fn row_at(&self, column: u16, row: u16) -> Option<usize> {
        self.row_areas
            .iter()
            .position(|area| area.contains((column, row).into()))
    }
}

impl Component for OptionListComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let is_focused = app.option_list.is_focused();
        let block = th::block(theme, Some("Suggestions"), is_focused);
        let inner = block.inner(rect);

        let list = List::new(self.create_rows(app, theme))
            .block(block)
            .highlight_style(theme.selection_style().add_modifier(Modifier::BOLD))
            .highlight_symbol("► ");

        let mut list_state = ListState::default();
        list_state.select(Some(app.option_list.selected_index()));
        frame.render_stateful_widget(list, rect, &mut list_state);

        self.row_areas = (0..app.option_list.items().len() as u16)
            .map(|i| Rect::new(inner.x, inner.y + i, inner.width, 1))
            .filter(|area| area.bottom() <= inner.bottom())
            .collect();
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Enter => app.option_list.key_navigate(key.code),
            KeyCode::Tab => app.update(Msg::FocusNext),
            KeyCode::BackTab => app.update(Msg::FocusPrev),
            _ => Vec::new(),
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Vec::new();
        }
        if let Some(index) = self.row_at(mouse.column, mouse.row) {
            let flag = app.option_list.focus();
            app.focus.focus(&flag);
            // Pointer commit: emit only, no selection-state change.
            return app.option_list.select(index);
        }
        Vec::new()
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'_>> {
        let theme = &*app.ctx.theme;
        vec![
            Span::styled("↑/↓", theme.accent_emphasis_style()),
            Span::styled(" Navigate  ", theme.text_muted_style()),
            Span::styled("Enter", theme.accent_emphasis_style()),
            Span::styled(" Select  ", theme.text_muted_style()),
            Span::styled("Tab", theme.accent_emphasis_style()),
            Span::styled(" Next widget", theme.text_muted_style()),
        ]
    }
}
