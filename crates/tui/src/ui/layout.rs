//! Layout system for the autosuggest TUI.
//!
//! Defines the main application layout: the two widgets side by side, the
//! host event log beneath them, and a single hints row at the bottom.
use ratatui::prelude::*;

pub(super) struct MainLayout;

/// Areas produced by [`MainLayout::responsive_layout`], top to bottom.
pub(super) struct MainAreas {
    pub option_list: Rect,
    pub combobox: Rect,
    pub logs: Rect,
    pub hints: Rect,
}

impl MainLayout {
    /// Creates the main layout for the application.
    ///
    /// The screen is split into three vertical sections: the widget row,
    /// the event log, and the hints bar. The widget row is halved between
    /// the option list (left) and the combobox (right). The combobox pane
    /// gets enough height for its dropdown to render fully.
    pub fn responsive_layout(size: Rect) -> MainAreas {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(100),  // Widget row
                Constraint::Length(6),        // Event log
                Constraint::Length(1),        // Hints bar
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        MainAreas {
            option_list: columns[0],
            combobox: columns[1],
            logs: rows[1],
            hints: rows[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widget_row_is_halved() {
        let areas = MainLayout::responsive_layout(Rect::new(0, 0, 100, 30));
        assert_eq!(areas.option_list.width, 50);
        assert_eq!(areas.combobox.width, 50);
        assert_eq!(areas.option_list.y, areas.combobox.y);
    }

    #[test]
    fn hints_sit_on_the_last_row() {
        let areas = MainLayout::responsive_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.hints.height, 1);
        assert_eq!(areas.hints.bottom(), 24);
        assert_eq!(areas.logs.height, 6);
    }
}
