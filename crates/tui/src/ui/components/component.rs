//! Component abstraction for the autosuggest TUI.
//!
//! Components are self-contained UI elements that handle their own events
//! and rendering while integrating with the application through a
//! consistent interface. Handlers mutate only the state they own and
//! report everything else as [`Effect`]s for the runtime to execute.

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

use autosuggest_types::Effect;

use crate::app::App;

/// A UI element with its own event handling and rendering.
///
/// Lifecycle: `init` once at startup, then event handlers as input arrives,
/// then `render` whenever the host redraws. Render implementations should be
/// side-effect free except for frame drawing and cursor placement.
pub(crate) trait Component {
    /// Initialize any internal state.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event while this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle a mouse event. Components hit-test against their last
    /// rendered areas, so events can be offered to every component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Spans for the hint bar while this component has focus.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'_>> {
        Vec::new()
    }

    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);
}
