//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Drive a blocking event loop that polls for input with a short timeout.
//! - Route keys to the focused component and execute returned `Effect`s.
//! - Rebuild the focus ring before every draw so structural changes are
//!   reflected.
//!
//! Entry Point
//! - `run_app(app)` is called from `lib::run` and performs setup, event
//!   processing, and teardown.
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rat_focus::FocusBuilder;
use ratatui::{Terminal, prelude::*, text::Line, widgets::Paragraph};

use autosuggest_types::{Effect, Msg};

use crate::app::App;
use crate::ui::components::component::Component;
use crate::ui::components::{ComboboxComponent, OptionListComponent};
use crate::ui::layout::MainLayout;
use crate::ui::theme::theme_helpers as th;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// The two widget components plus the host panes they share the screen with.
#[derive(Default)]
struct MainView {
    option_list: OptionListComponent,
    combobox: ComboboxComponent,
}

impl MainView {
    fn render(&mut self, frame: &mut Frame, app: &mut App) {
        let areas = MainLayout::responsive_layout(frame.area());

        self.option_list.render(frame, areas.option_list, app);
        self.combobox.render(frame, areas.combobox, app);
        self.render_logs(frame, areas.logs, app);
        self.render_hints(frame, areas.hints, app);
    }

    fn render_logs(&self, frame: &mut Frame, rect: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let block = th::block(theme, Some("Events"), false);
        let visible = block.inner(rect).height as usize;
        let lines: Vec<Line> = app
            .logs
            .entries
            .iter()
            .rev()
            .take(visible)
            .rev()
            .map(|entry| Line::from(Span::styled(entry.clone(), theme.text_primary_style())))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), rect);
    }

    fn render_hints(&self, frame: &mut Frame, rect: Rect, app: &App) {
        let theme = &*app.ctx.theme;
        let mut spans = if app.combobox.is_focused() {
            self.combobox.get_hint_spans(app)
        } else {
            self.option_list.get_hint_spans(app)
        };
        spans.push(Span::styled("  Ctrl+C", theme.accent_emphasis_style()));
        spans.push(Span::styled(" Quit", theme.text_muted_style()));
        frame.render_widget(Paragraph::new(Line::from(spans)), rect);
    }

    fn handle_key_events(&mut self, app: &mut App, key: crossterm::event::KeyEvent) -> Vec<Effect> {
        if app.combobox.is_focused() {
            self.combobox.handle_key_events(app, key)
        } else {
            self.option_list.handle_key_events(app, key)
        }
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: crossterm::event::MouseEvent) -> Vec<Effect> {
        let mut effects = self.option_list.handle_mouse_events(app, mouse);
        effects.extend(self.combobox.handle_mouse_events(app, mouse));
        effects
    }
}

/// Put the terminal into raw mode and enter the alternate screen.
///
/// Returns a ratatui `Terminal` backed by Crossterm for later drawing.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Renders a frame, rebuilding the focus ring first.
fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = FocusBuilder::rebuild_for(app, Some(old_focus));
    if app.focus.focused().is_none() {
        app.focus.first();
        app.sync_row_focus();
    }
    terminal.draw(|frame| main_view.render(frame, app))?;
    Ok(())
}

/// Handle raw crossterm input events and update `App`/components.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
                return app.update(Msg::Quit);
            }
            main_view.handle_key_events(app, key_event)
        }
        Event::Key(_) => Vec::new(),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => app.update(Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop, and performs cleanup on exit.
pub fn run_app(app: &mut App) -> Result<()> {
    let mut main_view = MainView::default();
    let mut terminal = setup_terminal()?;

    let run_result = run_loop(&mut terminal, app, &mut main_view);

    // Restore the terminal even when the loop failed.
    let cleanup_result = cleanup_terminal(&mut terminal);
    run_result.and(cleanup_result)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
) -> Result<()> {
    render(terminal, app, main_view)?;

    while !app.should_quit {
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let input_event = event::read()?;
        let effects = handle_input_event(app, main_view, input_event);
        app.apply_effects(effects);
        render(terminal, app, main_view)?;
    }
    Ok(())
}
