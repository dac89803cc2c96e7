//! Application state for the autosuggest TUI.
//!
//! The `App` owns one instance of each widget's state, the shared context
//! (theme), the on-screen event log, and the focus ring. Widgets report
//! side effects from their event handlers; `App::apply_effects` executes
//! them, which is where committed selections are dispatched to listeners.

use autosuggest_types::{Effect, Msg, OptionSelected};
use rat_focus::{Focus, FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use tracing::debug;

use crate::ui::components::{ComboboxState, OptionListState};
use crate::ui::theme::Theme;

/// Callback invoked synchronously for every committed selection.
///
/// This is the host-side rendition of a bubbling selection event: ancestors
/// register here instead of listening on an element tree.
pub type SelectionListener = Box<dyn Fn(&OptionSelected)>;

/// Cross-cutting shared context owned by the App.
///
/// Holds runtime-wide objects so they do not have to be threaded through
/// every component call.
pub struct SharedCtx {
    /// Active theme used by all rendering.
    pub theme: Box<dyn Theme>,
}

/// Event log shown in the host pane beneath the widgets.
#[derive(Debug, Default)]
pub struct LogsState {
    pub entries: Vec<String>,
}

/// The main application state.
pub struct App {
    /// Shared, cross-cutting context.
    pub ctx: SharedCtx,
    /// State for the navigable option list widget.
    pub option_list: OptionListState,
    /// State for the combobox/autosuggest widget.
    pub combobox: ComboboxState,
    /// Selection events received by the host, most recent last.
    pub logs: LogsState,
    /// Focus ring over the two widgets.
    pub focus: Focus,
    /// Set when the user requests exit.
    pub should_quit: bool,
    /// Container focus flag for the whole application.
    focus_flag: FocusFlag,
    /// Listeners notified once per committed selection, in registration
    /// order.
    listeners: Vec<SelectionListener>,
}

impl App {
    /// Creates the application state over a fixed option list.
    ///
    /// Both widgets share the same option strings; the list is never
    /// mutated after construction.
    pub fn new(items: Vec<String>, theme: Box<dyn Theme>) -> Self {
        Self {
            ctx: SharedCtx { theme },
            option_list: OptionListState::new(items.clone()),
            combobox: ComboboxState::new(items),
            logs: LogsState::default(),
            focus: Focus::default(),
            should_quit: false,
            focus_flag: FocusFlag::named("autosuggest.app"),
            listeners: Vec::new(),
        }
    }

    /// Registers a listener for committed selections.
    pub fn on_selection(&mut self, listener: impl Fn(&OptionSelected) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Updates the application state based on a host-level message.
    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::Resize(_, _) => {}
            Msg::FocusNext => {
                self.focus.next();
                self.sync_row_focus();
            }
            Msg::FocusPrev => {
                self.focus.prev();
                self.sync_row_focus();
            }
            Msg::Quit => {
                self.should_quit = true;
            }
        }
        Vec::new()
    }

    /// Executes effects reported by widget handlers.
    ///
    /// Selections are appended to the event log and dispatched to every
    /// registered listener exactly once.
    pub fn apply_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::EmitSelection(event) => {
                    debug!(value = %event.value, "dispatching selection event");
                    self.logs.entries.push(format!("option selected: {}", event.value));
                    for listener in &self.listeners {
                        listener(&event);
                    }
                }
            }
        }
    }

    /// Keeps row-level focus consistent with the focus ring.
    ///
    /// Entering the option list by keyboard lands on its single tab stop
    /// (row 0, the roving-tabindex entry point); leaving it drops row-level
    /// focus entirely. Mouse focus does not pass through here, so clicking
    /// the widget container leaves the no-row-focused state reachable.
    pub fn sync_row_focus(&mut self) {
        if self.option_list.is_focused() {
            if self.option_list.focused_element_id().is_none() {
                self.option_list.focus_tab_stop();
            }
        } else {
            self.option_list.clear_row_focus();
        }
    }
}

impl HasFocus for App {
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        builder.widget(&self.option_list);
        builder.widget(&self.combobox);
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.focus_flag.clone()
    }

    fn area(&self) -> Rect {
        Rect::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn test_app() -> App {
        App::new(
            vec!["A".to_string(), "B".to_string(), "C".to_string()],
            theme::default_theme(),
        )
    }

    #[test]
    fn selection_effect_notifies_each_listener_once() {
        let mut app = test_app();
        let seen: Rc<RefCell<Vec<String>>> = Rc::default();
        let sink = Rc::clone(&seen);
        app.on_selection(move |event| sink.borrow_mut().push(event.value.clone()));

        app.apply_effects(vec![Effect::EmitSelection(OptionSelected::new("B"))]);

        assert_eq!(seen.borrow().as_slice(), ["B".to_string()]);
        assert_eq!(app.logs.entries.len(), 1);
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let mut app = test_app();
        let order: Rc<RefCell<Vec<&'static str>>> = Rc::default();
        let first = Rc::clone(&order);
        let second = Rc::clone(&order);
        app.on_selection(move |_| first.borrow_mut().push("first"));
        app.on_selection(move |_| second.borrow_mut().push("second"));

        app.apply_effects(vec![Effect::EmitSelection(OptionSelected::new("A"))]);

        assert_eq!(order.borrow().as_slice(), ["first", "second"]);
    }

    #[test]
    fn resize_is_a_silent_no_op() {
        let mut app = test_app();
        assert!(app.update(Msg::Resize(80, 24)).is_empty());
        assert!(!app.should_quit);
        assert!(app.logs.entries.is_empty());
    }

    #[test]
    fn quit_message_sets_exit_flag() {
        let mut app = test_app();
        assert!(!app.should_quit);
        app.update(Msg::Quit);
        assert!(app.should_quit);
    }
}
