//! # Autosuggest Widgets TUI
//!
//! Terminal user interface hosting two keyboard-first selection widgets:
//!
//! - a focus-navigable option list, where arrow keys move a roving selection
//!   over a fixed set of string options, and
//! - a combobox/autosuggest input, a text field that opens a suggestion
//!   dropdown while it holds non-whitespace content.
//!
//! Both widgets emit an [`autosuggest_types::OptionSelected`] event when the
//! user commits a choice (Enter or a mouse press on an option row). The host
//! application dispatches each event synchronously to registered listeners
//! and mirrors it into an on-screen event log.
//!
//! ## Architecture
//!
//! The crate follows a component-based architecture: each widget is a plain
//! state struct (selectors + reducers, no rendering concerns) paired with a
//! component that handles input events and renders the state with Ratatui.
//! Components report side effects instead of reaching into global state;
//! the runtime executes the effects and redraws.

mod app;
mod ui;

use anyhow::Result;

use app::App;

/// Options for launching the TUI.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// The option strings both widgets offer. Fixed for the lifetime of the
    /// widgets.
    pub items: Vec<String>,
    /// Preferred theme name; falls back to the default palette when absent
    /// or unknown.
    pub theme: Option<String>,
}

/// Runs the main TUI application loop.
///
/// Sets up the terminal, constructs the application state with the given
/// options, and blocks until the user quits (Ctrl+C).
///
/// # Errors
///
/// Returns an error for terminal setup/teardown failures or if the event
/// loop encounters an unrecoverable I/O error.
pub fn run(options: RunOptions) -> Result<()> {
    let theme = ui::theme::load(options.theme.as_deref());
    let mut app = App::new(options.items, theme);
    app.on_selection(|event| {
        tracing::info!(value = %event.value, "option selected");
    });
    ui::runtime::run_app(&mut app)
}
