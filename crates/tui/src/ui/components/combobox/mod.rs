//! Combobox/autosuggest input widget.

pub(crate) mod combobox_component;
pub(crate) mod state;

pub(crate) use combobox_component::ComboboxComponent;
pub(crate) use state::ComboboxState;
