//! UI components for the autosuggest widgets.
//!
//! Each widget follows the same split: a state struct with selectors and
//! reducers, and a component that routes input events to the state and
//! renders it.

pub(crate) mod combobox;
pub(crate) mod common;
pub(crate) mod component;
pub(crate) mod option_list;

pub(crate) use combobox::{ComboboxComponent, ComboboxState};
pub(crate) use option_list::{OptionListComponent, OptionListState};
