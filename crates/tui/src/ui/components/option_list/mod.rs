//! Focus-navigable option list widget.

pub(crate) mod option_list_component;
pub(crate) mod state;

pub(crate) use option_list_component::OptionListComponent;
pub(crate) use state::OptionListState;
