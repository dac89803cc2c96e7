//! UI layer: components, theme, layout, and the event-loop runtime.

pub(crate) mod components;
pub(crate) mod layout;
pub(crate) mod runtime;
pub(crate) mod theme;
