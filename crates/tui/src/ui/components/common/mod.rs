//! Shared building blocks used by more than one component.

pub(crate) mod text_input;

pub(crate) use text_input::TextInputState;
