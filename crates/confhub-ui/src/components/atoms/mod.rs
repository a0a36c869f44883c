//! Shared UI atoms used across the shell and views.

pub(crate) mod empty_state;
pub(crate) mod icon_button;
pub(crate) mod icons;

pub(crate) use empty_state::EmptyState;
pub(crate) use icon_button::IconButton;
