//! Track list feature wiring.
//!
//! # Design
//! - The list itself is a pure projection of props; it owns no state.
//! - Editing, confirmation and API calls belong to the track management page.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
