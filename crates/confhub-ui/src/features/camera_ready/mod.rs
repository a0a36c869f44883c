//! Camera-ready submission settings feature wiring.
//!
//! # Design
//! - The page receives its track as a property; it never reads role or selection globals.
//! - Loading, editing and saving run through a DOM-free reducer so races are testable natively.
//! - API calls go through the `CameraReadyApi` seam; the wasm client is one implementation.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod defaults;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
