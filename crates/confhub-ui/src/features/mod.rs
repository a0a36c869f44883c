//! Feature slices: DOM-free state and logic plus wasm-only views.
pub mod camera_ready;
pub mod tracks;
