//! Core, DOM-free primitives and helpers for the Web UI.
pub mod cancel;
pub mod context;
pub mod error;
pub mod notify;
pub mod store;
pub mod wire;
