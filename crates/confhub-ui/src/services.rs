//! HTTP client for the conference API.

pub(crate) mod api;
