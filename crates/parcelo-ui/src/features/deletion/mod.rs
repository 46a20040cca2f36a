//! Generic delete confirmation opened from page scripts.
//!
//! # Design
//! - Page scripts call `confirmDelete(route, message, method, onSuccess)`.
//! - The dialog stays open while the request runs and closes only on success.
//! - A failed request raises one alert and leaves the dialog open for a retry.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
