//! Postcode address autocomplete backed by the Postcoder web service.
//!
//! # Design
//! - URL building and field mapping are pure and tested natively.
//! - Every query gets a generation number; responses for older queries are dropped.
//! - Failures clear the suggestion list and are logged, never shown to the user.
//! - Hosts naming `data-searchterm` and `data-suggestions` reuse those page elements.

#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod logic;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
