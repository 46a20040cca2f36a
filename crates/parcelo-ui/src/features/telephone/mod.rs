//! Telephone input masking.
//!
//! # Design
//! - Sanitising is a pure string function; the view only rewires `input` events.
//! - Values are rewritten only when sanitising changed them, keeping the caret in place otherwise.

pub mod logic;
#[cfg(target_arch = "wasm32")]
pub mod view;
