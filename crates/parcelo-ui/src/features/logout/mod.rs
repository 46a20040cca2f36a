//! Logout confirmation.
//!
//! # Design
//! - `.logout-user` elements describe the request through data attributes.
//! - The dialog state machine is DOM-free; the view only renders it and performs the POST.
//! - Failure is reported with a single alert; success navigates to the login page.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub mod api;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
