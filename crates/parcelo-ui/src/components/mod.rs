//! Shared Yew components.
pub(crate) mod confirm_dialog;
