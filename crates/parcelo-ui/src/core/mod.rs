//! Core, DOM-free primitives shared across the Web UI features.
pub mod config;
pub mod error;
