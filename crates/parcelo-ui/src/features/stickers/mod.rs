//! Printable shipping label sheet.
//!
//! # Design
//! - One [`state::StickerBoard`] per mount owns rows, pager and selection.
//! - Rendering is a pure function of board state into a [`render::RenderNode`] tree.
//! - Pager and checkbox intent travel as data attributes so the tree stays plain data.
//! - A missing render target or a null record is a silent no-op, never an error.

pub mod actions;
pub mod logic;
pub mod render;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub mod view;
