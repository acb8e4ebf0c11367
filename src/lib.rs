//! Drag-to-select a screen region and report it as `Selection: x, y, w, h`.
//!
//! The binary prints that line; [`selection::Selection::from_output`] reads it back for tools
//! that run `rsel` as a helper.

pub mod cli;
pub mod display;
pub mod error;
pub mod overlay;
pub mod selection;
