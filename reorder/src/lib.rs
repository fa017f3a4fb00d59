//! A headless, pointer-driven drag-to-reorder engine for vertical lists.
//!
//! For a reactive coordinator that owns the item order and drives this engine from a
//! rendering layer, see the `reorder-adapter` crate.
//!
//! This crate focuses on the part of drag-to-reorder that has to run on every pointer event:
//! tracking the press and the drag, deciding when the dragged item has moved far enough over
//! a neighbor to move the placeholder, and computing the committed order on release.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - pointer press/move/release events (viewport coordinates)
//! - bounding boxes of the rendered entries, via [`ElementHandle`]
//! - a way to install global pointer listeners for the duration of a drag, via [`InputSource`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod error;
mod input;
mod options;
pub mod placement;
pub mod sequence;
mod state;
mod types;


pub use engine::DragEngine;
pub use error::{ConfigError, DragError};
pub use input::{DirectInput, ElementHandle, InputSource};
pub use options::{EngineOptions, OnCommitCallback, OnPlaceholderMoveCallback};
pub use state::DragSnapshot;
pub use types::{
    Entry, PLACEHOLDER_PREFIX, PlaceholderId, PlaceholderPosition, Point, Rect, VerticalDirection,
    is_placeholder_marker,
};
