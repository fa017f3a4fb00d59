//! Adapter utilities for the `reorder` crate.
//!
//! The `reorder` crate owns the high-frequency pointer and geometry state of a drag. This
//! crate provides the thin reactive layer that sits between it and a rendering layer:
//!
//! - [`ReorderCoordinator`]: owns the item order and the few values a UI re-renders on
//!   (placeholder position, pressed and dragging item), and commits new orders
//! - [`ItemBinding`]: the per-entry rendering contract (marker attribute, positioning)
//! - [`IdGenerator`]: names transient placeholder entries
//!
//! This crate is intentionally framework-agnostic (no DOM/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod binding;
mod coordinator;
mod error;
mod id;
mod options;

#[cfg(test)]
mod tests;

pub use binding::{ItemBinding, MARKER_ATTRIBUTE, Positioning};
pub use coordinator::ReorderCoordinator;
pub use error::Error;
pub use id::{IdGenerator, SequentialIds};
pub use options::{CoordinatorOptions, OnOrderChangeCallback};
