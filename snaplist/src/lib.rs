//! A headless snap-to-center list picker engine.
//!
//! For adapter-level utilities (viewport/event traits, the list wrapper, tweens), see the
//! `snaplist-adapter` crate.
//!
//! This crate focuses on the core math of a picker-style scrolling list: computing, for any
//! scroll position, the item-aligned content offset that puts a row on the snap grid, and the
//! centering offset that puts the middle item in view after a data reload.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport geometry (content offset, top inset, bounds height)
//! - cell rendering for data items
//! - drag/deceleration and rotation/keyboard event delivery
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod options;
mod picker;
mod snap;
mod types;


pub use options::{OnChangeCallback, PickerOptions};
pub use picker::Picker;
pub use snap::SnapGrid;
pub use types::{Region, ScrollMetrics, SettleEvent, SnapTarget};
