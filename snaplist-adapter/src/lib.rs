//! Adapter utilities for the `snaplist` crate.
//!
//! The `snaplist` crate is UI-agnostic and focuses on the snap/centering math. This crate
//! provides the framework-neutral plumbing a picker control needs around that math:
//!
//! - The [`Viewport`], [`EventSource`] and cell traits the UI layer implements
//! - [`ListWrapper`], which owns the data and runs the reload/recenter/settle workflow
//! - [`NotificationBridge`], a scoped event subscription (drop unsubscribes)
//! - [`Tween`], for driving the short animated settle transition
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod bridge;
mod cells;
mod tween;
mod viewport;
mod wrapper;

#[cfg(test)]
mod tests;

pub use bridge::{EventCallback, EventSource, NotificationBridge, UiEvent};
pub use cells::{CellDataSource, CellFactory, CellHost};
pub use tween::{Easing, Tween};
pub use viewport::Viewport;
pub use wrapper::{DataDestination, ListWrapper};
