//! Host wiring for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on layout, selection and animation state.
//! This crate provides small, framework-neutral pieces adapters commonly need:
//!
//! - A [`ScrollHost`] trait describing the scroll container being driven
//! - Per-item activation capabilities that route clicks/taps to a selection
//! - A [`FrameClock`] for hosts that only have a millisecond timestamp
//! - A [`Controller`] that defers setup past the host's first layout pass and keeps input
//!   handling ahead of animation advancement
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod activation;
mod clock;
mod controller;
mod host;

#[cfg(test)]
mod tests;

pub use activation::{ActivationQueue, ItemActivator};
pub use clock::FrameClock;
pub use controller::Controller;
pub use host::ScrollHost;
