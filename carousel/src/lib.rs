//! A headless snapping carousel engine.
//!
//! For host wiring (deferred setup, frame clock, item activation), see the `carousel-adapter`
//! crate.
//!
//! The engine covers three responsibilities:
//! - layout: the normalized scroll position that centers each item
//! - selection: the item nearest to a scroll position, and the committed index
//! - animation: a cancelable snap of the scroll position plus per-item scale transitions
//!
//! It is UI-agnostic. A host is expected to provide:
//! - viewport/content widths and per-item offsets and widths, once layout has settled
//! - drag lifecycle events and scroll position changes
//! - one `tick(delta)` per frame
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod animation;
mod carousel;
mod error;
mod layout;
mod options;
mod selection;
mod state;
mod types;


pub use animation::{AnimationHandle, AnimationSlot, Easing, Lerp, RateTween, ScalePolicy};
pub use carousel::Carousel;
pub use error::CarouselError;
pub use layout::{CENTER_POSITION, compute_positions, uniform_positions};
pub use options::{CarouselOptions, OnSelectCallback};
pub use selection::{PreviewPolicy, nearest_index, window_index};
pub use state::CarouselSnapshot;
pub use types::{CarouselPhase, ItemGeometry, Scale, StripGeometry};
