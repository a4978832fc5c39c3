use crate::CarouselPhase;

/// A lightweight snapshot of the carousel for a single frame.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`. It is meant for
/// rendering and debugging; there is no way to restore a carousel from it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselSnapshot {
    pub phase: CarouselPhase,
    pub item_count: usize,
    /// `None` until setup completes.
    pub current_index: Option<usize>,
    /// The item emphasized right now: the last preview while scrolling, otherwise the committed
    /// index.
    pub emphasized_index: Option<usize>,
    pub scroll_position: f32,
    pub is_dragging: bool,
}
