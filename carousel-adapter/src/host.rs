use carousel::{Scale, StripGeometry};

use crate::ItemActivator;

/// The scroll container a [`crate::Controller`] drives.
///
/// The host owns the real widgets. It reports geometry, applies the scroll position and item
/// scales the carousel writes, and forwards drag/scroll input to the controller.
pub trait ScrollHost {
    /// Geometry as of the host's last completed layout pass.
    fn geometry(&self) -> StripGeometry;

    fn set_scroll_position(&mut self, position: f32);

    fn set_item_scale(&mut self, index: usize, scale: Scale);

    /// Receives the configured drag sensitivity once, on activation.
    fn set_scroll_sensitivity(&mut self, _sensitivity: f32) {}

    /// Hands an item its activation capability. Items without a clickable surface can ignore it.
    fn bind_activator(&mut self, _activator: ItemActivator) {}
}
