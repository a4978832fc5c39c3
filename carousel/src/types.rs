use alloc::vec::Vec;

/// A per-item visual scale (x, y, z).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scale {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Scale {
    pub const ONE: Self = Self::splat(1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v, z: v }
    }

    pub fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
            z: self.z + (to.z - self.z) * t,
        }
    }

    /// Largest per-axis distance to `other` (Chebyshev distance).
    pub fn max_distance(self, other: Self) -> f32 {
        abs(self.x - other.x)
            .max(abs(self.y - other.y))
            .max(abs(self.z - other.z))
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::ONE
    }
}

/// Horizontal geometry of one item inside the scroll content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemGeometry {
    /// Anchored offset of the item's left edge from the content's left edge.
    pub offset: f32,
    pub width: f32,
}

impl ItemGeometry {
    pub fn center(&self) -> f32 {
        self.offset + self.width / 2.0
    }
}

/// Geometry reported by the host once its layout pass has settled.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StripGeometry {
    pub viewport_width: f32,
    pub content_width: f32,
    /// Items in child order; the position in this list is the item's slot index.
    pub items: Vec<ItemGeometry>,
}

impl StripGeometry {
    pub fn new(viewport_width: f32, content_width: f32, items: Vec<ItemGeometry>) -> Self {
        Self {
            viewport_width,
            content_width,
            items,
        }
    }

    /// Lays out `count` items of equal width in sequence, separated by `spacing`.
    pub fn sequential(count: usize, item_width: f32, spacing: f32, viewport_width: f32) -> Self {
        let stride = item_width + spacing;
        let items = (0..count)
            .map(|i| ItemGeometry {
                offset: stride * i as f32,
                width: item_width,
            })
            .collect::<Vec<_>>();
        let content_width = if count == 0 {
            0.0
        } else {
            stride * count as f32 - spacing
        };
        Self::new(viewport_width, content_width, items)
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Whether the content is wider than the viewport (i.e. the host can actually scroll).
    pub fn is_scrollable(&self) -> bool {
        self.content_width > self.viewport_width
    }

    /// Normalized centering positions for every item. See [`crate::compute_positions`].
    pub fn positions(&self) -> Vec<f32> {
        crate::compute_positions(&self.items, self.viewport_width, self.content_width)
    }
}

/// The externally observable state of a [`crate::Carousel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarouselPhase {
    /// Setup has not completed; no selection logic runs.
    Uninitialized,
    Idle,
    Dragging,
    Snapping,
}

impl CarouselPhase {
    pub fn is_ready(self) -> bool {
        !matches!(self, Self::Uninitialized)
    }
}

pub(crate) fn abs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}
