use alloc::vec;
use alloc::vec::Vec;

use crate::ItemGeometry;

/// The position used for a single item, and for items whose geometry cannot be normalized.
pub const CENTER_POSITION: f32 = 0.5;

/// Computes the normalized scroll position that centers each item.
///
/// The scroll host is assumed to map `0.0` to left-aligned content and `1.0` to right-aligned
/// content. Each item resolves to `(offset + width / 2) / content_width`, clamped to `[0, 1]`.
///
/// Call this only after the host's layout pass has settled. With unsettled geometry (a zero or
/// non-finite viewport/content width) every item resolves to [`CENTER_POSITION`].
pub fn compute_positions(
    items: &[ItemGeometry],
    viewport_width: f32,
    content_width: f32,
) -> Vec<f32> {
    if items.len() == 1 {
        return vec![CENTER_POSITION];
    }
    if !(content_width > 0.0 && viewport_width > 0.0) || !content_width.is_finite() {
        cdebug!(
            viewport_width,
            content_width,
            "compute_positions: layout not settled"
        );
        return vec![CENTER_POSITION; items.len()];
    }

    items
        .iter()
        .map(|item| normalize(item.center() / content_width))
        .collect()
}

/// Evenly spaced positions `i / (count - 1)`; a single item is centered.
///
/// This is the layout of strips whose scrollbar maps one step per item, regardless of the
/// items' actual widths.
pub fn uniform_positions(count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![CENTER_POSITION],
        _ => {
            let last = (count - 1) as f32;
            (0..count).map(|i| i as f32 / last).collect()
        }
    }
}

pub(crate) fn normalize(v: f32) -> f32 {
    if v.is_nan() {
        return CENTER_POSITION;
    }
    v.clamp(0.0, 1.0)
}
