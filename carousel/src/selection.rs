use crate::types::abs;

/// Returns the index whose position is closest to `scroll_position`.
///
/// Ties resolve to the lowest index. Returns `None` for an empty table.
pub fn nearest_index(scroll_position: f32, positions: &[f32]) -> Option<usize> {
    if positions.is_empty() {
        return None;
    }
    let mut closest = 0usize;
    let mut min_distance = f32::MAX;
    for (i, &p) in positions.iter().enumerate() {
        let distance = abs(p - scroll_position);
        if distance < min_distance {
            min_distance = distance;
            closest = i;
        }
    }
    Some(closest)
}

/// Returns the first index whose open window `(p - half_width, p + half_width)` contains
/// `scroll_position`.
///
/// Unlike [`nearest_index`], windows can leave gaps (uneven spacing, small `half_width`), in
/// which case nothing matches.
pub fn window_index(scroll_position: f32, positions: &[f32], half_width: f32) -> Option<usize> {
    positions
        .iter()
        .position(|&p| scroll_position > p - half_width && scroll_position < p + half_width)
}

/// How the item under a live (uncommitted) scroll position is previewed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PreviewPolicy {
    /// Always preview the nearest item.
    #[default]
    Nearest,
    /// Preview an item only while the scroll position sits inside its window.
    ///
    /// `half_width: None` uses `0.5 / item_count`.
    Window { half_width: Option<f32> },
}

impl PreviewPolicy {
    pub fn resolve(self, scroll_position: f32, positions: &[f32]) -> Option<usize> {
        match self {
            Self::Nearest => nearest_index(scroll_position, positions),
            Self::Window { half_width } => {
                if positions.is_empty() {
                    return None;
                }
                let half_width = half_width.unwrap_or(0.5 / positions.len() as f32);
                window_index(scroll_position, positions, half_width)
            }
        }
    }
}
