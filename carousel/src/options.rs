use alloc::sync::Arc;

use crate::{Easing, PreviewPolicy, Scale, ScalePolicy};

/// A callback fired with the committed index every time a selection is committed.
pub type OnSelectCallback = Arc<dyn Fn(usize) + Send + Sync>;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the callback is stored in an `Arc`.
pub struct CarouselOptions {
    /// Rate of snap convergence; the snap timer advances by `delta * snap_speed` per tick.
    pub snap_speed: f32,
    /// Rate of scale convergence for [`ScalePolicy::Timed`].
    pub scale_transition_speed: f32,
    pub selected_scale: Scale,
    pub normal_scale: Scale,
    /// Space between items. Only consumed when building geometry with
    /// [`crate::StripGeometry::sequential`].
    pub item_spacing: f32,
    /// Forwarded to the scroll host; the carousel itself does not read it.
    pub drag_sensitivity: f32,
    pub snap_easing: Easing,
    pub scale_easing: Easing,
    /// Fixed for the lifetime of a carousel.
    pub scale_policy: ScalePolicy,
    pub preview: PreviewPolicy,
    /// The index committed when setup completes (clamped to the item count).
    pub initial_index: usize,
    pub animate_initial: bool,
    pub on_select: Option<OnSelectCallback>,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            snap_speed: self.snap_speed,
            scale_transition_speed: self.scale_transition_speed,
            selected_scale: self.selected_scale,
            normal_scale: self.normal_scale,
            item_spacing: self.item_spacing,
            drag_sensitivity: self.drag_sensitivity,
            snap_easing: self.snap_easing,
            scale_easing: self.scale_easing,
            scale_policy: self.scale_policy,
            preview: self.preview,
            initial_index: self.initial_index,
            animate_initial: self.animate_initial,
            on_select: self.on_select.clone(),
        }
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CarouselOptions {
    pub fn new() -> Self {
        Self {
            snap_speed: 5.0,
            scale_transition_speed: 7.0,
            selected_scale: Scale::splat(1.2),
            normal_scale: Scale::ONE,
            item_spacing: 50.0,
            drag_sensitivity: 10.0,
            snap_easing: Easing::SmoothStep,
            scale_easing: Easing::SmoothStep,
            scale_policy: ScalePolicy::Timed,
            preview: PreviewPolicy::Nearest,
            initial_index: 0,
            animate_initial: true,
            on_select: None,
        }
    }

    pub fn with_snap_speed(mut self, snap_speed: f32) -> Self {
        self.snap_speed = snap_speed;
        self
    }

    pub fn with_scale_transition_speed(mut self, speed: f32) -> Self {
        self.scale_transition_speed = speed;
        self
    }

    pub fn with_scales(mut self, selected: Scale, normal: Scale) -> Self {
        self.selected_scale = selected;
        self.normal_scale = normal;
        self
    }

    pub fn with_item_spacing(mut self, item_spacing: f32) -> Self {
        self.item_spacing = item_spacing;
        self
    }

    pub fn with_drag_sensitivity(mut self, drag_sensitivity: f32) -> Self {
        self.drag_sensitivity = drag_sensitivity;
        self
    }

    pub fn with_easing(mut self, snap: Easing, scale: Easing) -> Self {
        self.snap_easing = snap;
        self.scale_easing = scale;
        self
    }

    pub fn with_scale_policy(mut self, scale_policy: ScalePolicy) -> Self {
        self.scale_policy = scale_policy;
        self
    }

    pub fn with_preview(mut self, preview: PreviewPolicy) -> Self {
        self.preview = preview;
        self
    }

    /// Sets the selection committed at setup, and whether it snaps there with an animation.
    pub fn with_initial_index(mut self, initial_index: usize, animate: bool) -> Self {
        self.initial_index = initial_index;
        self.animate_initial = animate;
        self
    }

    pub fn with_on_select(
        mut self,
        on_select: Option<impl Fn(usize) + Send + Sync + 'static>,
    ) -> Self {
        self.on_select = on_select.map(|f| Arc::new(f) as OnSelectCallback);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("snap_speed", &self.snap_speed)
            .field("scale_transition_speed", &self.scale_transition_speed)
            .field("selected_scale", &self.selected_scale)
            .field("normal_scale", &self.normal_scale)
            .field("item_spacing", &self.item_spacing)
            .field("drag_sensitivity", &self.drag_sensitivity)
            .field("snap_easing", &self.snap_easing)
            .field("scale_easing", &self.scale_easing)
            .field("scale_policy", &self.scale_policy)
            .field("preview", &self.preview)
            .field("initial_index", &self.initial_index)
            .field("animate_initial", &self.animate_initial)
            .finish_non_exhaustive()
    }
}
