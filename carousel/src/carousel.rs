use alloc::vec;
use alloc::vec::Vec;

use crate::animation::{Live, ScaleTrack};
use crate::layout::normalize;
use crate::{
    AnimationHandle, AnimationSlot, CarouselError, CarouselOptions, CarouselPhase,
    CarouselSnapshot, RateTween, Scale, StripGeometry, nearest_index, uniform_positions,
};

/// A headless snapping carousel.
///
/// This type does not hold any UI objects:
/// - The host reports geometry once its layout has settled (`setup` / `relayout`).
/// - The host forwards drag lifecycle and scroll position changes (`on_begin_drag`,
///   `on_scroll`, `on_end_drag`).
/// - The host calls `tick(delta)` once per frame, after input handling, then applies the values
///   the carousel wrote (`take_scroll_write`, `for_each_dirty_scale`).
///
/// `scroll_position` is the single source of truth for where the view is. At most one snap
/// animation writes it at a time, and every item has at most one scale animation in flight.
///
/// For a host-facing controller with deferred setup and a frame clock, see the
/// `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    ready: bool,

    positions: Vec<f32>,
    scales: Vec<Scale>,
    scale_tracks: Vec<Option<Live<ScaleTrack>>>,
    dirty_scales: Vec<bool>,

    current_index: usize,
    preview_index: Option<usize>,
    scroll_position: f32,
    scroll_written: bool,
    is_dragging: bool,
    snap: Option<Live<RateTween<f32>>>,
    generation: u64,
}

impl Carousel {
    /// Creates an uninitialized carousel. Nothing is selectable until setup completes.
    pub fn new(options: CarouselOptions) -> Self {
        cdebug!(
            snap_speed = options.snap_speed,
            scale_transition_speed = options.scale_transition_speed,
            "Carousel::new"
        );
        Self {
            options,
            ready: false,
            positions: Vec::new(),
            scales: Vec::new(),
            scale_tracks: Vec::new(),
            dirty_scales: Vec::new(),
            current_index: 0,
            preview_index: None,
            scroll_position: 0.0,
            scroll_written: false,
            is_dragging: false,
            snap: None,
            generation: 0,
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// Applies to snaps started after this call.
    pub fn set_snap_speed(&mut self, snap_speed: f32) {
        self.options.snap_speed = snap_speed;
    }

    /// Applies to scale animations started after this call.
    pub fn set_scale_transition_speed(&mut self, speed: f32) {
        self.options.scale_transition_speed = speed;
    }

    /// Resolves item positions from settled host geometry and commits the initial selection.
    ///
    /// Hosts must call this after their layout pass (the adapter defers it by one tick). With
    /// zero items the carousel stays inert and `NoItems` is returned.
    pub fn setup(&mut self, geometry: &StripGeometry) -> Result<(), CarouselError> {
        cdebug!(
            count = geometry.item_count(),
            viewport_width = geometry.viewport_width,
            content_width = geometry.content_width,
            "Carousel::setup"
        );
        self.setup_with_positions(geometry.positions())
    }

    /// Sets up `count` evenly spaced items (see [`uniform_positions`]).
    pub fn setup_uniform(&mut self, count: usize) -> Result<(), CarouselError> {
        self.setup_with_positions(uniform_positions(count))
    }

    /// Sets up from a precomputed position table (values are clamped to `[0, 1]`).
    pub fn setup_with_positions(&mut self, positions: Vec<f32>) -> Result<(), CarouselError> {
        if positions.is_empty() {
            cwarn!("no items found in the carousel content");
            self.deactivate();
            return Err(CarouselError::NoItems);
        }

        let count = positions.len();
        let normal = self.options.normal_scale;
        self.positions = positions.into_iter().map(normalize).collect();
        self.scales = vec![normal; count];
        self.scale_tracks = vec![None; count];
        self.dirty_scales = vec![true; count];
        self.snap = None;
        self.preview_index = None;
        self.current_index = 0;
        self.ready = true;

        let index = self.options.initial_index.min(count - 1);
        let animate = self.options.animate_initial;
        self.commit(index, animate);
        Ok(())
    }

    /// Recomputes positions after items were added, removed or resized.
    ///
    /// The current index is clamped to the new item count and re-committed without animation,
    /// replacing any snap in flight. While dragging nothing is committed: a preview of a removed
    /// item is dropped, the emphasized item is re-scaled, and the drag release commits as usual.
    pub fn relayout(&mut self, geometry: &StripGeometry) -> Result<(), CarouselError> {
        if !self.ready {
            return Err(CarouselError::NotReady);
        }
        let count = geometry.item_count();
        if count == 0 {
            cwarn!("no items found in the carousel content");
            self.deactivate();
            return Err(CarouselError::NoItems);
        }

        cdebug!(
            prev_count = self.positions.len(),
            count,
            "Carousel::relayout"
        );
        let normal = self.options.normal_scale;
        self.positions = geometry.positions();
        self.scales.resize(count, normal);
        self.scale_tracks.resize(count, None);
        self.dirty_scales.resize(count, true);
        self.current_index = self.current_index.min(count - 1);
        self.preview_index = self.preview_index.filter(|&i| i < count);

        if self.is_dragging {
            if let Some(index) = self.emphasized_index() {
                self.start_scale_transitions(index);
            }
            return Ok(());
        }
        self.commit(self.current_index, false);
        Ok(())
    }

    fn deactivate(&mut self) {
        self.ready = false;
        self.positions.clear();
        self.scales.clear();
        self.scale_tracks.clear();
        self.dirty_scales.clear();
        self.current_index = 0;
        self.preview_index = None;
        self.snap = None;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn phase(&self) -> CarouselPhase {
        if !self.ready {
            CarouselPhase::Uninitialized
        } else if self.snap.is_some() {
            CarouselPhase::Snapping
        } else if self.is_dragging {
            CarouselPhase::Dragging
        } else {
            CarouselPhase::Idle
        }
    }

    pub fn item_count(&self) -> usize {
        self.positions.len()
    }

    /// The committed selection; `None` until setup completes.
    pub fn current_index(&self) -> Option<usize> {
        self.ready.then_some(self.current_index)
    }

    /// The item previewed by the last scroll change, if it differs from the committed one.
    pub fn preview_index(&self) -> Option<usize> {
        self.preview_index
    }

    /// The item currently scaled (or scaling) toward the selected scale.
    pub fn emphasized_index(&self) -> Option<usize> {
        self.preview_index.or(self.current_index())
    }

    pub fn scroll_position(&self) -> f32 {
        self.scroll_position
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Normalized centering position per item.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn scales(&self) -> &[Scale] {
        &self.scales
    }

    pub fn item_scale(&self, index: usize) -> Option<Scale> {
        self.scales.get(index).copied()
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            phase: self.phase(),
            item_count: self.item_count(),
            current_index: self.current_index(),
            emphasized_index: self.emphasized_index(),
            scroll_position: self.scroll_position,
            is_dragging: self.is_dragging,
        }
    }

    /// Commits `index` as the selection.
    ///
    /// Restarts every item's scale animation, cancels any in-flight snap, then either starts a
    /// new snap toward the item (`animate`) or jumps there immediately.
    ///
    /// Out-of-range indexes are rejected with `InvalidIndex` and leave the state untouched.
    pub fn set_selected_item(&mut self, index: usize, animate: bool) -> Result<(), CarouselError> {
        if !self.ready {
            cdebug!(index, "set_selected_item before setup");
            return Err(CarouselError::NotReady);
        }
        let count = self.positions.len();
        if index >= count {
            cwarn!(
                index,
                count,
                "invalid item index, expected a value in 0..count"
            );
            return Err(CarouselError::InvalidIndex { index, count });
        }
        self.commit(index, animate);
        Ok(())
    }

    /// Selects the next item, wrapping from the last to the first.
    pub fn next(&mut self) -> Result<(), CarouselError> {
        let count = self.ready_count()?;
        self.commit((self.current_index + 1) % count, true);
        Ok(())
    }

    /// Selects the previous item, wrapping from the first to the last.
    pub fn previous(&mut self) -> Result<(), CarouselError> {
        let count = self.ready_count()?;
        self.commit((self.current_index + count - 1) % count, true);
        Ok(())
    }

    /// Selects `index` clamped to the valid range.
    ///
    /// Unlike [`Self::set_selected_item`], out-of-range input is clamped rather than rejected.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        let count = self.ready_count()?;
        self.commit(index.min(count - 1), true);
        Ok(())
    }

    /// An item's activation surface (click/tap) fired.
    pub fn activate_item(&mut self, index: usize) -> Result<(), CarouselError> {
        self.set_selected_item(index, true)
    }

    fn ready_count(&self) -> Result<usize, CarouselError> {
        if self.ready {
            Ok(self.positions.len())
        } else {
            Err(CarouselError::NotReady)
        }
    }

    /// The user started dragging. Any in-flight snap stops where it is.
    pub fn on_begin_drag(&mut self) {
        ctrace!("on_begin_drag");
        self.is_dragging = true;
        self.cancel_snap();
    }

    /// The user released the drag; commits the item nearest to the current scroll position.
    pub fn on_end_drag(&mut self) -> Result<(), CarouselError> {
        ctrace!(scroll_position = self.scroll_position, "on_end_drag");
        self.is_dragging = false;
        if !self.ready {
            return Err(CarouselError::NotReady);
        }
        let Some(index) = nearest_index(self.scroll_position, &self.positions) else {
            return Err(CarouselError::NoItems);
        };
        self.commit(index, true);
        Ok(())
    }

    /// The host's scroll position changed (drag, wheel, inertia).
    ///
    /// Updates `scroll_position` and previews the item under it by driving the scale animations
    /// only; nothing is committed. Ignored while a snap is in flight, since the snap is the only
    /// writer of the scroll position then.
    pub fn on_scroll(&mut self, position: f32) {
        if self.snap.is_some() {
            return;
        }
        if position.is_nan() {
            return;
        }
        self.scroll_position = position.clamp(0.0, 1.0);
        if !self.ready {
            return;
        }

        let Some(index) = self
            .options
            .preview
            .resolve(self.scroll_position, &self.positions)
        else {
            return;
        };
        if self.emphasized_index() == Some(index) {
            return;
        }
        ctrace!(index, scroll_position = self.scroll_position, "preview");
        self.preview_index = (index != self.current_index).then_some(index);
        self.start_scale_transitions(index);
    }

    /// Stops the in-flight snap, leaving the scroll position where it is.
    pub fn cancel_snap(&mut self) {
        if self.snap.take().is_some() {
            ctrace!(scroll_position = self.scroll_position, "snap cancelled");
        }
    }

    fn commit(&mut self, index: usize, animate: bool) {
        cdebug!(index, animate, "commit");
        self.current_index = index;
        self.preview_index = None;
        self.start_scale_transitions(index);

        self.cancel_snap();
        let target = self.positions[index];
        if animate {
            self.start_snap(target);
        } else {
            self.write_scroll(target);
        }

        if let Some(cb) = &self.options.on_select {
            cb(index);
        }
    }

    fn next_handle(&mut self, slot: AnimationSlot) -> AnimationHandle {
        self.generation = self.generation.wrapping_add(1);
        AnimationHandle {
            slot,
            generation: self.generation,
        }
    }

    fn start_snap(&mut self, target: f32) -> AnimationHandle {
        let handle = self.next_handle(AnimationSlot::Snap);
        let from = self.scroll_position;
        ctrace!(from, to = target, "snap started");
        self.snap = Some(Live {
            handle,
            anim: RateTween::new(
                from,
                target,
                self.options.snap_speed,
                self.options.snap_easing,
            ),
        });
        handle
    }

    fn start_scale_transitions(&mut self, selected: usize) {
        for i in 0..self.scales.len() {
            let target = if i == selected {
                self.options.selected_scale
            } else {
                self.options.normal_scale
            };
            self.start_scale(i, target);
        }
    }

    fn start_scale(&mut self, index: usize, target: Scale) -> AnimationHandle {
        let handle = self.next_handle(AnimationSlot::Scale(index));
        let anim = ScaleTrack::start(
            self.scales[index],
            target,
            self.options.scale_policy,
            self.options.scale_transition_speed,
            self.options.scale_easing,
        );
        self.scale_tracks[index] = Some(Live { handle, anim });
        handle
    }

    fn write_scroll(&mut self, position: f32) {
        self.scroll_position = position;
        self.scroll_written = true;
    }

    /// Advances every live animation by `delta` seconds.
    ///
    /// Returns `true` while any animation is still in flight.
    pub fn tick(&mut self, delta: f32) -> bool {
        if !self.ready {
            return false;
        }

        if let Some(live) = &mut self.snap {
            let value = live.anim.advance(delta);
            let done = live.anim.is_done();
            self.scroll_position = value;
            self.scroll_written = true;
            if done {
                ctrace!(position = value, "snap finished");
                self.snap = None;
            }
        }

        let policy = self.options.scale_policy;
        for (i, track) in self.scale_tracks.iter_mut().enumerate() {
            let Some(live) = track else {
                continue;
            };
            let (value, done) = live.anim.advance(self.scales[i], delta, policy);
            self.scales[i] = value;
            self.dirty_scales[i] = true;
            if done {
                *track = None;
            }
        }

        self.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.snap.is_some() || self.scale_tracks.iter().any(Option::is_some)
    }

    pub fn is_snapping(&self) -> bool {
        self.snap.is_some()
    }

    /// The in-flight snap tween, if any.
    pub fn snap_tween(&self) -> Option<&RateTween<f32>> {
        self.snap.as_ref().map(|live| &live.anim)
    }

    pub fn snap_handle(&self) -> Option<AnimationHandle> {
        self.snap.map(|live| live.handle)
    }

    pub fn scale_handle(&self, index: usize) -> Option<AnimationHandle> {
        self.scale_tracks.get(index)?.map(|live| live.handle)
    }

    /// The scale an item is animating toward, if its animation is in flight.
    pub fn scale_target(&self, index: usize) -> Option<Scale> {
        self.scale_tracks.get(index)?.map(|live| live.anim.target())
    }

    /// Whether `handle` still identifies the animation in flight for its slot.
    ///
    /// Handles go stale when their animation finishes, is cancelled, or is replaced.
    pub fn is_live(&self, handle: AnimationHandle) -> bool {
        let current = match handle.slot {
            AnimationSlot::Snap => self.snap_handle(),
            AnimationSlot::Scale(index) => self.scale_handle(index),
        };
        current == Some(handle)
    }

    /// Returns the scroll position if the carousel wrote it since the last call.
    ///
    /// Positions reported by the host through `on_scroll` are never echoed back.
    pub fn take_scroll_write(&mut self) -> Option<f32> {
        core::mem::replace(&mut self.scroll_written, false).then_some(self.scroll_position)
    }

    /// Visits every item whose scale changed since the last call, clearing the dirty flags.
    pub fn for_each_dirty_scale(&mut self, mut f: impl FnMut(usize, Scale)) {
        for (i, dirty) in self.dirty_scales.iter_mut().enumerate() {
            if core::mem::replace(dirty, false) {
                f(i, self.scales[i]);
            }
        }
    }
}
