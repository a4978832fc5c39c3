use carousel::{Carousel, CarouselError, CarouselOptions};

use crate::{ActivationQueue, FrameClock, ScrollHost};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SetupState {
    Inactive,
    Pending { frames_left: u32 },
    Ready,
}

/// A framework-neutral controller that wraps a [`Carousel`] and a [`ScrollHost`].
///
/// This type does not hold any UI objects itself. Adapters drive it by calling:
/// - `activate()` once the component is created
/// - `on_begin_drag` / `on_scroll` / `on_end_drag` when input events occur
/// - `tick(delta)` or `tick_at(now_ms)` each frame
///
/// Setup runs on the second tick after activation so the host's layout pass has settled.
/// Each tick handles queued item activations first, then advances the animations, then writes
/// the resulting scroll position and item scales back to the host.
#[derive(Debug)]
pub struct Controller<H> {
    carousel: Carousel,
    host: Option<H>,
    activations: ActivationQueue,
    clock: FrameClock,
    setup: SetupState,
}

impl<H: ScrollHost> Controller<H> {
    /// Creates a controller without a host; attach one before `activate`.
    pub fn new(options: CarouselOptions) -> Self {
        Self::from_carousel(Carousel::new(options))
    }

    pub fn with_host(options: CarouselOptions, host: H) -> Self {
        let mut c = Self::new(options);
        c.host = Some(host);
        c
    }

    pub fn from_carousel(carousel: Carousel) -> Self {
        Self {
            carousel,
            host: None,
            activations: ActivationQueue::new(),
            clock: FrameClock::new(),
            setup: SetupState::Inactive,
        }
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    pub fn into_carousel(self) -> Carousel {
        self.carousel
    }

    pub fn attach_host(&mut self, host: H) {
        self.host = Some(host);
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    pub fn clock_mut(&mut self) -> &mut FrameClock {
        &mut self.clock
    }

    pub fn is_ready(&self) -> bool {
        self.setup == SetupState::Ready && self.carousel.is_ready()
    }

    /// Forwards the drag sensitivity to the host and schedules setup.
    ///
    /// Fails with `MissingScrollHost` (and stays inert) when no host is attached. Does nothing
    /// once setup has completed; use [`Self::relayout`] when the host's items change.
    pub fn activate(&mut self) -> Result<(), CarouselError> {
        let Some(host) = self.host.as_mut() else {
            aerror!("scroll host reference is missing");
            return Err(CarouselError::MissingScrollHost);
        };
        if self.setup == SetupState::Ready {
            adebug!("Controller::activate: already set up");
            return Ok(());
        }
        host.set_scroll_sensitivity(self.carousel.options().drag_sensitivity);
        self.clock.reset();
        self.setup = SetupState::Pending { frames_left: 1 };
        adebug!("Controller::activate");
        Ok(())
    }

    /// Advances the controller by `delta` seconds.
    ///
    /// Returns `true` while another tick is needed (setup pending or animations in flight).
    pub fn tick(&mut self, delta: f32) -> bool {
        let Some(host) = self.host.as_mut() else {
            return false;
        };

        match self.setup {
            SetupState::Inactive => return false,
            SetupState::Pending { frames_left } if frames_left > 0 => {
                atrace!(frames_left, "setup deferred until layout settles");
                self.setup = SetupState::Pending {
                    frames_left: frames_left - 1,
                };
                return true;
            }
            SetupState::Pending { .. } => {
                if self.carousel.setup(&host.geometry()).is_err() {
                    self.setup = SetupState::Inactive;
                    return false;
                }
                for index in 0..self.carousel.item_count() {
                    host.bind_activator(self.activations.activator(index));
                }
                self.setup = SetupState::Ready;
            }
            SetupState::Ready => {}
        }

        let carousel = &mut self.carousel;
        self.activations.drain(|index| {
            let _ = carousel.activate_item(index);
        });

        let animating = self.carousel.tick(delta);
        write_back(&mut self.carousel, host);
        animating
    }

    /// Advances the controller using a millisecond timestamp (see [`FrameClock`]).
    pub fn tick_at(&mut self, now_ms: u64) -> bool {
        let delta = self.clock.delta_seconds(now_ms);
        self.tick(delta)
    }

    /// Re-reads geometry from the host after items were added, removed or resized.
    pub fn relayout(&mut self) -> Result<(), CarouselError> {
        let Some(host) = self.host.as_mut() else {
            aerror!("scroll host reference is missing");
            return Err(CarouselError::MissingScrollHost);
        };
        if self.setup != SetupState::Ready {
            return Err(CarouselError::NotReady);
        }

        let prev_count = self.carousel.item_count();
        let result = self.carousel.relayout(&host.geometry());
        if result.is_err() && !self.carousel.is_ready() {
            self.setup = SetupState::Inactive;
            return result;
        }
        for index in prev_count..self.carousel.item_count() {
            host.bind_activator(self.activations.activator(index));
        }
        write_back(&mut self.carousel, host);
        result
    }

    pub fn on_begin_drag(&mut self) {
        self.carousel.on_begin_drag();
    }

    /// The host's scroll position changed. Never echoed back to the host.
    pub fn on_scroll(&mut self, position: f32) {
        self.carousel.on_scroll(position);
    }

    pub fn on_end_drag(&mut self) -> Result<(), CarouselError> {
        let result = self.carousel.on_end_drag();
        self.flush();
        result
    }

    pub fn set_selected_item(&mut self, index: usize, animate: bool) -> Result<(), CarouselError> {
        let result = self.carousel.set_selected_item(index, animate);
        self.flush();
        result
    }

    pub fn next(&mut self) -> Result<(), CarouselError> {
        let result = self.carousel.next();
        self.flush();
        result
    }

    pub fn previous(&mut self) -> Result<(), CarouselError> {
        let result = self.carousel.previous();
        self.flush();
        result
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        let result = self.carousel.go_to(index);
        self.flush();
        result
    }

    /// Writes any pending scroll position and scales to the host immediately.
    pub fn flush(&mut self) {
        if let Some(host) = self.host.as_mut() {
            write_back(&mut self.carousel, host);
        }
    }
}

fn write_back<H: ScrollHost>(carousel: &mut Carousel, host: &mut H) {
    if let Some(position) = carousel.take_scroll_write() {
        host.set_scroll_position(position);
    }
    carousel.for_each_dirty_scale(|index, scale| host.set_item_scale(index, scale));
}
