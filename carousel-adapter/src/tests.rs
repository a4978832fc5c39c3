use crate::*;

use alloc::vec::Vec;
use carousel::{CarouselError, CarouselOptions, CarouselPhase, Scale, StripGeometry};

const FRAME: f32 = 1.0 / 60.0;

#[derive(Debug, Default)]
struct FakeHost {
    geometry: StripGeometry,
    scroll: Option<f32>,
    scroll_writes: usize,
    scales: Vec<Option<Scale>>,
    sensitivity: Option<f32>,
    activators: Vec<ItemActivator>,
}

impl FakeHost {
    fn new(count: usize) -> Self {
        Self {
            geometry: StripGeometry::sequential(count, 100.0, 0.0, 100.0),
            ..Self::default()
        }
    }
}

impl ScrollHost for FakeHost {
    fn geometry(&self) -> StripGeometry {
        self.geometry.clone()
    }

    fn set_scroll_position(&mut self, position: f32) {
        self.scroll = Some(position);
        self.scroll_writes += 1;
    }

    fn set_item_scale(&mut self, index: usize, scale: Scale) {
        if index >= self.scales.len() {
            self.scales.resize(index + 1, None);
        }
        self.scales[index] = Some(scale);
    }

    fn set_scroll_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = Some(sensitivity);
    }

    fn bind_activator(&mut self, activator: ItemActivator) {
        self.activators.push(activator);
    }
}

fn settle(c: &mut Controller<FakeHost>) {
    for _ in 0..1000 {
        if !c.tick(FRAME) {
            return;
        }
    }
    panic!("controller did not settle");
}

fn ready(count: usize) -> Controller<FakeHost> {
    let mut c = Controller::with_host(CarouselOptions::new(), FakeHost::new(count));
    c.activate().unwrap();
    settle(&mut c);
    assert!(c.is_ready());
    c
}

fn host(c: &Controller<FakeHost>) -> &FakeHost {
    c.host().unwrap()
}

#[test]
fn activation_without_host_stays_inert() {
    let mut c: Controller<FakeHost> = Controller::new(CarouselOptions::new());
    assert_eq!(c.activate(), Err(CarouselError::MissingScrollHost));
    assert!(!c.tick(FRAME));
    assert_eq!(c.carousel().phase(), CarouselPhase::Uninitialized);
    assert_eq!(c.relayout(), Err(CarouselError::MissingScrollHost));
}

#[test]
fn setup_is_deferred_by_one_tick() {
    let mut c = Controller::with_host(
        CarouselOptions::new().with_drag_sensitivity(4.0),
        FakeHost::new(4),
    );
    assert!(!c.tick(FRAME));

    c.activate().unwrap();
    assert_eq!(host(&c).sensitivity, Some(4.0));

    assert!(c.tick(FRAME));
    assert!(!c.carousel().is_ready());
    assert!(host(&c).activators.is_empty());
    assert_eq!(host(&c).scroll, None);

    assert!(c.tick(FRAME));
    assert!(c.is_ready());
    assert_eq!(c.carousel().current_index(), Some(0));
    let bound = host(&c)
        .activators
        .iter()
        .map(ItemActivator::index)
        .collect::<Vec<_>>();
    assert_eq!(bound, [0, 1, 2, 3]);
    assert_eq!(host(&c).scales.len(), 4);
    assert!(host(&c).scales.iter().all(Option::is_some));
    assert!(host(&c).scroll.is_some());
}

#[test]
fn activating_a_ready_controller_keeps_its_state() {
    let mut c = ready(4);
    c.set_selected_item(2, false).unwrap();
    settle(&mut c);

    c.activate().unwrap();
    assert!(c.is_ready());
    assert!(!c.tick(FRAME));
    assert!(c.is_ready());
    assert_eq!(c.carousel().current_index(), Some(2));
    assert_eq!(host(&c).activators.len(), 4);
}

#[test]
fn empty_content_stays_inert() {
    let mut c = Controller::with_host(CarouselOptions::new(), FakeHost::new(0));
    c.activate().unwrap();
    assert!(c.tick(FRAME));
    assert!(!c.tick(FRAME));
    assert!(!c.is_ready());
    assert!(!c.tick(FRAME));
    assert_eq!(c.next(), Err(CarouselError::NotReady));
}

#[test]
fn item_activation_selects_on_next_tick() {
    let mut c = ready(4);
    let activator = host(&c).activators[2].clone();

    activator.activate();
    assert_eq!(c.carousel().current_index(), Some(0));

    c.tick(FRAME);
    assert_eq!(c.carousel().current_index(), Some(2));
    assert!(c.carousel().is_snapping());

    settle(&mut c);
    let target = c.carousel().positions()[2];
    assert_eq!(host(&c).scroll, Some(target));
    assert_eq!(host(&c).scales[2], Some(Scale::splat(1.2)));
}

#[test]
fn drag_input_is_not_echoed_back_to_host() {
    let mut c = ready(4);
    let writes = host(&c).scroll_writes;

    c.on_begin_drag();
    c.on_scroll(0.6);
    c.tick(FRAME);
    c.on_scroll(0.65);
    c.tick(FRAME);
    assert_eq!(host(&c).scroll_writes, writes);
    assert_eq!(c.carousel().preview_index(), Some(2));
    assert_eq!(c.carousel().current_index(), Some(0));

    c.on_end_drag().unwrap();
    assert_eq!(c.carousel().current_index(), Some(2));
    settle(&mut c);
    assert!(host(&c).scroll_writes > writes);
    assert_eq!(host(&c).scroll, Some(0.625));
    assert_eq!(host(&c).scales[2], Some(Scale::splat(1.2)));
    assert_eq!(host(&c).scales[0], Some(Scale::ONE));
}

#[test]
fn selection_without_animation_reaches_host_immediately() {
    let mut c = ready(4);
    c.set_selected_item(3, false).unwrap();
    assert_eq!(host(&c).scroll, Some(0.875));

    let writes = host(&c).scroll_writes;
    assert_eq!(
        c.set_selected_item(4, false),
        Err(CarouselError::InvalidIndex { index: 4, count: 4 })
    );
    assert_eq!(host(&c).scroll_writes, writes);
    assert_eq!(c.carousel().current_index(), Some(3));
}

#[test]
fn navigation_wraps_and_clamps() {
    let mut c = ready(3);
    c.previous().unwrap();
    assert_eq!(c.carousel().current_index(), Some(2));
    c.next().unwrap();
    assert_eq!(c.carousel().current_index(), Some(0));
    c.go_to(10).unwrap();
    assert_eq!(c.carousel().current_index(), Some(2));
    settle(&mut c);
    assert_eq!(host(&c).scroll, Some(c.carousel().positions()[2]));
}

#[test]
fn relayout_binds_added_items() {
    let mut c = ready(2);
    assert_eq!(host(&c).activators.len(), 2);

    c.host_mut().unwrap().geometry = StripGeometry::sequential(4, 100.0, 0.0, 100.0);
    c.relayout().unwrap();
    assert_eq!(c.carousel().item_count(), 4);
    assert_eq!(host(&c).activators.len(), 4);
    assert_eq!(host(&c).scroll, Some(0.125));

    c.host_mut().unwrap().geometry = StripGeometry::default();
    assert_eq!(c.relayout(), Err(CarouselError::NoItems));
    assert!(!c.is_ready());
    assert_eq!(c.relayout(), Err(CarouselError::NotReady));
}

#[test]
fn activation_queue_preserves_order() {
    let queue = ActivationQueue::new();
    let a = queue.activator(3);
    let b = queue.activator(1);
    b.activate();
    a.activate();
    b.activate();
    assert_eq!(queue.len(), 3);

    let mut seen = Vec::new();
    queue.drain(|i| seen.push(i));
    assert_eq!(seen, [1, 3, 1]);
    assert!(queue.is_empty());
}

#[test]
fn frame_clock_yields_capped_deltas() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.delta_seconds(1000), 0.0);
    assert_eq!(clock.delta_seconds(1016), 0.016);
    assert_eq!(clock.delta_seconds(5000), 0.25);

    // A host timer reset rebases the clock instead of freezing it.
    assert_eq!(clock.delta_seconds(10), 0.0);
    assert_eq!(clock.last_ms(), Some(10));
    assert_eq!(clock.delta_seconds(26), 0.016);

    let mut c = Controller::with_host(CarouselOptions::new(), FakeHost::new(3));
    c.activate().unwrap();
    let mut now_ms = 0u64;
    while c.tick_at(now_ms) {
        now_ms += 16;
        assert!(now_ms < 10_000);
    }
    assert!(c.is_ready());
    assert_eq!(host(&c).scroll, Some(c.carousel().positions()[0]));
}
