use carousel::{CarouselOptions, Scale, StripGeometry};
use carousel_adapter::{Controller, ItemActivator, ScrollHost};

// A stand-in for a real scroll container: it just remembers what the controller wrote.
#[derive(Debug, Default)]
struct PrintingHost {
    geometry: StripGeometry,
    scroll: f32,
    scales: Vec<Scale>,
    buttons: Vec<ItemActivator>,
}

impl ScrollHost for PrintingHost {
    fn geometry(&self) -> StripGeometry {
        self.geometry.clone()
    }

    fn set_scroll_position(&mut self, position: f32) {
        self.scroll = position;
    }

    fn set_item_scale(&mut self, index: usize, scale: Scale) {
        if index >= self.scales.len() {
            self.scales.resize(index + 1, Scale::ONE);
        }
        self.scales[index] = scale;
    }

    fn set_scroll_sensitivity(&mut self, sensitivity: f32) {
        println!("scroll sensitivity={sensitivity}");
    }

    fn bind_activator(&mut self, activator: ItemActivator) {
        self.buttons.push(activator);
    }
}

fn main() {
    let options = CarouselOptions::new();
    let host = PrintingHost {
        geometry: StripGeometry::sequential(5, 160.0, options.item_spacing, 320.0),
        ..PrintingHost::default()
    };
    let mut c = Controller::with_host(options, host);
    c.activate().expect("host attached");

    // An adapter would call tick_at(now) from its frame loop.
    let mut now_ms = 0u64;
    let mut run = |c: &mut Controller<PrintingHost>, label: &str| {
        while c.tick_at(now_ms) {
            now_ms += 16;
        }
        let host = c.host().expect("host attached");
        println!(
            "{label}: t={now_ms}ms index={:?} scroll={:.3} scales={:?}",
            c.carousel().current_index(),
            host.scroll,
            host.scales.iter().map(|s| s.x).collect::<Vec<_>>()
        );
    };

    run(&mut c, "setup");

    // A tap on the fourth item.
    let button = c.host().expect("host attached").buttons[3].clone();
    button.activate();
    run(&mut c, "tap item 3");

    // Drag toward the start and release.
    c.on_begin_drag();
    c.on_scroll(0.2);
    c.on_end_drag().expect("set up");
    run(&mut c, "drag release");

    c.next().expect("set up");
    run(&mut c, "next");
}
