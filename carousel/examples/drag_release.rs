// Example: drag the strip, release, and watch the snap + scale transitions settle.
use carousel::{Carousel, CarouselOptions, StripGeometry};

fn main() {
    let options = CarouselOptions::new();
    let geometry = StripGeometry::sequential(4, 200.0, options.item_spacing, 400.0);

    let mut c = Carousel::new(options);
    c.setup(&geometry).expect("geometry has items");
    println!("positions={:?}", c.positions());

    // Simulate a 60fps host: input first, then tick.
    let frame = 1.0 / 60.0;
    c.on_begin_drag();
    for step in 1..=10 {
        c.on_scroll(0.07 * step as f32);
        c.tick(frame);
    }
    println!(
        "dragging: scroll={:.3} preview={:?} current={:?}",
        c.scroll_position(),
        c.preview_index(),
        c.current_index()
    );

    c.on_end_drag().expect("carousel is set up");
    let mut frames = 0;
    while c.tick(frame) {
        frames += 1;
        if frames % 4 == 0 {
            println!(
                "t={frames} scroll={:.3} scale[{:?}]={:?}",
                c.scroll_position(),
                c.current_index(),
                c.current_index().and_then(|i| c.item_scale(i))
            );
        }
    }

    println!("done: {:?}", c.snapshot());
}
