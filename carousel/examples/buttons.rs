// Example: programmatic navigation (next/previous/go_to) with wrap-around and clamping.
use carousel::{Carousel, CarouselOptions};

fn settle(c: &mut Carousel) -> usize {
    let mut frames = 0;
    while c.tick(1.0 / 60.0) {
        frames += 1;
    }
    frames
}

fn main() {
    let mut c = Carousel::new(CarouselOptions::new().with_on_select(Some(|index: usize| {
        println!("selected {index}");
    })));
    c.setup_uniform(5).expect("five items");
    settle(&mut c);

    c.previous().expect("set up");
    println!("previous from 0 -> {:?} ({} frames)", c.current_index(), settle(&mut c));

    c.next().expect("set up");
    println!("next from 4 -> {:?} ({} frames)", c.current_index(), settle(&mut c));

    c.go_to(42).expect("set up");
    println!("go_to(42) -> {:?} scroll={}", c.current_index(), {
        settle(&mut c);
        c.scroll_position()
    });

    if let Err(err) = c.set_selected_item(42, true) {
        println!("rejected: {err}");
    }
}
