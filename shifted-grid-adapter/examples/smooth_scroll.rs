use shifted_grid::{ElementKind, ElementProvider, GridOptions, Size, Viewport};
use shifted_grid_adapter::{Controller, Easing};

struct Tiles {
    len: usize,
    every: usize,
}

impl ElementProvider for Tiles {
    type View = usize;

    fn count(&self) -> usize {
        self.len
    }

    fn kind(&self, position: usize) -> ElementKind {
        if position % self.every == 0 {
            ElementKind::Header
        } else {
            ElementKind::Item {
                header: Some(position - position % self.every),
            }
        }
    }

    fn obtain(&mut self, position: usize) -> usize {
        position
    }

    fn recycle(&mut self, _kind: ElementKind, _view: usize) {}

    fn measure(&mut self, _view: &usize, kind: ElementKind, available_width: i32) -> Size {
        Size::new(available_width, if kind.is_header() { 24 } else { 64 })
    }
}

fn main() {
    // Example: a controller driving tween scrolling without holding any UI objects.
    //
    // An adapter would:
    // - start a tween (e.g. in response to a "scroll to position" command)
    // - call tick(now_ms, provider) in a frame loop / timer
    // - render the attached views from the grid
    let mut tiles = Tiles {
        len: 2_000,
        every: 13,
    };
    let mut c = Controller::new(
        GridOptions::new(3, 32).with_initial_viewport(Some(Viewport::new(720, 1280))),
    );
    c.tick(0, &mut tiles);

    let distance = c.smooth_scroll_to_position(1_000, 0, 240, Easing::SmoothStep);
    println!("distance={distance:?}");

    let mut now_ms = 0u64;
    while let Some(consumed) = c.tick(now_ms, &mut tiles) {
        if now_ms % 80 == 0 {
            println!(
                "t={now_ms} consumed={consumed} first={}",
                c.grid().first_visible_position()
            );
        }
        now_ms += 16;
    }

    println!(
        "done: first={} top={} attached={}",
        c.grid().first_visible_position(),
        c.grid().top_offset(),
        c.grid().child_count()
    );
}
