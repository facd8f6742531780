// Example: the sample dataset (100 elements, 4 columns, 9 headers) with a view pool.
use shifted_grid::{ElementKind, ElementProvider, GridOptions, ShiftedGrid, Size, Viewport};

const HEADERS: [usize; 9] = [0, 3, 10, 27, 39, 42, 65, 73, 89];

struct Labels {
    kinds: Vec<ElementKind>,
    pool: Vec<String>,
    created: usize,
}

impl ElementProvider for Labels {
    type View = String;

    fn count(&self) -> usize {
        self.kinds.len()
    }

    fn kind(&self, position: usize) -> ElementKind {
        self.kinds[position]
    }

    fn obtain(&mut self, position: usize) -> String {
        let mut label = self.pool.pop().unwrap_or_else(|| {
            self.created += 1;
            String::new()
        });
        label.clear();
        label.push_str(&format!("#{position}"));
        label
    }

    fn recycle(&mut self, _kind: ElementKind, view: String) {
        self.pool.push(view);
    }

    fn measure(&mut self, _view: &String, kind: ElementKind, available_width: i32) -> Size {
        let height = if kind.is_header() { 48 } else { 96 };
        Size::new(available_width, height)
    }
}

fn main() {
    let mut current = None;
    let kinds = (0..100)
        .map(|p| {
            if HEADERS.contains(&p) {
                current = Some(p);
                ElementKind::Header
            } else {
                ElementKind::Item { header: current }
            }
        })
        .collect();
    let mut labels = Labels {
        kinds,
        pool: Vec::new(),
        created: 0,
    };

    let mut grid = ShiftedGrid::new(
        GridOptions::new(4, 40).with_initial_viewport(Some(Viewport::new(1080, 1920))),
    );
    grid.layout(&mut labels);
    println!(
        "first={} attached={} created={}",
        grid.first_visible_position(),
        grid.child_count(),
        labels.created
    );

    for _ in 0..10 {
        let consumed = grid.scroll_by(400, &mut labels);
        println!(
            "scrolled={consumed} first={} top={} attached={} pooled={} created={}",
            grid.first_visible_position(),
            grid.top_offset(),
            grid.child_count(),
            labels.pool.len(),
            labels.created
        );
    }

    if let Some(vector) = grid.smooth_scroll_vector(0) {
        println!("back to top: dy={}", vector.y);
    }
    for child in grid.children().iter().take(6) {
        println!("{} {:?} {:?}", child.view, child.kind, child.frame);
    }
}
