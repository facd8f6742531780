use crate::*;

use alloc::vec::Vec;

const ITEM_HEIGHT: i32 = 50;
const HEADER_HEIGHT: i32 = 30;
const FOOTER_HEIGHT: i32 = 40;

/// Header positions of the sample dataset (100 elements, 4 columns).
const SAMPLE_HEADERS: [usize; 9] = [0, 3, 10, 27, 39, 42, 65, 73, 89];

#[derive(Debug)]
struct TestView {
    id: usize,
    position: usize,
}

#[derive(Debug, Default)]
struct TestProvider {
    kinds: Vec<ElementKind>,
    pool: Vec<TestView>,
    created: usize,
    recycled: usize,
}

impl TestProvider {
    fn new(kinds: Vec<ElementKind>) -> Self {
        Self {
            kinds,
            ..Self::default()
        }
    }
}

impl ElementProvider for TestProvider {
    type View = TestView;

    fn count(&self) -> usize {
        self.kinds.len()
    }

    fn kind(&self, position: usize) -> ElementKind {
        self.kinds[position]
    }

    fn obtain(&mut self, position: usize) -> TestView {
        if let Some(mut view) = self.pool.pop() {
            view.position = position;
            return view;
        }
        self.created += 1;
        TestView {
            id: self.created,
            position,
        }
    }

    fn recycle(&mut self, _kind: ElementKind, view: TestView) {
        self.recycled += 1;
        self.pool.push(view);
    }

    fn measure(&mut self, _view: &TestView, kind: ElementKind, available_width: i32) -> Size {
        let height = match kind {
            ElementKind::Header => HEADER_HEIGHT,
            ElementKind::Item { .. } => ITEM_HEIGHT,
            ElementKind::Footer => FOOTER_HEIGHT,
        };
        Size::new(available_width, height)
    }
}

fn kinds(len: usize, headers: &[usize], footer: bool) -> Vec<ElementKind> {
    let mut current = None;
    (0..len)
        .map(|p| {
            if footer && p + 1 == len {
                ElementKind::Footer
            } else if headers.contains(&p) {
                current = Some(p);
                ElementKind::Header
            } else {
                ElementKind::Item { header: current }
            }
        })
        .collect()
}

fn sample_kinds() -> Vec<ElementKind> {
    kinds(100, &SAMPLE_HEADERS, false)
}

fn grid(columns: usize, stagger: i32, width: i32, height: i32) -> ShiftedGrid<TestView> {
    ShiftedGrid::new(
        GridOptions::new(columns, stagger).with_initial_viewport(Some(Viewport::new(width, height))),
    )
}

fn measured_geometry(columns: usize) -> LayoutGeometry {
    LayoutGeometry {
        item_width: 100,
        item_height: ITEM_HEIGHT,
        header_height: HEADER_HEIGHT,
        footer_height: FOOTER_HEIGHT,
        column_count: columns,
        stagger: 20,
    }
}

fn assert_contiguous(g: &ShiftedGrid<TestView>) {
    let first = g.first_visible_position();
    for (i, child) in g.children().iter().enumerate() {
        assert_eq!(child.position, first + i, "positions must be placed once, in order");
        assert_eq!(child.view.position, child.position);
    }
}

#[test]
fn dataset_index_records_groups() {
    let kinds = sample_kinds();
    let index = DatasetIndex::build(kinds.len(), |p| kinds[p]);

    assert_eq!(index.len(), 100);
    assert!(index.has_headers());
    assert!(!index.has_footer());
    assert_eq!(index.groups().len(), SAMPLE_HEADERS.len());

    let counts: Vec<usize> = index.groups().iter().map(|g| g.items).collect();
    assert_eq!(counts, vec![2, 6, 16, 11, 2, 22, 7, 15, 10]);
    assert_eq!(index.items_under(42), Some(22));
    assert_eq!(index.items_under(43), None);

    assert_eq!(index.header_for(42), Some(42));
    assert_eq!(index.header_for(50), Some(42));
    assert_eq!(index.header_for(99), Some(89));
    assert_eq!(index.position_in_group(50), 7);
    assert_eq!(index.group_items_at(50), 22);
    assert_eq!(index.first_item(), Some(1));
}

#[test]
fn dataset_index_without_headers_has_no_owner() {
    let kinds = kinds(10, &[], true);
    let index = DatasetIndex::build(kinds.len(), |p| kinds[p]);

    assert!(!index.has_headers());
    assert!(index.has_footer());
    assert!(index.is_footer(9));
    assert_eq!(index.leading_items(), 9);
    assert_eq!(index.header_for(5), None);
    assert_eq!(index.position_in_group(5), 5);
    assert_eq!(index.first_item(), Some(0));
}

#[test]
fn footer_outside_last_position_is_ignored() {
    let mut kinds = kinds(5, &[], false);
    kinds[2] = ElementKind::Footer;
    let index = DatasetIndex::build(kinds.len(), |p| kinds[p]);
    assert!(!index.has_footer());
    assert!(!index.is_footer(4));
}

#[test]
fn height_of_follows_role() {
    let kinds = kinds(12, &[0, 5], true);
    let index = DatasetIndex::build(kinds.len(), |p| kinds[p]);
    let geometry = measured_geometry(4);

    assert_eq!(geometry.height_of(&index, 0), HEADER_HEIGHT);
    assert_eq!(geometry.height_of(&index, 3), ITEM_HEIGHT);
    assert_eq!(geometry.height_of(&index, 11), FOOTER_HEIGHT);
    // 2 headers + (1 + 2) item rows + footer
    assert_eq!(
        geometry.content_height(&index),
        2 * HEADER_HEIGHT + 3 * ITEM_HEIGHT + FOOTER_HEIGHT
    );
}

#[test]
fn position_offset_realigns_on_group_boundaries() {
    let kinds = sample_kinds();
    let index = DatasetIndex::build(kinds.len(), |p| kinds[p]);
    let geometry = measured_geometry(4);

    assert_eq!(geometry.position_offset(&index, Direction::Down, 0), 1);
    // Group 0 owns items 1..=2; header 3 follows.
    assert_eq!(geometry.position_offset(&index, Direction::Down, 1), 2);
    assert_eq!(geometry.position_offset(&index, Direction::Down, 11), 4);
    assert_eq!(geometry.position_offset(&index, Direction::Down, 23), 4);

    // Previous group has 2 items: the last row holds both.
    assert_eq!(geometry.position_offset(&index, Direction::Up, 3), -2);
    // Previous group has 16 items: a full last row.
    assert_eq!(geometry.position_offset(&index, Direction::Up, 27), -4);
    // First item row goes back to its header.
    assert_eq!(geometry.position_offset(&index, Direction::Up, 43), -1);
    assert_eq!(geometry.position_offset(&index, Direction::Up, 47), -4);
    assert_eq!(geometry.position_offset(&index, Direction::Up, 0), 0);
}

#[test]
fn position_offset_without_headers_is_column_count() {
    let kinds = kinds(90, &[], false);
    let index = DatasetIndex::build(kinds.len(), |p| kinds[p]);
    let geometry = measured_geometry(4);

    assert_eq!(geometry.position_offset(&index, Direction::Down, 8), 4);
    assert_eq!(geometry.position_offset(&index, Direction::Up, 8), -4);
    assert_eq!(geometry.step(&index, Direction::Down, 88), None);
    assert_eq!(geometry.step(&index, Direction::Up, 0), None);
}

#[test]
fn window_len_without_headers_is_closed_form() {
    let kinds = kinds(90, &[], false);
    let index = DatasetIndex::build(kinds.len(), |p| kinds[p]);
    let geometry = measured_geometry(4);

    // A viewport exactly 5 rows tall: (ceil(250 / 50) + 1) * 4.
    assert_eq!(window_len(&geometry, &index, 0, 5 * ITEM_HEIGHT), 24);
}

#[test]
fn window_len_walks_groups() {
    let kinds = kinds(91, &[0], false);
    let index = DatasetIndex::build(kinds.len(), |p| kinds[p]);
    let geometry = measured_geometry(4);

    // Header (30) + 5 item rows (250) consume 280 > 250.
    assert_eq!(window_len(&geometry, &index, 0, 250), 21);
    // Starting mid-group only counts the items left in it.
    assert_eq!(window_len(&geometry, &index, 85, 1000), 6);
}

#[test]
fn single_header_places_first_item_below_it() {
    let mut provider = TestProvider::new(kinds(91, &[0], false));
    let mut g = grid(4, 20, 420, 300);
    g.layout(&mut provider);

    assert!(!g.needs_layout());
    assert_eq!(g.geometry().item_width, 100);
    assert_eq!(g.geometry().header_height, HEADER_HEIGHT);
    assert_eq!(g.geometry().item_height, ITEM_HEIGHT);

    let header = g.child_at(0).unwrap();
    assert_eq!(header.kind, ElementKind::Header);
    assert_eq!(header.frame, Frame::new(0, 0, 420, HEADER_HEIGHT));

    // Row 0, column 0, directly below the header.
    assert_eq!(g.child_at(1).unwrap().frame, Frame::new(0, HEADER_HEIGHT, 100, ITEM_HEIGHT));
    assert_eq!(g.child_at(4).unwrap().frame.left, 300);
    // Row 1 is staggered.
    assert_eq!(g.child_at(5).unwrap().frame, Frame::new(20, 80, 100, ITEM_HEIGHT));
    assert_eq!(g.child_at(9).unwrap().frame, Frame::new(0, 130, 100, ITEM_HEIGHT));

    assert_eq!(g.visible_count(), 29);
    assert_contiguous(&g);
}

#[test]
fn rows_start_on_group_columns_and_move_down() {
    let mut provider = TestProvider::new(sample_kinds());
    let mut g = grid(4, 20, 420, 800);
    g.layout(&mut provider);
    assert_contiguous(&g);

    let index = g.index().clone();
    let mut prev_row_top: Option<i32> = None;
    for child in g.children() {
        let starts_row = match child.kind {
            ElementKind::Item { .. } => index.position_in_group(child.position) % 4 == 0,
            _ => true,
        };
        if starts_row {
            if let Some(prev) = prev_row_top {
                assert!(child.frame.top > prev, "row at {} must be lower", child.position);
            }
            prev_row_top = Some(child.frame.top);
        } else {
            assert_eq!(Some(child.frame.top), prev_row_top);
        }
    }
}

#[test]
fn odd_rows_are_staggered() {
    let mut provider = TestProvider::new(kinds(60, &[], false));
    let mut g = grid(3, 15, 315, 400);
    g.layout(&mut provider);
    assert_eq!(g.geometry().item_width, 100);

    for child in g.children() {
        let row = child.position / 3;
        let column = child.position % 3;
        let baseline = if row % 2 == 1 { 15 } else { 0 };
        assert_eq!(child.frame.left, baseline + column as i32 * 100);
    }
}

#[test]
fn empty_dataset_clears_views() {
    let mut provider = TestProvider::new(kinds(20, &[], false));
    let mut g = grid(4, 0, 400, 300);
    g.layout(&mut provider);
    let attached = g.child_count();
    assert!(attached > 0);

    let recycled_before = provider.recycled;
    provider.kinds.clear();
    g.on_dataset_changed();
    g.layout(&mut provider);

    assert_eq!(g.child_count(), 0);
    assert_eq!(provider.recycled - recycled_before, attached);
    assert_eq!(g.scroll_by(10, &mut provider), 0);
    assert_eq!(g.smooth_scroll_vector(0), None);
}

#[test]
fn dataset_smaller_than_viewport_does_not_scroll() {
    let mut provider = TestProvider::new(kinds(6, &[], false));
    let mut g = grid(4, 0, 400, 300);
    g.layout(&mut provider);

    assert_eq!(g.child_count(), 6);
    assert_eq!(g.scroll_by(50, &mut provider), 0);
    assert_eq!(g.scroll_by(-50, &mut provider), 0);
    assert_eq!(g.child_at(0).unwrap().frame.top, 0);
}

#[test]
fn scroll_up_at_top_is_clamped() {
    let mut provider = TestProvider::new(sample_kinds());
    let mut g = grid(4, 20, 420, 300);
    g.set_viewport(Viewport::new(420, 300).with_padding(Insets {
        left: 0,
        top: 10,
        right: 0,
        bottom: 0,
    }));
    g.layout(&mut provider);

    assert_eq!(g.child_at(0).unwrap().frame.top, 10);
    assert_eq!(g.scroll_by(-10_000, &mut provider), 0);
    assert_eq!(g.child_at(0).unwrap().frame.top, 10);
    assert_eq!(g.first_visible_position(), 0);
}

#[test]
fn scroll_down_reuses_views_still_visible() {
    let mut provider = TestProvider::new(kinds(91, &[0], false));
    let mut g = grid(4, 20, 420, 300);
    g.layout(&mut provider);

    let ids_before: Vec<(usize, usize)> = g
        .children()
        .iter()
        .map(|c| (c.position, c.view.id))
        .collect();

    assert_eq!(g.scroll_by(60, &mut provider), 60);

    // The header left the viewport; the first item row is now the anchor.
    assert_eq!(g.first_visible_position(), 1);
    assert_eq!(g.top_offset(), -30);
    assert!(g.child_at(0).is_none());
    assert_eq!(g.child_count(), 32);
    assert_contiguous(&g);

    for (position, id) in ids_before.into_iter().filter(|&(p, _)| p >= 1) {
        assert_eq!(g.child_at(position).unwrap().view.id, id);
    }
    // Newly exposed row 7 (odd, staggered) follows row 6 at 270.
    assert_eq!(g.child_at(29).unwrap().frame, Frame::new(20, 320, 100, ITEM_HEIGHT));
}

#[test]
fn scroll_back_up_materializes_header() {
    let mut provider = TestProvider::new(sample_kinds());
    let mut g = grid(4, 20, 420, 300);
    g.layout(&mut provider);

    assert_eq!(g.scroll_by(75, &mut provider), 75);
    assert_eq!(g.first_visible_position(), 1);
    assert_eq!(g.child_at(1).unwrap().frame.top, -45);

    assert_eq!(g.scroll_by(-60, &mut provider), 60);
    assert_eq!(g.first_visible_position(), 0);
    assert_eq!(g.child_at(0).unwrap().frame.top, -15);
    assert_eq!(g.child_at(1).unwrap().frame.top, 15);
    assert_contiguous(&g);

    // Only 15px left before the top boundary.
    assert_eq!(g.scroll_by(-1000, &mut provider), 15);
    assert_eq!(g.child_at(0).unwrap().frame.top, 0);
}

#[test]
fn scroll_down_stops_at_end_of_content() {
    let mut provider = TestProvider::new(kinds(90, &[], false));
    let mut g = grid(4, 0, 400, 300);
    g.layout(&mut provider);

    // 23 rows of 50px in a 300px viewport.
    assert_eq!(g.scroll_by(100_000, &mut provider), 850);
    assert_eq!(g.first_visible_position(), 68);
    assert_eq!(g.child_at(89).unwrap().frame.bottom, 300);
    assert_contiguous(&g);

    assert_eq!(g.scroll_by(100, &mut provider), 0);
    assert_eq!(g.child_at(89).unwrap().frame.bottom, 300);
}

#[test]
fn shrinking_dataset_pulls_cursor_back() {
    let mut provider = TestProvider::new(kinds(90, &[], false));
    let mut g = grid(4, 0, 400, 300);
    g.layout(&mut provider);
    g.scroll_by(100_000, &mut provider);
    assert_eq!(g.first_visible_position(), 68);

    provider.kinds.truncate(40);
    g.on_dataset_changed();
    g.layout(&mut provider);

    // 40 - (22 - 1) = 19, aligned down to the start of its row.
    assert_eq!(g.first_visible_position(), 16);
    assert!(g.children().iter().all(|c| c.position < 40));
    assert_eq!(g.child_at(39).unwrap().frame.bottom, 300);
    assert_contiguous(&g);
}

#[test]
fn smooth_scroll_vector_sums_intervening_groups_once() {
    let mut provider = TestProvider::new(sample_kinds());
    let mut g = grid(4, 20, 420, 300);
    g.layout(&mut provider);

    // Headers 0, 3, 10, 27, 39, 42 and rows 1 + 2 + 4 + 3 + 1 + 1 above position 50.
    let expected = 6 * HEADER_HEIGHT + 12 * ITEM_HEIGHT;
    assert_eq!(
        g.smooth_scroll_vector(50),
        Some(ScrollVector { x: 0, y: expected })
    );
    assert_eq!(g.smooth_scroll_vector(42).unwrap().y, 5 * HEADER_HEIGHT + 11 * ITEM_HEIGHT);
    assert_eq!(g.smooth_scroll_vector(43).unwrap().y, 6 * HEADER_HEIGHT + 11 * ITEM_HEIGHT);
    assert_eq!(g.smooth_scroll_vector(0).unwrap().y, 0);
    assert_eq!(g.smooth_scroll_vector(100), None);

    g.jump_to_position(50, &provider);
    g.layout(&mut provider);
    assert_eq!(g.first_visible_position(), 47);
    assert_eq!(g.smooth_scroll_vector(0).unwrap().y, -expected);
    assert_eq!(g.smooth_scroll_vector(42).unwrap().y, -ITEM_HEIGHT - HEADER_HEIGHT);
}

#[test]
fn jump_to_position_ignores_out_of_range() {
    let mut provider = TestProvider::new(sample_kinds());
    let mut g = grid(4, 20, 420, 300);
    g.layout(&mut provider);

    g.jump_to_position(100, &provider);
    assert!(!g.needs_layout());
    assert_eq!(g.first_visible_position(), 0);

    g.jump_to_position(50, &provider);
    assert!(g.needs_layout());
    g.layout(&mut provider);

    // Snapped to the start of the second row of group 42, which is staggered.
    assert_eq!(g.first_visible_position(), 47);
    assert_eq!(g.child_at(47).unwrap().frame, Frame::new(20, 0, 100, ITEM_HEIGHT));
    assert_contiguous(&g);
}

#[test]
fn jump_clears_sub_row_offset() {
    let mut provider = TestProvider::new(kinds(90, &[], false));
    let mut g = grid(4, 0, 400, 300);
    g.layout(&mut provider);
    g.scroll_by(70, &mut provider);
    assert_eq!(g.top_offset(), -20);

    g.jump_to_position(13, &provider);
    g.layout(&mut provider);
    assert_eq!(g.first_visible_position(), 12);
    assert_eq!(g.top_offset(), 0);
}

#[test]
fn footer_is_placed_after_last_row() {
    let mut provider = TestProvider::new(kinds(12, &[0, 5], true));
    let mut g = grid(4, 20, 420, 600);
    g.layout(&mut provider);

    assert_eq!(g.geometry().footer_height, FOOTER_HEIGHT);
    assert_eq!(g.child_count(), 12);
    let footer = g.child_at(11).unwrap();
    assert_eq!(footer.kind, ElementKind::Footer);
    // header, row, header, row, row
    let top = 2 * HEADER_HEIGHT + 3 * ITEM_HEIGHT;
    assert_eq!(footer.frame, Frame::new(0, top, 420, FOOTER_HEIGHT));
}

#[test]
fn saved_state_restores_cursor() {
    let mut provider = TestProvider::new(sample_kinds());
    let mut g = grid(4, 20, 420, 300);
    g.layout(&mut provider);
    g.scroll_by(75, &mut provider);

    let state = g.saved_state();
    assert_eq!(
        state,
        GridState {
            first_visible_position: 1,
            top_offset: -45,
        }
    );

    let mut other_provider = TestProvider::new(sample_kinds());
    let mut restored = grid(4, 20, 420, 300);
    restored.restore_state(state);
    restored.layout(&mut other_provider);

    assert_eq!(restored.first_visible_position(), 1);
    assert_eq!(restored.top_offset(), -45);
    assert_eq!(restored.child_at(1).unwrap().frame.top, -45);
}

#[test]
fn source_change_drops_views_and_remeasures() {
    let mut provider = TestProvider::new(kinds(30, &[], false));
    let mut g = grid(4, 0, 400, 300);
    g.layout(&mut provider);
    assert!(g.child_count() > 0);

    let recycled_before = provider.recycled;
    g.on_source_changed();
    assert_eq!(g.child_count(), 0);
    assert!(g.needs_layout());
    assert_eq!(provider.recycled, recycled_before);

    let mut next = TestProvider::new(kinds(30, &[0], false));
    g.layout(&mut next);
    assert_eq!(g.geometry().header_height, HEADER_HEIGHT);
    assert_eq!(g.child_at(0).unwrap().kind, ElementKind::Header);
}

#[test]
fn options_clamp_invalid_values() {
    let options = GridOptions::new(0, -5);
    assert_eq!(options.column_count, 1);
    assert_eq!(options.offset_in_pixels, 0);
}

#[test]
fn scroll_after_shrink_lays_out_against_new_count() {
    let mut provider = TestProvider::new(sample_kinds());
    let mut g = grid(4, 20, 420, 300);
    g.layout(&mut provider);

    provider.kinds.truncate(10);
    g.on_dataset_changed();
    // Ten elements fit in the viewport.
    assert_eq!(g.scroll_by(200, &mut provider), 0);
    assert!(!g.needs_layout());
    assert_eq!(g.index().len(), 10);
    assert_eq!(g.child_count(), 10);
    assert_contiguous(&g);
}

#[test]
fn scroll_after_shrink_clamps_to_new_end() {
    let mut provider = TestProvider::new(sample_kinds());
    let mut g = grid(4, 20, 420, 300);
    g.layout(&mut provider);
    g.scroll_by(300, &mut provider);

    provider.kinds.truncate(30);
    g.on_dataset_changed();
    g.scroll_by(1000, &mut provider);

    assert!(g.children().iter().all(|c| c.position < 30));
    assert_eq!(g.child_at(29).unwrap().frame.bottom, 300);
    assert_contiguous(&g);
}

fn assert_rows_match_content(g: &ShiftedGrid<TestView>) {
    let geometry = g.geometry();
    let index = g.index();
    let first = &g.children()[0];
    let content_top = first.frame.top - geometry.row_offset(index, first.position);
    for child in g.children() {
        assert_eq!(
            child.frame.top,
            content_top + geometry.row_offset(index, child.position),
            "position {} is off its row",
            child.position
        );
    }
}

#[test]
fn scroll_sweep_across_groups_and_footer() {
    for step in [7, 37, 50, 113, 333, 1000] {
        let mut provider = TestProvider::new(kinds(101, &SAMPLE_HEADERS, true));
        let mut g = grid(4, 20, 420, 300);
        g.layout(&mut provider);
        assert!(g.index().has_footer());

        let scrollable = g.geometry().content_height(g.index()) - g.viewport().vertical_space();

        let mut down = 0;
        for _ in 0..1000 {
            let consumed = g.scroll_by(step, &mut provider);
            if consumed == 0 {
                break;
            }
            down += consumed;
            assert_contiguous(&g);
            assert_rows_match_content(&g);
        }
        assert_eq!(down, scrollable, "step {step}");
        let footer = g.child_at(100).unwrap();
        assert_eq!(footer.kind, ElementKind::Footer);
        assert_eq!(footer.frame.bottom, 300);

        let mut up = 0;
        for _ in 0..1000 {
            let consumed = g.scroll_by(-step, &mut provider);
            if consumed == 0 {
                break;
            }
            up -= consumed;
            assert_contiguous(&g);
            assert_rows_match_content(&g);
        }
        assert_eq!(up, scrollable, "step {step}");
        assert_eq!(g.first_visible_position(), 0);
        assert_eq!(g.top_offset(), 0);
    }
}
