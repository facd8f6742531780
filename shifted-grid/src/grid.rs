use alloc::vec::Vec;

use crate::{
    AttachedView, DatasetIndex, ElementProvider, GridOptions, GridState, LayoutGeometry, Viewport,
};

/// A headless layout engine for a grid that staggers every second row, with optional section
/// headers and a trailing footer.
///
/// This type does not render anything:
/// - An [`ElementProvider`] supplies element roles and view handles, and takes them back for
///   recycling.
/// - The host reports its [`Viewport`] and forwards scroll deltas to [`Self::scroll_by`].
/// - After each pass the attached views and their frames are exposed via [`Self::children`].
///
/// For tween-driven smooth scrolling, see the `shifted-grid-adapter` crate.
#[derive(Clone, Debug)]
pub struct ShiftedGrid<V> {
    pub(crate) options: GridOptions,
    pub(crate) viewport: Viewport,
    pub(crate) geometry: LayoutGeometry,
    pub(crate) index: DatasetIndex,

    /// Row start anchored at the top of the viewport.
    pub(crate) first_visible: usize,
    /// Top offset to use on the next layout pass instead of the attached views' positions.
    pub(crate) pending_top: Option<i32>,
    /// Positions placed by the last fill pass.
    pub(crate) last_visible_count: usize,

    /// Sorted by position.
    pub(crate) children: Vec<AttachedView<V>>,
    layout_requested: bool,
}

impl<V> ShiftedGrid<V> {
    pub fn new(options: GridOptions) -> Self {
        vdebug!(
            column_count = options.column_count,
            offset_in_pixels = options.offset_in_pixels,
            initial_position = options.initial_position,
            "ShiftedGrid::new"
        );
        Self {
            viewport: options.initial_viewport.unwrap_or_default(),
            geometry: LayoutGeometry::new(options.column_count, options.offset_in_pixels),
            index: DatasetIndex::default(),
            first_visible: options.initial_position,
            pending_top: Some(0),
            last_visible_count: 0,
            children: Vec::new(),
            layout_requested: true,
            options,
        }
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn geometry(&self) -> &LayoutGeometry {
        &self.geometry
    }

    /// The dataset index built by the last layout pass.
    pub fn index(&self) -> &DatasetIndex {
        &self.index
    }

    pub fn first_visible_position(&self) -> usize {
        self.first_visible
    }

    /// Top of the first visible row relative to the top padding (zero or negative).
    pub fn top_offset(&self) -> i32 {
        match self.children.first() {
            Some(child) => child.frame.top - self.viewport.padding.top,
            None => self.pending_top.unwrap_or(0),
        }
    }

    /// Currently attached views, sorted by position.
    pub fn children(&self) -> &[AttachedView<V>] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn child_at(&self, position: usize) -> Option<&AttachedView<V>> {
        self.children
            .binary_search_by_key(&position, |c| c.position)
            .ok()
            .map(|i| &self.children[i])
    }

    /// Number of positions placed by the last pass.
    pub fn visible_count(&self) -> usize {
        self.last_visible_count
    }

    /// Whether a full layout pass has been requested since the last one.
    pub fn needs_layout(&self) -> bool {
        self.layout_requested
    }

    pub fn request_layout(&mut self) {
        self.layout_requested = true;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.viewport == viewport {
            return;
        }
        vtrace!(
            width = viewport.width,
            height = viewport.height,
            "ShiftedGrid::set_viewport"
        );
        self.viewport = viewport;
        self.request_layout();
    }

    /// Call when the provider's elements changed. The index is rebuilt on the next pass.
    pub fn on_dataset_changed(&mut self) {
        self.request_layout();
    }

    /// Call when the provider itself is replaced.
    ///
    /// Attached views belong to the previous provider and are dropped without recycling; role
    /// heights are measured again on the next pass.
    pub fn on_source_changed(&mut self) {
        vdebug!(dropped = self.children.len(), "ShiftedGrid::on_source_changed");
        self.children.clear();
        self.index = DatasetIndex::default();
        self.request_layout();
    }

    /// Anchors `position` at the top of the viewport on the next layout pass.
    ///
    /// Out-of-range positions are ignored. Any sub-row scroll offset is discarded.
    pub fn jump_to_position<P: ElementProvider>(&mut self, position: usize, provider: &P) {
        if position >= provider.count() {
            vtrace!(position, count = provider.count(), "jump_to_position: out of range");
            return;
        }
        self.pending_top = Some(0);
        self.first_visible = position;
        self.request_layout();
    }

    /// Returns a snapshot of the scroll cursor.
    pub fn saved_state(&self) -> GridState {
        GridState {
            first_visible_position: self.first_visible,
            top_offset: self.top_offset(),
        }
    }

    /// Restores a snapshot captured by [`Self::saved_state`] on the next layout pass.
    pub fn restore_state(&mut self, state: GridState) {
        self.first_visible = state.first_visible_position;
        self.pending_top = Some(state.top_offset.min(0));
        self.request_layout();
    }

    /// Runs a full layout pass: rebuilds the index, measures role heights when nothing is
    /// attached, resolves the scroll cursor and fills the viewport from scratch.
    pub fn layout<P: ElementProvider<View = V>>(&mut self, provider: &mut P) {
        self.layout_requested = false;
        self.geometry.item_width = self
            .geometry
            .item_width_for(self.viewport.horizontal_space());

        let count = provider.count();
        if count == 0 {
            vdebug!("layout: empty dataset");
            self.recycle_all(provider);
            self.index = DatasetIndex::default();
            self.first_visible = 0;
            self.last_visible_count = 0;
            self.pending_top = None;
            return;
        }

        self.index = DatasetIndex::build(count, |p| provider.kind(p));

        if self.children.is_empty() {
            self.measure_roles(provider);
        }

        let top = match self.pending_top.take() {
            Some(top) => Some(top),
            None => self
                .children
                .first()
                .map(|c| c.frame.top - self.viewport.padding.top),
        };
        let top = match top {
            Some(top) => {
                let top = self.fix_top_offset(top);
                self.fix_first_visible_position();
                top
            }
            None => {
                self.first_visible = 0;
                0
            }
        };

        self.recycle_all(provider);
        self.fill(None, top, provider);
        vtrace!(
            count,
            first = self.first_visible,
            top,
            placed = self.last_visible_count,
            "layout"
        );
    }

    /// Keeps the content from leaving whitespace: datasets shorter than the viewport are pinned
    /// to the top, and a top offset that would scroll past the end is pulled back.
    pub(crate) fn fix_top_offset(&mut self, top: i32) -> i32 {
        let content = self.geometry.content_height(&self.index);
        let space = self.viewport.vertical_space();
        if space > content {
            self.first_visible = 0;
            return 0;
        }
        if top < 0 { top.max(space - content) } else { top }
    }

    fn measure_roles<P: ElementProvider<View = V>>(&mut self, provider: &mut P) {
        let full_width = self.viewport.horizontal_space();

        if let Some(header) = self.index.groups().first().map(|g| g.header) {
            self.geometry.header_height = measure_height(provider, header, full_width);
        }
        if let Some(item) = self.index.first_item() {
            self.geometry.item_height = measure_height(provider, item, self.geometry.item_width);
        }
        if self.index.has_footer() {
            let footer = self.index.len() - 1;
            self.geometry.footer_height = measure_height(provider, footer, full_width);
        }

        vdebug!(
            item_width = self.geometry.item_width,
            item_height = self.geometry.item_height,
            header_height = self.geometry.header_height,
            footer_height = self.geometry.footer_height,
            "measure_roles"
        );
    }

    pub(crate) fn recycle_all<P: ElementProvider<View = V>>(&mut self, provider: &mut P) {
        for child in self.children.drain(..) {
            provider.recycle(child.kind, child.view);
        }
    }
}

fn measure_height<P: ElementProvider>(provider: &mut P, position: usize, available_width: i32) -> i32 {
    let kind = provider.kind(position);
    let view = provider.obtain(position);
    let size = provider.measure(&view, kind, available_width);
    provider.recycle(kind, view);
    size.height.max(0)
}
