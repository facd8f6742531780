use crate::Viewport;

/// Configuration for [`crate::ShiftedGrid`].
///
/// Fixed at construction; the grid never mutates it afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridOptions {
    /// Number of item columns. Values below 1 are clamped to 1.
    pub column_count: usize,
    /// Extra left offset applied to every second row of a group. Negative values are clamped
    /// to 0.
    pub offset_in_pixels: i32,
    /// The viewport to use until the host reports one.
    pub initial_viewport: Option<Viewport>,
    /// Position anchored at the top of the viewport on the first layout pass.
    pub initial_position: usize,
}

impl GridOptions {
    pub fn new(column_count: usize, offset_in_pixels: i32) -> Self {
        if column_count == 0 {
            vwarn!("GridOptions: column_count must be at least 1, using 1");
        }
        if offset_in_pixels < 0 {
            vwarn!(offset_in_pixels, "GridOptions: negative offset_in_pixels, using 0");
        }
        Self {
            column_count: column_count.max(1),
            offset_in_pixels: offset_in_pixels.max(0),
            initial_viewport: None,
            initial_position: 0,
        }
    }

    pub fn with_initial_viewport(mut self, viewport: Option<Viewport>) -> Self {
        self.initial_viewport = viewport;
        self
    }

    pub fn with_initial_position(mut self, position: usize) -> Self {
        self.initial_position = position;
        self
    }
}

impl Default for GridOptions {
    fn default() -> Self {
        Self::new(1, 0)
    }
}
