use crate::{DatasetIndex, Direction, ElementKind};

/// Layout scalars shared by the geometry helpers and the window resolver.
///
/// Heights are measured once from the first element of each role; widths follow the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutGeometry {
    pub item_width: i32,
    pub item_height: i32,
    pub header_height: i32,
    pub footer_height: i32,
    /// Always at least 1.
    pub column_count: usize,
    /// Extra left offset applied to every odd row inside a group.
    pub stagger: i32,
}

impl Default for LayoutGeometry {
    fn default() -> Self {
        Self {
            item_width: 0,
            item_height: 0,
            header_height: 0,
            footer_height: 0,
            column_count: 1,
            stagger: 0,
        }
    }
}

impl LayoutGeometry {
    pub fn new(column_count: usize, stagger: i32) -> Self {
        Self {
            column_count: column_count.max(1),
            stagger: stagger.max(0),
            ..Self::default()
        }
    }

    pub fn columns(&self) -> usize {
        self.column_count.max(1)
    }

    pub fn height_for(&self, kind: ElementKind) -> i32 {
        match kind {
            ElementKind::Header => self.header_height,
            ElementKind::Item { .. } => self.item_height,
            ElementKind::Footer => self.footer_height,
        }
    }

    /// Height of the row started by `position`; equals the distance to the next row's top.
    pub fn height_of(&self, index: &DatasetIndex, position: usize) -> i32 {
        if index.is_header(position) {
            self.header_height
        } else if index.is_footer(position) {
            self.footer_height
        } else {
            self.item_height
        }
    }

    /// Width of an item cell for a row of `horizontal_space` pixels.
    pub fn item_width_for(&self, horizontal_space: i32) -> i32 {
        let cols = to_i32(self.columns());
        (horizontal_space - self.stagger).max(0) / cols
    }

    /// Left edge of a row inside its group.
    pub fn row_left(&self, base_left: i32, row: usize) -> i32 {
        if row % 2 == 1 {
            base_left + self.stagger
        } else {
            base_left
        }
    }

    /// First position of the row containing `position`.
    pub fn row_start(&self, index: &DatasetIndex, position: usize) -> usize {
        if index.is_header(position) || index.is_footer(position) {
            return position;
        }
        position - index.position_in_group(position) % self.columns()
    }

    /// Signed number of positions from `from` to the start of the adjacent row in `direction`.
    ///
    /// `from` is expected to be a row start. Moving down from an item stops early at a header
    /// (or the footer) so that groups stay aligned; moving up lands on the first column of the
    /// previous row, which for the last row of a group depends on the group's item count.
    /// Returns 0 when there is nothing before position 0.
    pub fn position_offset(&self, index: &DatasetIndex, direction: Direction, from: usize) -> isize {
        let cols = self.columns();
        let cols_signed = isize::try_from(cols).unwrap_or(isize::MAX);

        if !index.has_headers() && !index.has_footer() {
            return match direction {
                Direction::Down => cols_signed,
                Direction::Up => -cols_signed,
            };
        }

        match direction {
            Direction::Down => {
                if index.is_header(from) || index.is_footer(from) {
                    return 1;
                }
                for step in 1..cols {
                    let next = from + step;
                    if index.is_header(next) || index.is_footer(next) {
                        return step as isize;
                    }
                }
                cols_signed
            }
            Direction::Up => {
                let Some(prev) = from.checked_sub(1) else {
                    return 0;
                };
                let target = self.row_start(index, prev);
                -((from - target) as isize)
            }
        }
    }

    /// Applies [`Self::position_offset`] to `from`, returning `None` when the step leaves
    /// `0..index.len()` or does not move.
    pub fn step(&self, index: &DatasetIndex, direction: Direction, from: usize) -> Option<usize> {
        let offset = self.position_offset(index, direction, from);
        if offset == 0 {
            return None;
        }
        from.checked_add_signed(offset).filter(|&p| p < index.len())
    }

    fn item_rows(&self, items: usize) -> i32 {
        to_i32(items.div_ceil(self.columns()))
    }

    /// Total height of the whole dataset laid out from position 0.
    pub fn content_height(&self, index: &DatasetIndex) -> i32 {
        let mut total = self.item_rows(index.leading_items()) * self.item_height;
        for group in index.groups() {
            total += self.header_height + self.item_rows(group.items) * self.item_height;
        }
        if index.has_footer() {
            total += self.footer_height;
        }
        total
    }

    /// Distance from the top of the content to the top of the row containing `position`.
    ///
    /// Derived from per-group item counts only, so any number of group boundaries between
    /// position 0 and `position` is summed exactly once.
    pub fn row_offset(&self, index: &DatasetIndex, position: usize) -> i32 {
        let target = self.row_start(index, position);
        let cols = self.columns();

        let leading = index.leading_items();
        if target < leading {
            return to_i32(target / cols) * self.item_height;
        }
        let mut offset = self.item_rows(leading) * self.item_height;

        for group in index.groups() {
            if target == group.header {
                return offset;
            }
            if target < group.end() {
                let row = (target - group.header - 1) / cols;
                return offset + self.header_height + to_i32(row) * self.item_height;
            }
            offset += self.header_height + self.item_rows(group.items) * self.item_height;
        }
        offset
    }
}

fn to_i32(v: usize) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
