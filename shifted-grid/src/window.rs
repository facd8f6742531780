use crate::{DatasetIndex, LayoutGeometry};

/// Counts how many contiguous positions starting at `first` are needed to cover `available`
/// pixels of vertical space, plus one row of slack for partial scrolling.
///
/// `first` must be a row start. Without headers this is closed-form; with headers the groups
/// are walked row by row, stopping after the footer or at the end of the dataset.
pub fn window_len(
    geometry: &LayoutGeometry,
    index: &DatasetIndex,
    first: usize,
    available: i32,
) -> usize {
    let cols = geometry.columns();

    if !index.has_headers() {
        let item_height = geometry.item_height.max(1) as u32;
        let rows = (available.max(0) as u32).div_ceil(item_height) as usize;
        return rows.saturating_add(1).saturating_mul(cols);
    }

    let len = index.len();
    let mut available = available;
    let mut position = first;
    // Items left in the current group, counted from `position`.
    let mut remaining = 0usize;

    while available > 0 && position < len {
        if index.is_footer(position) {
            position += 1;
            break;
        }

        if index.is_header(position) {
            remaining = index.items_under(position).unwrap_or(0);
            available -= geometry.header_height.max(1);
            position += 1;
            continue;
        }

        if remaining == 0 {
            remaining = index
                .group_items_at(position)
                .saturating_sub(index.position_in_group(position));
        }
        available -= geometry.item_height.max(1);
        let row = remaining.clamp(1, cols);
        position += row;
        remaining = remaining.saturating_sub(row);
    }

    vtrace!(first, count = position - first, "window_len");
    position.min(len).saturating_sub(first)
}
