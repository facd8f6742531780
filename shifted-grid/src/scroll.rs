use crate::{Direction, ElementProvider, ScrollVector, ShiftedGrid};

impl<V> ShiftedGrid<V> {
    /// Scrolls the content by `dy` pixels (positive reveals later positions).
    ///
    /// The shift is clamped so the content never leaves whitespace above position 0 or below the
    /// end of the dataset. Rows exposed by the shift are materialized and rows that left the
    /// viewport are recycled.
    ///
    /// A pending layout pass (dataset change, jump, viewport change) runs first, so the shift
    /// always applies to an index that matches `provider`.
    ///
    /// Returns the consumed distance, which is 0 when nothing is attached or the whole dataset
    /// already fits in the viewport.
    pub fn scroll_by<P: ElementProvider<View = V>>(&mut self, dy: i32, provider: &mut P) -> i32 {
        if self.needs_layout() {
            self.layout(provider);
        }
        if dy == 0 {
            return 0;
        }
        let (Some(top_child), Some(bottom_child)) = (self.children.first(), self.children.last())
        else {
            return 0;
        };

        let len = self.index.len();
        let padding = self.viewport.padding;
        let space = self.viewport.vertical_space();

        let consumed_space = bottom_child.frame.bottom - top_child.frame.top;
        if self.children.len() == len && consumed_space < space {
            return 0;
        }

        let top_bound = top_child.position == 0;
        let bottom_bound = bottom_child.position + 1 >= len;

        let content_top =
            top_child.frame.top - self.geometry.row_offset(&self.index, top_child.position);
        let content_bottom = content_top + self.geometry.content_height(&self.index);

        let delta = if dy > 0 {
            let limit = (self.viewport.height - padding.bottom) - content_bottom;
            (-dy).max(limit.min(0))
        } else {
            let limit = padding.top - content_top;
            (-dy).min(limit.max(0))
        };

        for child in &mut self.children {
            child.frame.offset_vertical(delta);
        }

        let top_frame = self.children[0].frame;
        if dy > 0 {
            let direction = (top_frame.bottom <= padding.top).then_some(Direction::Down);
            if !bottom_bound || direction.is_some() {
                self.fill(direction, 0, provider);
            }
        } else if !top_bound {
            let direction = (top_frame.top > padding.top).then_some(Direction::Up);
            self.fill(direction, 0, provider);
        }

        vtrace!(
            dy,
            consumed = -delta,
            first = self.first_visible,
            "scroll_by"
        );
        -delta
    }

    /// Pixel travel from the row of the first visible position to the row of `target`.
    ///
    /// Summed from the dataset index alone: whole groups in between contribute their header and
    /// item rows once each, plus the partial rows inside the current and target groups. The
    /// vector points down (positive `y`) when `target` lies below the current anchor.
    ///
    /// Returns `None` when nothing is attached or `target` is out of range.
    pub fn smooth_scroll_vector(&self, target: usize) -> Option<ScrollVector> {
        if self.children.is_empty() || target >= self.index.len() {
            return None;
        }
        let from = self.geometry.row_offset(&self.index, self.first_visible);
        let to = self.geometry.row_offset(&self.index, target);
        Some(ScrollVector { x: 0, y: to - from })
    }

    /// Restores the cursor invariants after the dataset changed or a jump landed mid-row.
    ///
    /// The first visible position is clamped to `count - (last visible count - 1)` so a shrunk
    /// dataset still fills the viewport, then moved back to the first column of its row.
    pub(crate) fn fix_first_visible_position(&mut self) {
        let len = self.index.len();
        if len == 0 {
            self.first_visible = 0;
            return;
        }

        let max_first = len
            .saturating_sub(self.last_visible_count.saturating_sub(1))
            .min(len - 1);
        if self.first_visible > max_first {
            vdebug!(
                first = self.first_visible,
                max_first,
                "fix_first_visible_position: clamped"
            );
            self.first_visible = max_first;
        }

        self.first_visible = self.geometry.row_start(&self.index, self.first_visible);
    }
}
