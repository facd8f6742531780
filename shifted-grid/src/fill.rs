use alloc::collections::BTreeMap;
use core::mem;

use crate::window::window_len;
use crate::{AttachedView, Direction, ElementKind, ElementProvider, Frame, ShiftedGrid};

/// Placement state carried from one position to the next during a fill pass.
struct Cursor {
    left: i32,
    top: i32,
    /// Height of the row the cursor is in; the next row starts this far below `top`.
    row_height: i32,
}

impl<V> ShiftedGrid<V> {
    /// Reconciles the attached views with the window that starts at the first visible position.
    ///
    /// Attached views are captured by position and detached. Positions still inside the window
    /// get their view back at its current frame; new positions get a fresh view from `provider`
    /// and a computed frame. Whatever is left over goes back to the provider's pool.
    ///
    /// `direction` tells the pass which way the content was just shifted so the first visible
    /// position can be moved past rows that left the viewport (`Down`) or back over rows that
    /// entered it (`Up`). `top` is only used when nothing is attached.
    pub(crate) fn fill<P: ElementProvider<View = V>>(
        &mut self,
        direction: Option<Direction>,
        top: i32,
        provider: &mut P,
    ) {
        self.fix_first_visible_position();

        let padding = self.viewport.padding;
        let mut start_top = padding.top + top;

        let mut cache: BTreeMap<usize, AttachedView<V>> = BTreeMap::new();
        if let Some(anchor_top) = self.children.first().map(|c| c.frame.top) {
            cache.extend(
                mem::take(&mut self.children)
                    .into_iter()
                    .map(|c| (c.position, c)),
            );
            let anchor = anchor_top - padding.top;
            start_top = padding.top
                + match direction {
                    Some(Direction::Up) => self.top_offset_delta_up(anchor),
                    Some(Direction::Down) => self.top_offset_delta_down(anchor),
                    None => anchor,
                };
        }

        // A provider that shrank since the last index build must never see stale positions.
        let len = self.index.len().min(provider.count());
        let first = self.first_visible;
        let available =
            self.viewport.vertical_space() + self.geometry.item_height - (start_top - padding.top);
        let window = window_len(&self.geometry, &self.index, first, available);

        let full_width = self.viewport.horizontal_space();
        let mut cursor = Cursor {
            left: padding.left,
            top: start_top,
            row_height: 0,
        };
        let mut placed = 0usize;

        for position in first..first.saturating_add(window) {
            if position >= len {
                break;
            }

            if let Some(child) = cache.remove(&position) {
                cursor.left = child.frame.left;
                cursor.top = child.frame.top;
                cursor.row_height = self.geometry.height_for(child.kind);
                self.children.push(child);
            } else {
                let kind = provider.kind(position);
                let frame = self.place(kind, position, &mut cursor, full_width);
                let view = provider.obtain(position);
                self.children.push(AttachedView {
                    position,
                    kind,
                    frame,
                    view,
                });
            }
            placed += 1;
        }
        self.last_visible_count = placed;

        vtrace!(
            first,
            window,
            placed,
            recycled = cache.len(),
            ?direction,
            "fill"
        );
        for (_, child) in cache {
            provider.recycle(child.kind, child.view);
        }
    }

    fn place(
        &self,
        kind: ElementKind,
        position: usize,
        cursor: &mut Cursor,
        full_width: i32,
    ) -> Frame {
        let base_left = self.viewport.padding.left;
        let starts_viewport = position == self.first_visible;

        match kind {
            ElementKind::Header | ElementKind::Footer => {
                if !starts_viewport {
                    cursor.top += cursor.row_height;
                }
                let height = self.geometry.height_for(kind);
                cursor.row_height = height;
                cursor.left = base_left;
                Frame::new(base_left, cursor.top, full_width, height)
            }
            ElementKind::Item { header } => {
                let in_group = match header {
                    Some(header) if header < position => position - header - 1,
                    _ => self.index.position_in_group(position),
                };
                let cols = self.geometry.columns();

                if in_group % cols == 0 {
                    if !starts_viewport {
                        cursor.top += cursor.row_height;
                    }
                    cursor.row_height = self.geometry.item_height;
                    cursor.left = self.geometry.row_left(base_left, in_group / cols);
                } else {
                    cursor.left += self.geometry.item_width;
                }

                Frame::new(
                    cursor.left,
                    cursor.top,
                    self.geometry.item_width,
                    self.geometry.item_height,
                )
            }
        }
    }

    /// Moves the first visible position past rows that are entirely above the viewport.
    ///
    /// `top` is the current top of the first visible row (relative to the top padding); returns
    /// the top of the new first visible row.
    fn top_offset_delta_down(&mut self, top: i32) -> i32 {
        let mut position = self.first_visible;
        let mut top = top;
        loop {
            let height = self.geometry.height_of(&self.index, position);
            if top + height > 0 {
                break;
            }
            let Some(next) = self.geometry.step(&self.index, Direction::Down, position) else {
                break;
            };
            top += height;
            position = next;
        }
        self.first_visible = position;
        top
    }

    /// Moves the first visible position back over rows that now intersect the viewport.
    ///
    /// Stops at position 0, possibly returning a positive offset.
    fn top_offset_delta_up(&mut self, top: i32) -> i32 {
        let mut position = self.first_visible;
        let mut top = top;
        while top > 0 {
            let Some(prev) = self.geometry.step(&self.index, Direction::Up, position) else {
                break;
            };
            position = prev;
            top -= self.geometry.height_of(&self.index, position);
        }
        self.first_visible = position;
        top
    }
}
