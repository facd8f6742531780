use alloc::vec::Vec;

use crate::ElementKind;

/// A header position together with the number of items it owns.
///
/// The owned items occupy positions `header + 1 ..= header + items`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    pub header: usize,
    pub items: usize,
}

impl Group {
    /// One past the last position owned by this group.
    pub fn end(&self) -> usize {
        self.header + 1 + self.items
    }
}

/// Derived metadata about the element sequence: header positions, per-header item counts and
/// footer presence.
///
/// Built by a single forward scan and never patched incrementally; rebuild it whenever the
/// dataset changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DatasetIndex {
    len: usize,
    /// Sorted by `header`.
    groups: Vec<Group>,
    /// Items before the first header (all items when headers are disabled).
    leading_items: usize,
    footer: bool,
}

impl DatasetIndex {
    /// Scans `len` elements in order, classifying each through `kind_of`.
    pub fn build(len: usize, mut kind_of: impl FnMut(usize) -> ElementKind) -> Self {
        let mut index = Self {
            len,
            ..Self::default()
        };

        for position in 0..len {
            match kind_of(position) {
                ElementKind::Header => index.groups.push(Group {
                    header: position,
                    items: 0,
                }),
                ElementKind::Item { header } => {
                    let current = index.groups.last().map(|g| g.header);
                    if header.is_some() && header != current {
                        vwarn!(
                            position,
                            ?header,
                            ?current,
                            "DatasetIndex: item does not belong to the preceding header"
                        );
                    }
                    match index.groups.last_mut() {
                        Some(group) => group.items += 1,
                        None => index.leading_items += 1,
                    }
                }
                ElementKind::Footer => {
                    if position + 1 == len {
                        index.footer = true;
                    } else {
                        vwarn!(position, len, "DatasetIndex: footer is not the last element");
                    }
                }
            }
        }

        vdebug!(
            len,
            headers = index.groups.len(),
            leading_items = index.leading_items,
            footer = index.footer,
            "DatasetIndex::build"
        );
        index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn has_headers(&self) -> bool {
        !self.groups.is_empty()
    }

    pub fn has_footer(&self) -> bool {
        self.footer
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn leading_items(&self) -> usize {
        self.leading_items
    }

    pub fn is_header(&self, position: usize) -> bool {
        self.header_rank(position).is_some()
    }

    pub fn is_footer(&self, position: usize) -> bool {
        self.footer && position + 1 == self.len
    }

    /// Returns the ordinal of the header at `position`, if `position` is a header.
    pub fn header_rank(&self, position: usize) -> Option<usize> {
        self.groups.binary_search_by_key(&position, |g| g.header).ok()
    }

    /// Number of items owned by the header at `position`.
    pub fn items_under(&self, header: usize) -> Option<usize> {
        self.header_rank(header).map(|rank| self.groups[rank].items)
    }

    /// Returns the header owning `position`: `position` itself when it is a header, otherwise the
    /// greatest header before it.
    ///
    /// Returns `None` when headers are disabled or `position` precedes the first header.
    pub fn header_for(&self, position: usize) -> Option<usize> {
        let after = self.groups.partition_point(|g| g.header <= position);
        after.checked_sub(1).map(|rank| self.groups[rank].header)
    }

    /// Offset of an item inside its group (0 for the first item after the header).
    ///
    /// Ungrouped items are measured from position 0. Headers report 0.
    pub fn position_in_group(&self, position: usize) -> usize {
        match self.header_for(position) {
            Some(header) if header < position => position - header - 1,
            Some(_) => 0,
            None => position,
        }
    }

    /// Number of items in the group that contains the item at `position`.
    pub fn group_items_at(&self, position: usize) -> usize {
        match self.header_for(position) {
            Some(header) => self.items_under(header).unwrap_or(0),
            None => self.leading_items,
        }
    }

    /// Position of the first item element, if any.
    pub fn first_item(&self) -> Option<usize> {
        if self.leading_items > 0 {
            return Some(0);
        }
        self.groups
            .iter()
            .find(|g| g.items > 0)
            .map(|g| g.header + 1)
    }
}
