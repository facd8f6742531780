/// Role of an element in the linear sequence backing the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ElementKind {
    /// Starts a group and spans the full row.
    Header,
    /// A grid cell. `header` is the position of the owning header, or `None` when the element
    /// is not grouped (headers disabled, or items placed before the first header).
    Item { header: Option<usize> },
    /// Optional trailing element, always at the last position, spans the full row.
    Footer,
}

impl ElementKind {
    pub fn is_header(self) -> bool {
        matches!(self, Self::Header)
    }

    pub fn is_item(self) -> bool {
        matches!(self, Self::Item { .. })
    }

    pub fn is_footer(self) -> bool {
        matches!(self, Self::Footer)
    }
}

/// Direction of travel through the linear sequence.
///
/// `Down` moves towards higher positions (content scrolls up), `Up` towards position 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned placement rectangle in viewport coordinates (padding included).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Frame {
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            right: left + width,
            bottom: top + height,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub(crate) fn offset_vertical(&mut self, dy: i32) {
        self.top += dy;
        self.bottom += dy;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    pub const fn uniform(v: i32) -> Self {
        Self {
            left: v,
            top: v,
            right: v,
            bottom: v,
        }
    }
}

/// Size of the scrollable area as reported by the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    pub padding: Insets,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            padding: Insets::uniform(0),
        }
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    /// Height available for content (padding excluded).
    pub fn vertical_space(&self) -> i32 {
        (self.height - self.padding.top - self.padding.bottom).max(0)
    }

    /// Width available for full-width rows (headers, footer).
    pub fn horizontal_space(&self) -> i32 {
        (self.width - self.padding.left - self.padding.right).max(0)
    }
}

/// Signed pixel travel for a programmatic scroll. Positive `y` moves towards the end.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollVector {
    pub x: i32,
    pub y: i32,
}

/// A view currently attached to the grid.
#[derive(Clone, Debug)]
pub struct AttachedView<V> {
    pub position: usize,
    pub kind: ElementKind,
    pub frame: Frame,
    pub view: V,
}
