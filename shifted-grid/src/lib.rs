//! A headless layout and view recycling engine for a staggered grid.
//!
//! For adapter-level utilities (controller, smooth scrolling), see the `shifted-grid-adapter`
//! crate.
//!
//! Elements form a linear sequence of headers, items and an optional trailing footer. Items are
//! laid out in `column_count` columns; every second row inside a group is shifted right by
//! `offset_in_pixels`. Each header starts a new group and spans the full width, as does the
//! footer.
//!
//! The engine only materializes the window of positions that covers the viewport:
//! - [`DatasetIndex`] records which positions are headers and how many items each one owns.
//! - [`LayoutGeometry`] maps positions to rows, row offsets and stagger.
//! - [`window_len`] resolves how many positions are needed below the first visible one.
//! - [`ShiftedGrid`] reconciles attached views on every pass, reusing views whose position is
//!   still visible and recycling the rest through an [`ElementProvider`].
//!
//! It is UI-agnostic. A host is expected to provide:
//! - viewport size and padding
//! - scroll deltas
//! - an [`ElementProvider`] that creates, measures and pools views
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod fill;
mod geometry;
mod grid;
mod index;
mod options;
mod provider;
mod scroll;
mod state;
mod types;
mod window;

#[cfg(test)]
mod tests;

pub use geometry::LayoutGeometry;
pub use grid::ShiftedGrid;
pub use index::{DatasetIndex, Group};
pub use options::GridOptions;
pub use provider::ElementProvider;
pub use state::GridState;
pub use types::{
    AttachedView, Direction, ElementKind, Frame, Insets, ScrollVector, Size, Viewport,
};
pub use window::window_len;
