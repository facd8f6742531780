/// A lightweight, serializable snapshot of the scroll cursor.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridState {
    /// Position anchored at the top of the viewport (always a row start).
    pub first_visible_position: usize,
    /// Top of that row relative to the top padding; zero or negative when scrolled mid-row.
    pub top_offset: i32,
}
