use crate::{ElementKind, Size};

/// The data side of the grid: element roles, view materialization and the recycling pool.
///
/// The engine never inspects `View`; it only moves handles between the provider and its
/// attached set. Implementations typically keep one pool per [`ElementKind`] role.
pub trait ElementProvider {
    type View;

    /// Total number of elements, including headers and the footer.
    fn count(&self) -> usize;

    /// Role of the element at `position`. Must be stable until the next dataset change.
    fn kind(&self, position: usize) -> ElementKind;

    /// Returns a view bound to `position`, reusing a recycled one when possible.
    fn obtain(&mut self, position: usize) -> Self::View;

    /// Returns a view that is no longer attached to the pool for `kind`.
    fn recycle(&mut self, kind: ElementKind, view: Self::View);

    /// Natural size of `view` when laid out in `available_width` pixels.
    fn measure(&mut self, view: &Self::View, kind: ElementKind, available_width: i32) -> Size;
}
