use shifted_grid::{ElementProvider, GridOptions, ShiftedGrid, Viewport};

use crate::{Easing, Tween};

/// A framework-neutral controller that wraps a `shifted_grid::ShiftedGrid` and drives smooth
/// scrolling from a tween.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport` / `on_scroll` when UI events occur
/// - `tick(now_ms, provider)` each frame/timer tick (runs pending layout passes and advances
///   an active tween)
///
/// A tween animates the distance travelled since it started; each tick forwards the difference
/// to [`ShiftedGrid::scroll_by`], so views are recycled exactly as with user scrolling.
#[derive(Clone, Debug)]
pub struct Controller<V> {
    grid: ShiftedGrid<V>,
    tween: Option<Tween>,
    /// Distance consumed by the grid since the tween started.
    applied: i64,
}

impl<V> Controller<V> {
    pub fn new(options: GridOptions) -> Self {
        Self::from_grid(ShiftedGrid::new(options))
    }

    pub fn from_grid(grid: ShiftedGrid<V>) -> Self {
        Self {
            grid,
            tween: None,
            applied: 0,
        }
    }

    pub fn grid(&self) -> &ShiftedGrid<V> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut ShiftedGrid<V> {
        &mut self.grid
    }

    pub fn into_grid(self) -> ShiftedGrid<V> {
        self.grid
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        if self.tween.take().is_some() {
            vtrace!(applied = self.applied, "cancel_animation");
        }
    }

    pub fn on_viewport(&mut self, viewport: Viewport) {
        self.grid.set_viewport(viewport);
    }

    /// Call this when the UI reports a scroll delta (e.g. user wheel/drag).
    ///
    /// This cancels any active tween. Returns the distance the grid consumed.
    pub fn on_scroll<P: ElementProvider<View = V>>(&mut self, dy: i32, provider: &mut P) -> i32 {
        self.cancel_animation();
        self.grid.scroll_by(dy, provider)
    }

    /// Anchors `position` at the top of the viewport on the next tick (no animation).
    ///
    /// This cancels any active tween.
    pub fn jump_to_position<P: ElementProvider<View = V>>(&mut self, position: usize, provider: &P) {
        self.cancel_animation();
        self.grid.jump_to_position(position, provider);
    }

    /// Starts a tween that brings the row of `target` to the top of the viewport.
    ///
    /// Replaces any active tween. Returns the signed distance to travel, or `None` (leaving the
    /// current tween untouched) when nothing is laid out yet or `target` is out of range.
    pub fn smooth_scroll_to_position(
        &mut self,
        target: usize,
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<i64> {
        let vector = self.grid.smooth_scroll_vector(target)?;
        // The first visible row may be partially scrolled past.
        let distance = i64::from(vector.y) + i64::from(self.grid.top_offset());

        vdebug!(
            target,
            from = self.grid.first_visible_position(),
            distance,
            duration_ms,
            "smooth_scroll_to_position"
        );
        self.tween = Some(Tween::new(0, distance, now_ms, duration_ms, easing));
        self.applied = 0;
        Some(distance)
    }

    /// Advances the controller.
    ///
    /// Runs a pending layout pass first. If a tween is active, scrolls the grid by the distance
    /// the tween covered since the last tick and returns what the grid consumed; the tween ends
    /// when it completes or the grid stops short at a content boundary. Returns `None` when no
    /// tween is active.
    pub fn tick<P: ElementProvider<View = V>>(&mut self, now_ms: u64, provider: &mut P) -> Option<i32> {
        if self.grid.needs_layout() {
            self.grid.layout(provider);
        }

        let tween = self.tween?;
        let wanted = tween.sample(now_ms) - self.applied;
        let dy = wanted.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
        let consumed = self.grid.scroll_by(dy, provider);
        self.applied += i64::from(consumed);

        if tween.is_done(now_ms) || consumed != dy {
            vtrace!(
                applied = self.applied,
                to = tween.to,
                first = self.grid.first_visible_position(),
                "tween finished"
            );
            self.tween = None;
        }

        Some(consumed)
    }
}
