//! Gesture state machine
//!
//! Consumes pointer events and accumulates the ordered, de-duplicated
//! sequence of visited dots for one drag session. Two states: idle and
//! tracking. A session starts only when pointer-down lands inside some dot's
//! hit square; a down that misses every dot leaves the machine idle and the
//! following move/up events are no-ops.
//!
//! The visited sequence stores dot *indices*, not dot references; the single
//! owned [`GridState`] stays the only place dot status lives.

use lockpattern_core::{DotStatus, GridLayout, GridState, Point};
use smallvec::SmallVec;

/// Ordered drag-session state
#[derive(Debug, Default)]
pub struct GestureTracker {
    /// Visited dot indices in visitation order, no duplicates
    visited: SmallVec<[u8; 9]>,
    /// Most recent raw pointer position while tracking, for the rubber-band
    /// segment
    trailing: Option<Point>,
    tracking: bool,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// True between a successful pointer-down hit and the matching pointer-up
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Visited indices in visitation order
    pub fn visited(&self) -> &[u8] {
        &self.visited
    }

    /// Live pointer position, present only mid-drag
    pub fn trailing(&self) -> Option<Point> {
        self.trailing
    }

    /// The code for the current visited sequence: concatenated indices
    pub fn code(&self) -> String {
        self.visited.iter().map(|i| (b'0' + i) as char).collect()
    }

    /// Pointer pressed at `p`
    ///
    /// Starts a session iff `p` hits a dot; that dot becomes the first
    /// visited entry and is marked PRESSED. Returns the hit index.
    pub fn pointer_down(
        &mut self,
        layout: &GridLayout,
        grid: &mut GridState,
        p: Point,
    ) -> Option<u8> {
        if self.tracking {
            // One logical event stream: a second down without an up is
            // dropped rather than corrupting the visited sequence.
            return None;
        }
        let index = layout.hit_test(p)?;
        self.tracking = true;
        self.visited.push(index);
        grid.set_status(index, DotStatus::Pressed);
        tracing::debug!(index, "drag session started");
        Some(index)
    }

    /// Pointer moved to `p` during a drag
    ///
    /// Updates the trailing position and, when `p` hits a dot not yet in the
    /// sequence, appends it and marks it PRESSED. Re-entering an already
    /// visited dot changes nothing; misses only move the trailing position.
    /// Returns the index of a newly visited dot.
    pub fn pointer_move(
        &mut self,
        layout: &GridLayout,
        grid: &mut GridState,
        p: Point,
    ) -> Option<u8> {
        if !self.tracking {
            return None;
        }
        self.trailing = Some(p);
        let index = layout.hit_test(p)?;
        if self.visited.contains(&index) {
            return None;
        }
        self.visited.push(index);
        grid.set_status(index, DotStatus::Pressed);
        tracing::trace!(index, "dot visited");
        Some(index)
    }

    /// Pointer released
    ///
    /// Ends the session and returns the entered code. The visited sequence
    /// is kept so PASS/ERROR feedback can color it; [`clear`](Self::clear)
    /// drops it when the feedback window closes. Returns `None` when no
    /// session was active.
    pub fn pointer_up(&mut self) -> Option<String> {
        if !self.tracking {
            return None;
        }
        self.tracking = false;
        self.trailing = None;
        let code = self.code();
        tracing::debug!(code = %code, "drag session resolved");
        Some(code)
    }

    /// Drop all session state, returning to idle
    pub fn clear(&mut self) {
        self.visited.clear();
        self.trailing = None;
        self.tracking = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lockpattern_core::Insets;

    fn fixtures() -> (GridLayout, GridState) {
        // 300x300, pitch 100: centers at 50/150/250, hit squares of 40.
        let layout = GridLayout::compute(300.0, 300.0, Insets::ZERO, 40.0).unwrap();
        let grid = GridState::from_layout(&layout);
        (layout, grid)
    }

    fn center(layout: &GridLayout, index: u8) -> Point {
        layout.center(index)
    }

    #[test]
    fn test_down_on_dot_starts_session() {
        let (layout, mut grid) = fixtures();
        let mut tracker = GestureTracker::new();

        let hit = tracker.pointer_down(&layout, &mut grid, center(&layout, 1));
        assert_eq!(hit, Some(1));
        assert!(tracker.is_tracking());
        assert_eq!(tracker.visited(), &[1]);
        assert_eq!(grid.status(1), DotStatus::Pressed);
    }

    #[test]
    fn test_down_on_miss_stays_idle() {
        let (layout, mut grid) = fixtures();
        let mut tracker = GestureTracker::new();

        assert_eq!(
            tracker.pointer_down(&layout, &mut grid, Point::new(100.0, 50.0)),
            None
        );
        assert!(!tracker.is_tracking());
        assert!(tracker.visited().is_empty());
        assert!(grid.is_quiescent());
    }

    #[test]
    fn test_move_without_session_is_noop() {
        let (layout, mut grid) = fixtures();
        let mut tracker = GestureTracker::new();

        assert_eq!(
            tracker.pointer_move(&layout, &mut grid, center(&layout, 5)),
            None
        );
        assert!(tracker.trailing().is_none());
        assert!(grid.is_quiescent());
    }

    #[test]
    fn test_move_accumulates_in_order() {
        let (layout, mut grid) = fixtures();
        let mut tracker = GestureTracker::new();

        tracker.pointer_down(&layout, &mut grid, center(&layout, 1));
        tracker.pointer_move(&layout, &mut grid, center(&layout, 2));
        tracker.pointer_move(&layout, &mut grid, center(&layout, 3));
        tracker.pointer_move(&layout, &mut grid, center(&layout, 5));

        assert_eq!(tracker.visited(), &[1, 2, 3, 5]);
        assert_eq!(tracker.code(), "1235");
        for index in [1, 2, 3, 5] {
            assert_eq!(grid.status(index), DotStatus::Pressed);
        }
    }

    #[test]
    fn test_revisit_does_not_duplicate() {
        let (layout, mut grid) = fixtures();
        let mut tracker = GestureTracker::new();

        tracker.pointer_down(&layout, &mut grid, center(&layout, 1));
        // Wander off dot 1 and back in before reaching dot 2.
        tracker.pointer_move(&layout, &mut grid, Point::new(100.0, 50.0));
        tracker.pointer_move(&layout, &mut grid, center(&layout, 1));
        tracker.pointer_move(&layout, &mut grid, center(&layout, 2));

        assert_eq!(tracker.code(), "12");
    }

    #[test]
    fn test_miss_updates_trailing_only() {
        let (layout, mut grid) = fixtures();
        let mut tracker = GestureTracker::new();

        tracker.pointer_down(&layout, &mut grid, center(&layout, 1));
        let between = Point::new(100.0, 50.0);
        assert_eq!(tracker.pointer_move(&layout, &mut grid, between), None);
        assert_eq!(tracker.trailing(), Some(between));
        assert_eq!(tracker.visited(), &[1]);
    }

    #[test]
    fn test_up_returns_code_and_clears_trailing() {
        let (layout, mut grid) = fixtures();
        let mut tracker = GestureTracker::new();

        tracker.pointer_down(&layout, &mut grid, center(&layout, 1));
        tracker.pointer_move(&layout, &mut grid, center(&layout, 5));
        assert_eq!(tracker.pointer_up(), Some("15".to_string()));

        assert!(!tracker.is_tracking());
        assert!(tracker.trailing().is_none());
        // Visited is kept for feedback coloring until cleared.
        assert_eq!(tracker.visited(), &[1, 5]);
    }

    #[test]
    fn test_up_without_session_returns_none() {
        let mut tracker = GestureTracker::new();
        assert_eq!(tracker.pointer_up(), None);
    }

    #[test]
    fn test_single_dot_session() {
        let (layout, mut grid) = fixtures();
        let mut tracker = GestureTracker::new();

        tracker.pointer_down(&layout, &mut grid, center(&layout, 7));
        assert_eq!(tracker.pointer_up(), Some("7".to_string()));
    }

    #[test]
    fn test_second_down_mid_session_is_dropped() {
        let (layout, mut grid) = fixtures();
        let mut tracker = GestureTracker::new();

        tracker.pointer_down(&layout, &mut grid, center(&layout, 1));
        assert_eq!(
            tracker.pointer_down(&layout, &mut grid, center(&layout, 1)),
            None
        );
        assert_eq!(tracker.visited(), &[1]);
    }

    #[test]
    fn test_clear_returns_to_idle() {
        let (layout, mut grid) = fixtures();
        let mut tracker = GestureTracker::new();

        tracker.pointer_down(&layout, &mut grid, center(&layout, 1));
        tracker.pointer_up();
        tracker.clear();
        assert!(tracker.visited().is_empty());
        assert!(!tracker.is_tracking());
    }
}
