//! 3x3 grid layout, hit-testing, and owned dot state
//!
//! [`GridLayout`] derives the nine cell centers and the shared hit radius
//! from the surface size and padding. The grid is always a square sized by
//! the smaller usable dimension and centered along the longer axis, so it
//! never clips outside the widget bounds regardless of aspect ratio.
//!
//! [`GridState`] is the single owned copy of per-dot visual status. Nothing
//! else in the system holds dot state; the view layer mutates it and the
//! render model reads it.

use thiserror::Error;

use crate::geometry::{Insets, Point};

/// Number of cells per grid side
pub const GRID_SIDE: usize = 3;
/// Total number of dots
pub const DOT_COUNT: usize = GRID_SIDE * GRID_SIDE;

/// Layout errors caught before any hit-testing can happen
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// The surface (or what is left after padding) has no usable area
    #[error("degenerate surface: {width}x{height} with padding leaves no usable area")]
    DegenerateSize { width: f32, height: f32 },
}

/// Visual status of a single dot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DotStatus {
    #[default]
    Normal,
    Pressed,
    Error,
    Pass,
}

/// One grid dot: identity index 1-9, layout-assigned center, visual status
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    /// Row-major identity, `row * 3 + col + 1`
    pub index: u8,
    /// Center in the widget's local space
    pub center: Point,
    pub status: DotStatus,
}

/// Computed grid geometry: nine centers plus the shared hit radius
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    centers: [Point; DOT_COUNT],
    hit_radius: f32,
    pitch: f32,
}

impl GridLayout {
    /// Compute the layout for a surface of `width` x `height` with `insets`
    /// of padding
    ///
    /// `hit_radius` is the half-side of each dot's axis-aligned hit square,
    /// normally the styled outer dot radius. If it reaches half the cell
    /// pitch, adjacent hit squares overlap; hit-testing stays deterministic
    /// (row-major scan order wins) but the configuration is logged as
    /// suspect.
    pub fn compute(
        width: f32,
        height: f32,
        insets: Insets,
        hit_radius: f32,
    ) -> Result<Self, LayoutError> {
        let usable_w = width - insets.horizontal();
        let usable_h = height - insets.vertical();
        if width <= 0.0 || height <= 0.0 || usable_w <= 0.0 || usable_h <= 0.0 {
            return Err(LayoutError::DegenerateSize { width, height });
        }

        // Square grid sized by the smaller dimension, centered on the longer.
        let side = usable_w.min(usable_h);
        let (offset_x, offset_y) = if usable_w > usable_h {
            ((usable_w - side) / 2.0 + insets.left, insets.top)
        } else {
            (insets.left, (usable_h - side) / 2.0 + insets.top)
        };

        let pitch = side / GRID_SIDE as f32;
        if hit_radius >= pitch / 2.0 {
            tracing::warn!(
                hit_radius,
                pitch,
                "hit squares overlap; ties resolve in row-major scan order"
            );
        }

        let mut centers = [Point::ZERO; DOT_COUNT];
        for row in 0..GRID_SIDE {
            for col in 0..GRID_SIDE {
                centers[row * GRID_SIDE + col] = Point::new(
                    offset_x + pitch * (2 * col + 1) as f32 / 2.0,
                    offset_y + pitch * (2 * row + 1) as f32 / 2.0,
                );
            }
        }

        tracing::debug!(width, height, pitch, "grid layout computed");
        Ok(Self {
            centers,
            hit_radius,
            pitch,
        })
    }

    /// Center of the dot with the given index (1-9)
    pub fn center(&self, index: u8) -> Point {
        self.centers[(index - 1) as usize]
    }

    /// Distance between adjacent dot centers
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn hit_radius(&self) -> f32 {
        self.hit_radius
    }

    /// Find the dot whose hit square contains the coordinate
    ///
    /// The test is against the axis-aligned square of side `2 * hit_radius`
    /// centered on each dot, not a circular distance. Dots are scanned in
    /// row-major order and the first hit wins.
    pub fn hit_test(&self, p: Point) -> Option<u8> {
        for (i, center) in self.centers.iter().enumerate() {
            if p.x > center.x - self.hit_radius
                && p.x < center.x + self.hit_radius
                && p.y > center.y - self.hit_radius
                && p.y < center.y + self.hit_radius
            {
                return Some((i + 1) as u8);
            }
        }
        None
    }
}

/// The owned per-dot state: exactly nine dots, indices 1-9 row-major
#[derive(Clone, Debug, PartialEq)]
pub struct GridState {
    dots: [Dot; DOT_COUNT],
}

impl GridState {
    /// Build fresh NORMAL dots positioned by `layout`
    pub fn from_layout(layout: &GridLayout) -> Self {
        let mut dots = [Dot {
            index: 0,
            center: Point::ZERO,
            status: DotStatus::Normal,
        }; DOT_COUNT];
        for (i, dot) in dots.iter_mut().enumerate() {
            dot.index = (i + 1) as u8;
            dot.center = layout.center((i + 1) as u8);
        }
        Self { dots }
    }

    /// Reposition centers after a layout recompute, preserving statuses
    pub fn relayout(&mut self, layout: &GridLayout) {
        for dot in &mut self.dots {
            dot.center = layout.center(dot.index);
        }
    }

    pub fn dots(&self) -> &[Dot; DOT_COUNT] {
        &self.dots
    }

    pub fn dot(&self, index: u8) -> &Dot {
        &self.dots[(index - 1) as usize]
    }

    pub fn status(&self, index: u8) -> DotStatus {
        self.dots[(index - 1) as usize].status
    }

    pub fn set_status(&mut self, index: u8, status: DotStatus) {
        self.dots[(index - 1) as usize].status = status;
    }

    /// Return every dot to NORMAL
    pub fn reset(&mut self) {
        for dot in &mut self.dots {
            dot.status = DotStatus::Normal;
        }
    }

    /// True when no dot carries transient feedback
    pub fn is_quiescent(&self) -> bool {
        self.dots.iter().all(|d| d.status == DotStatus::Normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(width: f32, height: f32) -> GridLayout {
        GridLayout::compute(width, height, Insets::ZERO, 40.0).unwrap()
    }

    #[test]
    fn test_square_surface_centers() {
        let layout = layout(300.0, 300.0);
        // Pitch 100, centers at 50/150/250 on both axes, row-major.
        assert_eq!(layout.pitch(), 100.0);
        assert_eq!(layout.center(1), Point::new(50.0, 50.0));
        assert_eq!(layout.center(3), Point::new(250.0, 50.0));
        assert_eq!(layout.center(5), Point::new(150.0, 150.0));
        assert_eq!(layout.center(9), Point::new(250.0, 250.0));
    }

    #[test]
    fn test_landscape_surface_centers_along_x() {
        let layout = layout(500.0, 300.0);
        // Grid square is 300 wide, offset (500-300)/2 = 100 along x.
        assert_eq!(layout.center(1), Point::new(150.0, 50.0));
        assert_eq!(layout.center(9), Point::new(350.0, 250.0));
    }

    #[test]
    fn test_portrait_surface_centers_along_y() {
        let layout = layout(300.0, 500.0);
        assert_eq!(layout.center(1), Point::new(50.0, 150.0));
        assert_eq!(layout.center(9), Point::new(250.0, 350.0));
    }

    #[test]
    fn test_padding_shifts_grid() {
        let layout = GridLayout::compute(320.0, 320.0, Insets::uniform(10.0), 40.0).unwrap();
        // Usable 300x300, grid starts after the left/top padding.
        assert_eq!(layout.pitch(), 100.0);
        assert_eq!(layout.center(1), Point::new(60.0, 60.0));
    }

    #[test]
    fn test_grid_contained_within_padded_area() {
        let insets = Insets::new(20.0, 30.0, 10.0, 5.0);
        let layout = GridLayout::compute(640.0, 480.0, insets, 40.0).unwrap();
        let half = layout.pitch() / 2.0;
        for index in 1..=9u8 {
            let c = layout.center(index);
            assert!(c.x - half >= insets.left);
            assert!(c.x + half <= 640.0 - insets.right);
            assert!(c.y - half >= insets.top);
            assert!(c.y + half <= 480.0 - insets.bottom);
        }
    }

    #[test]
    fn test_nine_distinct_centers_with_equal_pitch() {
        let layout = layout(450.0, 450.0);
        let pitch = layout.pitch();
        for row in 0..3u8 {
            for col in 0..3u8 {
                let index = row * 3 + col + 1;
                let c = layout.center(index);
                if col > 0 {
                    let left = layout.center(index - 1);
                    assert!((c.x - left.x - pitch).abs() < 1e-4);
                    assert_eq!(c.y, left.y);
                }
                if row > 0 {
                    let above = layout.center(index - 3);
                    assert!((c.y - above.y - pitch).abs() < 1e-4);
                    assert_eq!(c.x, above.x);
                }
            }
        }
    }

    #[test]
    fn test_degenerate_sizes_rejected() {
        assert!(GridLayout::compute(0.0, 300.0, Insets::ZERO, 40.0).is_err());
        assert!(GridLayout::compute(300.0, -1.0, Insets::ZERO, 40.0).is_err());
        // Padding can swallow the whole surface too.
        assert!(GridLayout::compute(30.0, 300.0, Insets::uniform(20.0), 40.0).is_err());
    }

    #[test]
    fn test_hit_inside_square() {
        let layout = layout(300.0, 300.0);
        assert_eq!(layout.hit_test(Point::new(50.0, 50.0)), Some(1));
        assert_eq!(layout.hit_test(Point::new(185.0, 120.0)), Some(5));
        // Near the corner of dot 9's square, still inside.
        assert_eq!(layout.hit_test(Point::new(285.0, 285.0)), Some(9));
    }

    #[test]
    fn test_miss_outside_all_squares() {
        let layout = layout(300.0, 300.0);
        // Between dot 1 and dot 2, outside both 40px squares.
        assert_eq!(layout.hit_test(Point::new(100.0, 50.0)), None);
        assert_eq!(layout.hit_test(Point::new(-5.0, -5.0)), None);
    }

    #[test]
    fn test_hit_square_boundary_is_exclusive() {
        let layout = layout(300.0, 300.0);
        // Exactly on the square edge: x == cx + r.
        assert_eq!(layout.hit_test(Point::new(90.0, 50.0)), None);
    }

    #[test]
    fn test_overlapping_squares_tie_break_row_major() {
        // hit_radius 60 > pitch/2 = 50, so squares of dots 1 and 2 overlap.
        let layout = GridLayout::compute(300.0, 300.0, Insets::ZERO, 60.0).unwrap();
        // x = 100 is inside both dot 1 (center 50) and dot 2 (center 150).
        assert_eq!(layout.hit_test(Point::new(100.0, 50.0)), Some(1));
    }

    #[test]
    fn test_grid_state_indices_row_major() {
        let layout = layout(300.0, 300.0);
        let state = GridState::from_layout(&layout);
        for (i, dot) in state.dots().iter().enumerate() {
            assert_eq!(dot.index as usize, i + 1);
            assert_eq!(dot.status, DotStatus::Normal);
            assert_eq!(dot.center, layout.center(dot.index));
        }
    }

    #[test]
    fn test_grid_state_reset() {
        let layout = layout(300.0, 300.0);
        let mut state = GridState::from_layout(&layout);
        state.set_status(3, DotStatus::Error);
        state.set_status(7, DotStatus::Pass);
        assert!(!state.is_quiescent());
        state.reset();
        assert!(state.is_quiescent());
    }

    #[test]
    fn test_relayout_preserves_statuses() {
        let small = layout(300.0, 300.0);
        let mut state = GridState::from_layout(&small);
        state.set_status(5, DotStatus::Pressed);

        let big = layout(600.0, 600.0);
        state.relayout(&big);
        assert_eq!(state.status(5), DotStatus::Pressed);
        assert_eq!(state.dot(5).center, big.center(5));
    }
}
