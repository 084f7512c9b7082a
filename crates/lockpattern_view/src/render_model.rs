//! Read-only projection for the external renderer
//!
//! Everything the rendering collaborator needs to paint a frame: the nine
//! dots with current center and status, the completed connecting segments
//! (each colored by its originating dot's status), and the optional live
//! rubber-band segment from the last visited dot to the raw pointer.
//!
//! The snapshot is rebuilt after every state mutation; the renderer never
//! reaches into widget internals.

use lockpattern_core::{DotStatus, GridState, Point, DOT_COUNT};

/// A dot as the renderer sees it
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderDot {
    pub index: u8,
    pub center: Point,
    pub status: DotStatus,
}

/// One line segment, colored by `status`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    /// Status of the segment's originating dot
    pub status: DotStatus,
}

/// Full paint snapshot
#[derive(Clone, Debug, PartialEq)]
pub struct RenderModel {
    pub dots: [RenderDot; DOT_COUNT],
    /// Segments between consecutive visited dots, in visitation order
    pub segments: Vec<Segment>,
    /// Rubber-band segment, present only mid-drag
    pub trailing: Option<Segment>,
}

impl RenderModel {
    /// Project current grid and session state into a snapshot
    pub fn build(grid: &GridState, visited: &[u8], trailing: Option<Point>) -> Self {
        let mut dots = [RenderDot {
            index: 0,
            center: Point::ZERO,
            status: DotStatus::Normal,
        }; DOT_COUNT];
        for (slot, dot) in dots.iter_mut().zip(grid.dots()) {
            *slot = RenderDot {
                index: dot.index,
                center: dot.center,
                status: dot.status,
            };
        }

        let segments = visited
            .windows(2)
            .map(|pair| Segment {
                from: grid.dot(pair[0]).center,
                to: grid.dot(pair[1]).center,
                status: grid.status(pair[0]),
            })
            .collect();

        let trailing = match (visited.last(), trailing) {
            (Some(&last), Some(pointer)) => Some(Segment {
                from: grid.dot(last).center,
                to: pointer,
                status: grid.status(last),
            }),
            _ => None,
        };

        Self {
            dots,
            segments,
            trailing,
        }
    }
}
