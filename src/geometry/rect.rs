//! Axis-aligned rectangles exposed as four boundary segments

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{approx_ge, approx_le};

use super::Segment;

/// An axis-aligned rectangle in screen coordinates (y grows downward).
///
/// Corners and edges are always derived from `upper_left`, `width`, and
/// `height`, never stored, so they cannot drift out of sync with each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub upper_left: DVec2,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(upper_left: DVec2, width: f64, height: f64) -> Self {
        Self {
            upper_left,
            width,
            height,
        }
    }

    pub fn from_coords(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(DVec2::new(x, y), width, height)
    }

    pub fn upper_right(&self) -> DVec2 {
        self.upper_left + DVec2::new(self.width, 0.0)
    }

    pub fn lower_left(&self) -> DVec2 {
        self.upper_left + DVec2::new(0.0, self.height)
    }

    pub fn lower_right(&self) -> DVec2 {
        self.upper_left + DVec2::new(self.width, self.height)
    }

    pub fn top(&self) -> Segment {
        Segment::new(self.upper_left, self.upper_right())
    }

    pub fn bottom(&self) -> Segment {
        Segment::new(self.lower_left(), self.lower_right())
    }

    pub fn left(&self) -> Segment {
        Segment::new(self.lower_left(), self.upper_left)
    }

    pub fn right(&self) -> Segment {
        Segment::new(self.upper_right(), self.lower_right())
    }

    /// Intersections of a segment with the four edges, one slot per edge in
    /// fixed order: right, left, top, bottom.
    pub fn intersection_points(&self, segment: &Segment) -> [Option<DVec2>; 4] {
        [
            segment.intersection(&self.right()),
            segment.intersection(&self.left()),
            segment.intersection(&self.top()),
            segment.intersection(&self.bottom()),
        ]
    }

    /// Tolerance-inclusive containment; the boundary counts as inside
    pub fn contains(&self, p: DVec2) -> bool {
        approx_ge(p.x, self.upper_left.x)
            && approx_le(p.x, self.upper_left.x + self.width)
            && approx_ge(p.y, self.upper_left.y)
            && approx_le(p.y, self.upper_left.y + self.height)
    }
}
