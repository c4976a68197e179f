//! Line segments and the segment/segment intersection routine
//!
//! The tricky part of the collision engine: exact intersection of two finite
//! segments, including the degenerate cases (vertical segments, collinear
//! overlaps, point-like segments) that a naive slope/intercept solve would
//! get wrong or divide by zero on.

use glam::DVec2;

use crate::{approx_eq, approx_ge, approx_le, points_equal};

use super::Rect;

/// A finite line segment between two points.
///
/// Point-like segments (`start == end` under tolerance) are legal input to
/// every method.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(DVec2::new(x1, y1), DVec2::new(x2, y2))
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    /// Midpoint of the segment; a degenerate segment's midpoint is its point.
    pub fn midpoint(&self) -> DVec2 {
        if self.is_degenerate() {
            return self.start;
        }
        (self.start + self.end) / 2.0
    }

    /// Slope of the carrying line. Vertical segments (Δx under tolerance)
    /// report `f64::INFINITY` rather than dividing by a near-zero Δx.
    pub fn slope(&self) -> f64 {
        if approx_eq(self.start.x, self.end.x) {
            return f64::INFINITY;
        }
        (self.end.y - self.start.y) / (self.end.x - self.start.x)
    }

    /// True iff start and end coincide under tolerance
    pub fn is_degenerate(&self) -> bool {
        points_equal(self.start, self.end)
    }

    /// Undirected equality: `(A,B)` equals `(B,A)`
    pub fn approx_eq(&self, other: &Segment) -> bool {
        points_equal(self.start, other.start) && points_equal(self.end, other.end)
            || points_equal(self.start, other.end) && points_equal(self.end, other.start)
    }

    /// y-intercept of the carrying line (meaningless for vertical segments)
    fn intercept(&self, slope: f64) -> f64 {
        self.start.y - slope * self.start.x
    }

    fn min_x(&self) -> f64 {
        self.start.x.min(self.end.x)
    }

    fn max_x(&self) -> f64 {
        self.start.x.max(self.end.x)
    }

    fn min_y(&self) -> f64 {
        self.start.y.min(self.end.y)
    }

    fn max_y(&self) -> f64 {
        self.start.y.max(self.end.y)
    }

    /// Tolerance-inclusive bounding-box containment
    fn in_box(&self, p: DVec2) -> bool {
        approx_ge(p.x, self.min_x())
            && approx_le(p.x, self.max_x())
            && approx_ge(p.y, self.min_y())
            && approx_le(p.y, self.max_y())
    }

    /// True iff `p` lies on this segment: inside the bounding box and, for
    /// non-vertical segments, on the carrying line `y = slope * x + b`
    /// within tolerance. Vertical segments match x and range-check y.
    pub fn contains_point(&self, p: DVec2) -> bool {
        let slope = self.slope();
        if slope == f64::INFINITY {
            return approx_eq(p.x, self.start.x)
                && approx_ge(p.y, self.min_y())
                && approx_le(p.y, self.max_y());
        }
        if !self.in_box(p) {
            return false;
        }
        approx_eq(slope * p.x + self.intercept(slope), p.y)
    }

    /// Axis-aligned bounding boxes of the two segments overlap
    fn boxes_overlap(&self, other: &Segment) -> bool {
        approx_le(self.min_x(), other.max_x())
            && approx_ge(self.max_x(), other.min_x())
            && approx_le(self.min_y(), other.max_y())
            && approx_ge(self.max_y(), other.min_y())
    }

    /// Shared boundary point of two overlapping collinear segments: a shared
    /// endpoint when one exists, otherwise the lexicographically smallest
    /// endpoint of either segment that lies on the other. The choice is
    /// symmetric in the two segments, so `a.intersection(b)` and
    /// `b.intersection(a)` agree.
    fn overlap_point(&self, other: &Segment) -> Option<DVec2> {
        if !self.boxes_overlap(other) {
            return None;
        }
        for p in [self.start, self.end] {
            if points_equal(p, other.start) || points_equal(p, other.end) {
                return Some(p);
            }
        }
        let candidates = [
            (self.start, other),
            (self.end, other),
            (other.start, self),
            (other.end, self),
        ];
        let mut best: Option<DVec2> = None;
        for (p, seg) in candidates {
            if !seg.contains_point(p) {
                continue;
            }
            match best {
                Some(b) if (b.x, b.y) <= (p.x, p.y) => {}
                _ => best = Some(p),
            }
        }
        best
    }

    /// Accept an on-line point as an on-segment intersection: shared-endpoint
    /// shortcut, then x-range containment in both segments. The x-range alone
    /// is sufficient here because the point already satisfies both (finite)
    /// line equations.
    fn in_x_overlap(&self, p: DVec2, other: &Segment) -> bool {
        if (points_equal(p, self.start) || points_equal(p, self.end))
            && (points_equal(p, other.start) || points_equal(p, other.end))
        {
            return true;
        }
        approx_ge(p.x, self.min_x())
            && approx_le(p.x, self.max_x())
            && approx_ge(p.x, other.min_x())
            && approx_le(p.x, other.max_x())
    }

    /// Intersection when `self` is vertical and `other` is not: substitute
    /// this x into the other's line equation, then range-check the result
    /// against both bounding boxes.
    fn vertical_intersection(&self, other: &Segment) -> Option<DVec2> {
        let slope = other.slope();
        let x = self.start.x;
        let y = slope * x + other.intercept(slope);
        let p = DVec2::new(x, y);
        if self.in_box(p) && other.in_box(p) {
            Some(p)
        } else {
            None
        }
    }

    /// Intersection point of the two segments, or `None`.
    ///
    /// Case precedence:
    /// 1. identical segments share every point, so there is no unique
    ///    intersection and the result is `None`;
    /// 2. both vertical: collinear-overlap resolution via [`Self::overlap_point`];
    /// 3. equal finite slopes: disjoint parallels yield `None`, matching
    ///    intercepts resolve like case 2;
    /// 4. exactly one vertical: substitute its x into the other's equation;
    /// 5. general case: solve the 2x2 line system, then accept only if the
    ///    point lies on both segments, not just both carrying lines.
    pub fn intersection(&self, other: &Segment) -> Option<DVec2> {
        if self.approx_eq(other) {
            return None;
        }
        let slope1 = self.slope();
        let slope2 = other.slope();
        if slope1 == f64::INFINITY && slope2 == f64::INFINITY {
            return self.overlap_point(other);
        }
        if slope1 == f64::INFINITY {
            return self.vertical_intersection(other);
        }
        if slope2 == f64::INFINITY {
            return other.vertical_intersection(self);
        }
        let b1 = self.intercept(slope1);
        let b2 = other.intercept(slope2);
        if approx_eq(slope1, slope2) {
            if approx_eq(b1, b2) {
                return self.overlap_point(other);
            }
            return None;
        }
        let x = (b2 - b1) / (slope1 - slope2);
        let y = slope1 * x + b1;
        let p = DVec2::new(x, y);
        if self.in_x_overlap(p, other) { Some(p) } else { None }
    }

    /// Whether the segments share at least one point.
    ///
    /// Identical segments intersect (everywhere) even though
    /// [`Self::intersection`] reports no unique point for them. Point-like
    /// segments get a containment fast path.
    pub fn is_intersecting(&self, other: &Segment) -> bool {
        match (self.is_degenerate(), other.is_degenerate()) {
            (true, true) => points_equal(self.start, other.start),
            (true, false) => other.contains_point(self.start),
            (false, true) => self.contains_point(other.start),
            (false, false) => self.approx_eq(other) || self.intersection(other).is_some(),
        }
    }

    /// Among this segment's intersections with the rectangle's four edges,
    /// the one nearest this segment's own start. `None` when no edge is hit.
    pub fn closest_intersection_to_start(&self, rect: &Rect) -> Option<DVec2> {
        let mut best: Option<(f64, DVec2)> = None;
        for p in rect.intersection_points(self).into_iter().flatten() {
            let distance = p.distance(self.start);
            if best.is_none_or(|(d, _)| distance < d) {
                best = Some((distance, p));
            }
        }
        best.map(|(_, p)| p)
    }
}
