//! Clearance checks against keep-out zones.
//!
//! All safety decisions in the planner funnel through [`Clearance`]: a
//! point is clear when no zone contains it, an axis-aligned segment is
//! clear when no zone straddles its row or column, and a path is clear
//! when all of its points and segments are.
//!
//! The straddle test is strict on the crossing axis: a segment running
//! flush along a zone edge is legal travel.

use crate::core::{Bounds, Point2D};

/// Clearance checker over a set of keep-out zones.
pub struct Clearance<'a> {
    zones: &'a [Bounds],
}

impl<'a> Clearance<'a> {
    /// Create a checker over the given zones
    pub fn new(zones: &'a [Bounds]) -> Self {
        Self { zones }
    }

    /// False iff the point lies within (edges included) any zone.
    pub fn is_point_clear(&self, p: Point2D) -> bool {
        !self.zones.iter().any(|zone| zone.contains(p))
    }

    /// True when the axis-aligned segment a-b crosses no zone.
    ///
    /// A degenerate segment (a == b) is clear; a diagonal segment is
    /// never clear; callers must split it into axis-aligned moves first.
    pub fn is_segment_clear(&self, a: Point2D, b: Point2D) -> bool {
        if a == b {
            return true;
        }
        if !a.is_aligned_with(&b) {
            return false;
        }
        !self.zones.iter().any(|zone| segment_blocked_by(zone, a, b))
    }

    /// True when every consecutive pair is axis-aligned and every point
    /// and segment is clear.
    pub fn is_path_clear(&self, points: &[Point2D]) -> bool {
        if points.iter().any(|&p| !self.is_point_clear(p)) {
            return false;
        }
        points
            .windows(2)
            .all(|w| w[0].is_aligned_with(&w[1]) && self.is_segment_clear(w[0], w[1]))
    }
}

/// Single-zone form of the segment straddle rule.
///
/// Horizontal rule: blocked iff the zone strictly straddles the segment's
/// y and the closed x-spans overlap. Vertical is symmetric. Degenerate and
/// diagonal segments are never reported blocked here; [`Clearance`]
/// handles those cases.
pub(crate) fn segment_blocked_by(zone: &Bounds, a: Point2D, b: Point2D) -> bool {
    if a.y == b.y && a.x != b.x {
        let (x0, x1) = (a.x.min(b.x), a.x.max(b.x));
        return zone.min.y < a.y && a.y < zone.max.y && x1 >= zone.min.x && x0 <= zone.max.x;
    }
    if a.x == b.x && a.y != b.y {
        let (y0, y1) = (a.y.min(b.y), a.y.max(b.y));
        return zone.min.x < a.x && a.x < zone.max.x && y1 >= zone.min.y && y0 <= zone.max.y;
    }
    false
}
