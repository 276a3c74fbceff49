//! Line-segment intersection tests.
//!
//! The planner mostly reasons about axis-aligned segments against boxes,
//! but the wrap-around relevance probe tests the raw (possibly diagonal)
//! origin-goal line against box edges, which needs a general
//! orientation-based intersection test.

use super::bounds::Bounds;
use super::point::Point2D;

/// Orientation of the triplet (a, b, c).
///
/// Positive for counter-clockwise, negative for clockwise, zero when
/// collinear.
#[inline]
fn orientation(a: Point2D, b: Point2D, c: Point2D) -> f32 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// True if collinear point `p` lies within the bounding box of segment ab.
#[inline]
fn on_segment(a: Point2D, b: Point2D, p: Point2D) -> bool {
    p.x >= a.x.min(b.x) && p.x <= a.x.max(b.x) && p.y >= a.y.min(b.y) && p.y <= a.y.max(b.y)
}

#[inline]
fn is_axis_aligned(a: Point2D, b: Point2D) -> bool {
    a.x == b.x || a.y == b.y
}

/// Test whether segments a1-a2 and b1-b2 intersect (endpoints included).
///
/// Axis-aligned pairs take a fast interval-overlap path; the general case
/// uses the orientation test with collinear handling.
pub fn segments_intersect(a1: Point2D, a2: Point2D, b1: Point2D, b2: Point2D) -> bool {
    if is_axis_aligned(a1, a2) && is_axis_aligned(b1, b2) {
        // An axis-aligned segment is a product of two intervals, so the
        // segments intersect exactly when both interval pairs overlap.
        return a1.x.min(a2.x) <= b1.x.max(b2.x)
            && a1.x.max(a2.x) >= b1.x.min(b2.x)
            && a1.y.min(a2.y) <= b1.y.max(b2.y)
            && a1.y.max(a2.y) >= b1.y.min(b2.y);
    }

    let o1 = orientation(a1, a2, b1);
    let o2 = orientation(a1, a2, b2);
    let o3 = orientation(b1, b2, a1);
    let o4 = orientation(b1, b2, a2);

    if ((o1 > 0.0 && o2 < 0.0) || (o1 < 0.0 && o2 > 0.0))
        && ((o3 > 0.0 && o4 < 0.0) || (o3 < 0.0 && o4 > 0.0))
    {
        return true;
    }

    (o1 == 0.0 && on_segment(a1, a2, b1))
        || (o2 == 0.0 && on_segment(a1, a2, b2))
        || (o3 == 0.0 && on_segment(b1, b2, a1))
        || (o4 == 0.0 && on_segment(b1, b2, a2))
}

/// Test whether segment p1-p2 touches a box.
///
/// True when either endpoint is inside the box or the segment crosses any
/// of its four edges.
pub fn segment_intersects_bounds(p1: Point2D, p2: Point2D, bounds: &Bounds) -> bool {
    if bounds.contains(p1) || bounds.contains(p2) {
        return true;
    }
    let c = bounds.corners();
    for i in 0..4 {
        if segments_intersect(p1, p2, c[i], c[(i + 1) % 4]) {
            return true;
        }
    }
    false
}
