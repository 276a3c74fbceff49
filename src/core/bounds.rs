//! Axis-aligned bounding box.
//!
//! [`Bounds`] is the collision primitive of the planner: aisle rectangles,
//! their margin-expanded keep-out zones, and the venue extent are all
//! represented as bounds. Containment is inclusive on all edges.

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner (smallest x and y values).
    pub min: Point2D,
    /// Maximum corner (largest x and y values).
    pub max: Point2D,
}

impl Bounds {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: Point2D, max: Point2D) -> Self {
        Self { min, max }
    }

    /// Create bounds from an origin corner and a size.
    #[inline]
    pub fn from_origin_size(origin: Point2D, width: f32, height: f32) -> Self {
        Self {
            min: origin,
            max: Point2D::new(origin.x + width, origin.y + height),
        }
    }

    /// Create an empty (invalid) bounding box.
    ///
    /// The empty bounds has min > max, so it will expand to fit any point.
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Point2D::new(f32::INFINITY, f32::INFINITY),
            max: Point2D::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
        }
    }

    /// Check if the bounds are empty (invalid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Width of the bounding box (x extent).
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the bounding box (y extent).
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center of the bounding box.
    #[inline]
    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Check if a point is inside the bounding box (edges included).
    #[inline]
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Expand bounds by a margin on all sides.
    #[inline]
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min: Point2D::new(self.min.x - margin, self.min.y - margin),
            max: Point2D::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Expand bounds to include a point.
    #[inline]
    pub fn expand_to_include(&mut self, point: Point2D) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Get corners of the bounding box.
    ///
    /// Returns [min, (max.x, min.y), max, (min.x, max.y)] in CCW order.
    #[inline]
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,
            Point2D::new(self.max.x, self.min.y),
            self.max,
            Point2D::new(self.min.x, self.max.y),
        ]
    }

    /// Separation distance between two boxes.
    ///
    /// Zero when the boxes touch or overlap, otherwise the Euclidean
    /// distance between their closest edges.
    #[inline]
    pub fn gap(&self, other: &Bounds) -> f32 {
        let dx = (other.min.x - self.max.x).max(self.min.x - other.max.x).max(0.0);
        let dy = (other.min.y - self.max.y).max(self.min.y - other.max.y).max(0.0);
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_origin_size() {
        let b = Bounds::from_origin_size(Point2D::new(1.0, 2.0), 3.0, 4.0);
        assert_eq!(b.min, Point2D::new(1.0, 2.0));
        assert_eq!(b.max, Point2D::new(4.0, 6.0));
        assert_eq!(b.width(), 3.0);
        assert_eq!(b.height(), 4.0);
        assert_eq!(b.center(), Point2D::new(2.5, 4.0));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let b = Bounds::new(Point2D::ZERO, Point2D::new(10.0, 10.0));
        assert!(b.contains(Point2D::new(5.0, 5.0)));
        assert!(b.contains(Point2D::new(0.0, 0.0)));
        assert!(b.contains(Point2D::new(10.0, 10.0)));
        assert!(b.contains(Point2D::new(10.0, 0.0)));
        assert!(!b.contains(Point2D::new(10.1, 5.0)));
        assert!(!b.contains(Point2D::new(5.0, -0.1)));
    }

    #[test]
    fn test_expand() {
        let b = Bounds::new(Point2D::new(5.0, 5.0), Point2D::new(10.0, 10.0));
        let e = b.expand(2.0);
        assert_eq!(e.min, Point2D::new(3.0, 3.0));
        assert_eq!(e.max, Point2D::new(12.0, 12.0));
    }

    #[test]
    fn test_expand_to_include() {
        let mut b = Bounds::empty();
        assert!(b.is_empty());
        b.expand_to_include(Point2D::new(5.0, 5.0));
        b.expand_to_include(Point2D::new(0.0, 10.0));
        assert!(!b.is_empty());
        assert_eq!(b.min, Point2D::new(0.0, 5.0));
        assert_eq!(b.max, Point2D::new(5.0, 10.0));
    }

    #[test]
    fn test_corners() {
        let b = Bounds::new(Point2D::ZERO, Point2D::new(10.0, 20.0));
        let c = b.corners();
        assert_eq!(c[0], Point2D::new(0.0, 0.0));
        assert_eq!(c[1], Point2D::new(10.0, 0.0));
        assert_eq!(c[2], Point2D::new(10.0, 20.0));
        assert_eq!(c[3], Point2D::new(0.0, 20.0));
    }

    #[test]
    fn test_gap() {
        let a = Bounds::new(Point2D::ZERO, Point2D::new(10.0, 10.0));
        let b = Bounds::new(Point2D::new(13.0, 0.0), Point2D::new(20.0, 10.0));
        let c = Bounds::new(Point2D::new(13.0, 14.0), Point2D::new(20.0, 20.0));
        let d = Bounds::new(Point2D::new(5.0, 5.0), Point2D::new(8.0, 8.0));

        assert_eq!(a.gap(&b), 3.0);
        assert_eq!(a.gap(&c), 5.0); // 3-4-5 triangle between corners
        assert_eq!(a.gap(&d), 0.0); // overlapping
    }
}
