//! Aisle: a rectangular exclusion zone carrying shelves on two faces.

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Point2D};

use super::shelf::Shelf;

/// Which face of an aisle a shelf sits on.
///
/// Side A is the face at `x = origin.x`, side B the face at
/// `x = origin.x + width`. Shelf spans run along y from `origin.y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AisleSide {
    A,
    B,
}

impl AisleSide {
    /// Unit outward direction along x for this side.
    #[inline]
    pub fn outward(&self) -> f32 {
        match self {
            AisleSide::A => -1.0,
            AisleSide::B => 1.0,
        }
    }
}

/// A rectangular aisle occupying
/// `[origin.x, origin.x + width] × [origin.y, origin.y + length]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aisle {
    /// Venue-unique aisle id
    pub id: String,
    /// Corner with the smallest x and y
    pub origin: Point2D,
    /// Extent along x
    pub width: f32,
    /// Extent along y
    pub length: f32,
    /// Shelves on the `x = origin.x` face, in order from `origin.y`
    #[serde(default)]
    pub side_a: Vec<Shelf>,
    /// Shelves on the `x = origin.x + width` face, in order from `origin.y`
    #[serde(default)]
    pub side_b: Vec<Shelf>,
}

impl Aisle {
    /// Create an aisle with empty sides
    pub fn new(id: impl Into<String>, origin: Point2D, width: f32, length: f32) -> Self {
        Self {
            id: id.into(),
            origin,
            width,
            length,
            side_a: Vec::new(),
            side_b: Vec::new(),
        }
    }

    /// Set the shelves on side A
    pub fn with_side_a(mut self, shelves: Vec<Shelf>) -> Self {
        self.side_a = shelves;
        self
    }

    /// Set the shelves on side B
    pub fn with_side_b(mut self, shelves: Vec<Shelf>) -> Self {
        self.side_b = shelves;
        self
    }

    /// The rectangle this aisle occupies
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::from_origin_size(self.origin, self.width, self.length)
    }

    /// Shelves on the given side
    #[inline]
    pub fn side(&self, side: AisleSide) -> &[Shelf] {
        match side {
            AisleSide::A => &self.side_a,
            AisleSide::B => &self.side_b,
        }
    }

    /// X coordinate of the given face
    #[inline]
    pub fn face_x(&self, side: AisleSide) -> f32 {
        match side {
            AisleSide::A => self.origin.x,
            AisleSide::B => self.origin.x + self.width,
        }
    }

    /// Edge positions of every shelf on a side, in shelf-list order.
    ///
    /// Each shelf occupies a span of the side proportional to its weight
    /// and sits at the span's center. A side whose weights sum to zero has
    /// no resolvable positions.
    pub fn shelf_positions(&self, side: AisleSide) -> Vec<Point2D> {
        let shelves = self.side(side);
        let total: f32 = shelves.iter().map(|s| s.weight).sum();
        if total <= 0.0 {
            return Vec::new();
        }

        let x = self.face_x(side);
        let mut positions = Vec::with_capacity(shelves.len());
        let mut offset = 0.0;
        for shelf in shelves {
            let span = self.length * shelf.weight / total;
            positions.push(Point2D::new(x, self.origin.y + offset + span * 0.5));
            offset += span;
        }
        positions
    }
}
