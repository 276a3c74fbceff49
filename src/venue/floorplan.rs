//! Venue: a polygonal floor populated with aisles.

use serde::{Deserialize, Serialize};

use crate::core::{Bounds, Point2D};

use super::aisle::Aisle;

/// A venue: a simple polygon boundary and the aisles inside it.
///
/// The planner never mutates a venue; aisles are assumed to lie inside the
/// boundary (enforced by the map editor, not here). The first boundary
/// vertex doubles as the route origin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct Venue {
    /// Boundary polygon vertices (≥ 3 for a real venue)
    pub boundary: Vec<Point2D>,
    /// Aisles inside the boundary
    #[serde(default)]
    pub aisles: Vec<Aisle>,
}

impl Venue {
    /// Create a venue from its boundary polygon
    pub fn new(boundary: Vec<Point2D>) -> Self {
        Self {
            boundary,
            aisles: Vec::new(),
        }
    }

    /// Add aisles
    pub fn with_aisles(mut self, aisles: Vec<Aisle>) -> Self {
        self.aisles = aisles;
        self
    }

    /// Axis-aligned bounding box of the boundary polygon.
    ///
    /// Empty bounds when the venue has no vertices.
    pub fn bounding_box(&self) -> Bounds {
        let mut bounds = Bounds::empty();
        for &vertex in &self.boundary {
            bounds.expand_to_include(vertex);
        }
        bounds
    }
}
