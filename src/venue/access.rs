//! Keep-out zones and shelf access resolution.

use crate::core::{Bounds, Point2D};

use super::aisle::{Aisle, AisleSide};
use super::floorplan::Venue;

/// A resolved shelf destination.
///
/// `shelf_position` is where the shelf visually sits on the aisle face;
/// `access_point` is offset outward past the keep-out margin, so a route
/// can legally stop there.
#[derive(Clone, Debug, PartialEq)]
pub struct ShelfAccess {
    /// Id of the resolved shelf
    pub shelf_id: String,
    /// Id of the aisle carrying it
    pub aisle_id: String,
    /// Which face of the aisle
    pub side: AisleSide,
    /// Point on the aisle face
    pub shelf_position: Point2D,
    /// Safe stopping point outside the keep-out zone
    pub access_point: Point2D,
}

/// Grow every aisle rectangle by the safety margin.
///
/// The resulting boxes are the keep-out zones all clearance checks run
/// against; raw aisle rectangles are never consulted directly.
pub fn expand_aisles(aisles: &[Aisle], margin: f32) -> Vec<Bounds> {
    aisles.iter().map(|a| a.bounds().expand(margin)).collect()
}

/// Resolve a shelf id to its position and access point.
///
/// Scans aisles in order, side A before side B, shelves in list order;
/// the first match wins. Returns `None` for an unknown id.
pub fn resolve_access(venue: &Venue, shelf_id: &str, access_offset: f32) -> Option<ShelfAccess> {
    for aisle in &venue.aisles {
        for side in [AisleSide::A, AisleSide::B] {
            let positions = aisle.shelf_positions(side);
            for (shelf, position) in aisle.side(side).iter().zip(positions) {
                if shelf.id == shelf_id {
                    let access_point =
                        Point2D::new(position.x + side.outward() * access_offset, position.y);
                    return Some(ShelfAccess {
                        shelf_id: shelf.id.clone(),
                        aisle_id: aisle.id.clone(),
                        side,
                        shelf_position: position,
                        access_point,
                    });
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::venue::shelf::Shelf;

    fn venue_with_one_aisle() -> Venue {
        Venue::new(vec![
            Point2D::new(-10.0, -10.0),
            Point2D::new(60.0, -10.0),
            Point2D::new(60.0, 60.0),
            Point2D::new(-10.0, 60.0),
        ])
        .with_aisles(vec![Aisle::new("a1", Point2D::new(0.0, 0.0), 20.0, 40.0)
            .with_side_a(vec![Shelf::new("milk", 1.0)])
            .with_side_b(vec![Shelf::new("tea", 1.0)])])
    }

    #[test]
    fn test_expand_aisles() {
        let venue = venue_with_one_aisle();
        let zones = expand_aisles(&venue.aisles, 1.0);
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].min, Point2D::new(-1.0, -1.0));
        assert_eq!(zones[0].max, Point2D::new(21.0, 41.0));
    }

    #[test]
    fn test_resolve_side_a() {
        let venue = venue_with_one_aisle();
        let access = resolve_access(&venue, "milk", 2.0).unwrap();
        assert_eq!(access.aisle_id, "a1");
        assert_eq!(access.side, AisleSide::A);
        assert_eq!(access.shelf_position, Point2D::new(0.0, 20.0));
        assert_eq!(access.access_point, Point2D::new(-2.0, 20.0));
    }

    #[test]
    fn test_resolve_side_b_points_outward() {
        let venue = venue_with_one_aisle();
        let access = resolve_access(&venue, "tea", 2.0).unwrap();
        assert_eq!(access.side, AisleSide::B);
        assert_eq!(access.shelf_position, Point2D::new(20.0, 20.0));
        assert_eq!(access.access_point, Point2D::new(22.0, 20.0));
    }

    #[test]
    fn test_access_point_outside_zone() {
        let venue = venue_with_one_aisle();
        let zones = expand_aisles(&venue.aisles, 1.0);
        for id in ["milk", "tea"] {
            let access = resolve_access(&venue, id, 2.0).unwrap();
            assert!(!zones[0].contains(access.access_point));
        }
    }

    #[test]
    fn test_unknown_shelf() {
        let venue = venue_with_one_aisle();
        assert!(resolve_access(&venue, "caviar", 2.0).is_none());
    }
}
