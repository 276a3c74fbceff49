//! Candidate waypoint generation.
//!
//! The visibility graph searches over a finite set of candidate points:
//! zone rim samples (densified near corners), rim anchors, outward corner
//! offsets, inter-aisle corridor shortcuts, edge-crossing candidates,
//! access-point neighborhoods, and venue boundary samples. Each phase is a
//! pure function returning its own candidates; the builder concatenates
//! them, drops everything inside a keep-out zone, and deduplicates by
//! exact coordinate, preserving first-occurrence order so the output is
//! deterministic.
//!
//! Points that must sit beside a zone are placed on the zone's *rim* (the
//! zone expanded once more by the safety margin) so they pass the
//! inclusive point test.

use std::collections::HashSet;

use log::debug;

use crate::config::{GridSection, MargaConfig};
use crate::core::{Bounds, Point2D};

use super::clearance::Clearance;

/// Build the shared candidate waypoint set for a planning call.
pub fn build_nav_grid(
    zones: &[Bounds],
    venue_bounds: Bounds,
    access_points: &[Point2D],
    config: &MargaConfig,
) -> Vec<Point2D> {
    let g = &config.grid;
    let margin = config.safety.margin;

    let mut candidates = Vec::new();
    for zone in zones {
        let rim = zone.expand(margin);
        candidates.extend(rim_perimeter_points(&rim, g));
        candidates.extend(rim_anchor_points(&rim));
        candidates.extend(corner_offset_points(zone, g.offset_step));
    }
    candidates.extend(corridor_points(zones, g));
    candidates.extend(crossing_points(zones, margin, g.offset_step));
    for &p in access_points {
        candidates.extend(axis_neighborhood(p, g.offset_step));
    }
    candidates.extend(boundary_points(&venue_bounds, g.boundary_samples));

    let clearance = Clearance::new(zones);
    let mut seen = HashSet::new();
    let mut grid = Vec::new();
    for p in candidates {
        if !clearance.is_point_clear(p) {
            continue;
        }
        if seen.insert((p.x.to_bits(), p.y.to_bits())) {
            grid.push(p);
        }
    }

    debug!(
        "[Grid] {} candidate points over {} zones",
        grid.len(),
        zones.len()
    );
    grid
}

/// Sample positions along one axis span, coarse across the middle and
/// dense within `corner_zone` of either end. Both endpoints are included.
fn axis_samples(lo: f32, hi: f32, coarse: f32, dense: f32, corner_zone: f32) -> Vec<f32> {
    if hi <= lo {
        return vec![lo];
    }
    let coarse = coarse.max(0.25);
    let dense = dense.max(0.25);

    let mut values = Vec::new();
    let head_end = (lo + corner_zone).min(hi);
    let tail_start = (hi - corner_zone).max(head_end);

    let mut t = lo;
    while t < head_end {
        values.push(t);
        t += dense;
    }
    let mut t = head_end;
    while t < tail_start {
        values.push(t);
        t += coarse;
    }
    let mut t = tail_start;
    while t < hi {
        values.push(t);
        t += dense;
    }
    values.push(hi);
    values
}

/// Perimeter samples along a zone rim.
fn rim_perimeter_points(rim: &Bounds, g: &GridSection) -> Vec<Point2D> {
    let xs = axis_samples(
        rim.min.x,
        rim.max.x,
        g.perimeter_spacing,
        g.corner_spacing,
        g.corner_zone,
    );
    let ys = axis_samples(
        rim.min.y,
        rim.max.y,
        g.perimeter_spacing,
        g.corner_spacing,
        g.corner_zone,
    );

    let mut points = Vec::with_capacity(2 * (xs.len() + ys.len()));
    for &x in &xs {
        points.push(Point2D::new(x, rim.min.y));
        points.push(Point2D::new(x, rim.max.y));
    }
    for &y in &ys {
        points.push(Point2D::new(rim.min.x, y));
        points.push(Point2D::new(rim.max.x, y));
    }
    points
}

/// Midpoints and quarter-points of each rim side.
fn rim_anchor_points(rim: &Bounds) -> Vec<Point2D> {
    let mut points = Vec::with_capacity(12);
    for f in [0.25, 0.5, 0.75] {
        let x = rim.min.x + rim.width() * f;
        let y = rim.min.y + rim.height() * f;
        points.push(Point2D::new(x, rim.min.y));
        points.push(Point2D::new(x, rim.max.y));
        points.push(Point2D::new(rim.min.x, y));
        points.push(Point2D::new(rim.max.x, y));
    }
    points
}

/// Four zone corners pushed diagonally outward.
fn corner_offset_points(zone: &Bounds, step: f32) -> Vec<Point2D> {
    vec![
        Point2D::new(zone.min.x - step, zone.min.y - step),
        Point2D::new(zone.max.x + step, zone.min.y - step),
        Point2D::new(zone.min.x - step, zone.max.y + step),
        Point2D::new(zone.max.x + step, zone.max.y + step),
    ]
}

/// Shortcut candidates between nearby zone pairs: the midpoint of their
/// centers, and when the centers align on one axis, the point exactly
/// between their facing edges.
fn corridor_points(zones: &[Bounds], g: &GridSection) -> Vec<Point2D> {
    let mut points = Vec::new();
    for i in 0..zones.len() {
        for j in (i + 1)..zones.len() {
            let (a, b) = (&zones[i], &zones[j]);
            if a.gap(b) > g.corridor_range {
                continue;
            }
            let (ca, cb) = (a.center(), b.center());
            points.push(Point2D::new((ca.x + cb.x) * 0.5, (ca.y + cb.y) * 0.5));

            if (ca.x - cb.x).abs() <= g.alignment_tolerance {
                // Stacked along y: halfway between the facing edges
                let (lower, upper) = if ca.y <= cb.y { (a, b) } else { (b, a) };
                points.push(Point2D::new(
                    (ca.x + cb.x) * 0.5,
                    (lower.max.y + upper.min.y) * 0.5,
                ));
            }
            if (ca.y - cb.y).abs() <= g.alignment_tolerance {
                let (left, right) = if ca.x <= cb.x { (a, b) } else { (b, a) };
                points.push(Point2D::new(
                    (left.max.x + right.min.x) * 0.5,
                    (ca.y + cb.y) * 0.5,
                ));
            }
        }
    }
    points
}

/// Edge-crossing candidates between every zone pair: each rim column of
/// one crossed with each rim row of the other, plus axis neighbors.
fn crossing_points(zones: &[Bounds], margin: f32, step: f32) -> Vec<Point2D> {
    let mut points = Vec::new();
    for i in 0..zones.len() {
        for j in (i + 1)..zones.len() {
            let ra = zones[i].expand(margin);
            let rb = zones[j].expand(margin);
            for &x in &[ra.min.x, ra.max.x] {
                for &y in &[rb.min.y, rb.max.y] {
                    points.extend(axis_neighborhood(Point2D::new(x, y), step));
                }
            }
            for &x in &[rb.min.x, rb.max.x] {
                for &y in &[ra.min.y, ra.max.y] {
                    points.extend(axis_neighborhood(Point2D::new(x, y), step));
                }
            }
        }
    }
    points
}

/// A point plus its four axis-offset neighbors.
fn axis_neighborhood(p: Point2D, step: f32) -> Vec<Point2D> {
    vec![
        p,
        Point2D::new(p.x - step, p.y),
        Point2D::new(p.x + step, p.y),
        Point2D::new(p.x, p.y - step),
        Point2D::new(p.x, p.y + step),
    ]
}

/// Venue bounding box corners plus evenly spaced samples per edge.
fn boundary_points(bounds: &Bounds, samples: usize) -> Vec<Point2D> {
    if bounds.is_empty() {
        return Vec::new();
    }
    let mut points = bounds.corners().to_vec();
    for i in 1..=samples {
        let t = i as f32 / (samples + 1) as f32;
        let x = bounds.min.x + bounds.width() * t;
        let y = bounds.min.y + bounds.height() * t;
        points.push(Point2D::new(x, bounds.min.y));
        points.push(Point2D::new(x, bounds.max.y));
        points.push(Point2D::new(bounds.min.x, y));
        points.push(Point2D::new(bounds.max.x, y));
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> MargaConfig {
        MargaConfig::default()
    }

    fn venue_bounds() -> Bounds {
        Bounds::new(Point2D::new(-50.0, -50.0), Point2D::new(150.0, 150.0))
    }

    #[test]
    fn test_axis_samples_endpoints_and_density() {
        let samples = axis_samples(0.0, 100.0, 20.0, 5.0, 20.0);
        assert_eq!(samples[0], 0.0);
        assert_eq!(*samples.last().unwrap(), 100.0);
        // Dense near both ends
        assert!(samples.contains(&5.0));
        assert!(samples.contains(&85.0));
        // Coarse in the middle: 45 is not on the 20-unit lattice from 20
        assert!(!samples.contains(&45.0));
    }

    #[test]
    fn test_axis_samples_degenerate_span() {
        assert_eq!(axis_samples(5.0, 5.0, 20.0, 5.0, 20.0), vec![5.0]);
    }

    #[test]
    fn test_all_grid_points_are_clear() {
        let zones = vec![
            Bounds::new(Point2D::new(0.0, 0.0), Point2D::new(20.0, 40.0)),
            Bounds::new(Point2D::new(50.0, 0.0), Point2D::new(70.0, 40.0)),
        ];
        let access = vec![Point2D::new(-3.0, 20.0)];
        let grid = build_nav_grid(&zones, venue_bounds(), &access, &test_config());
        assert!(!grid.is_empty());

        let clearance = Clearance::new(&zones);
        for p in &grid {
            assert!(clearance.is_point_clear(*p), "unclear grid point {:?}", p);
        }
    }

    #[test]
    fn test_grid_is_deduplicated() {
        let zones = vec![Bounds::new(Point2D::new(0.0, 0.0), Point2D::new(20.0, 40.0))];
        let grid = build_nav_grid(&zones, venue_bounds(), &[], &test_config());
        let mut seen = HashSet::new();
        for p in &grid {
            assert!(seen.insert((p.x.to_bits(), p.y.to_bits())), "duplicate {:?}", p);
        }
    }

    #[test]
    fn test_grid_contains_access_point() {
        let zones = vec![Bounds::new(Point2D::new(0.0, 0.0), Point2D::new(20.0, 40.0))];
        let access = Point2D::new(-3.0, 20.0);
        let grid = build_nav_grid(&zones, venue_bounds(), &[access], &test_config());
        assert!(grid.contains(&access));
    }

    #[test]
    fn test_grid_is_deterministic() {
        let zones = vec![
            Bounds::new(Point2D::new(0.0, 0.0), Point2D::new(20.0, 40.0)),
            Bounds::new(Point2D::new(40.0, 10.0), Point2D::new(60.0, 50.0)),
        ];
        let access = vec![Point2D::new(-3.0, 20.0)];
        let a = build_nav_grid(&zones, venue_bounds(), &access, &test_config());
        let b = build_nav_grid(&zones, venue_bounds(), &access, &test_config());
        assert_eq!(a, b);
    }

    #[test]
    fn test_corridor_point_between_aligned_zones() {
        let zones = vec![
            Bounds::new(Point2D::new(0.0, 0.0), Point2D::new(20.0, 40.0)),
            Bounds::new(Point2D::new(0.0, 60.0), Point2D::new(20.0, 100.0)),
        ];
        let points = corridor_points(&zones, &test_config().grid);
        // Center midpoint and the facing-edge midpoint
        assert!(points.contains(&Point2D::new(10.0, 50.0)));
    }

    #[test]
    fn test_distant_zones_get_no_corridor() {
        let zones = vec![
            Bounds::new(Point2D::new(0.0, 0.0), Point2D::new(20.0, 40.0)),
            Bounds::new(Point2D::new(0.0, 200.0), Point2D::new(20.0, 240.0)),
        ];
        assert!(corridor_points(&zones, &test_config().grid).is_empty());
    }
}
