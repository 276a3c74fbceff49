//! Local path strategies.
//!
//! Per leg the planner tries a cascade of cheap constructions before
//! falling back to graph search:
//!
//! 1. **Direct**: the horizontal-then-vertical elbow.
//! 2. **Corner**: both elbow orders, shorter clear one wins.
//! 3. **Refined**: double elbows through intermediate rows/columns
//!    scanned at successively finer resolutions.
//! 4. **Wrap**: the twelve canonical detours around one relevant zone.
//! 5. **Graph**: visibility-graph A* over the shared candidate grid.
//!
//! Anything the cascade emits has passed through [`rectify`], so output
//! paths never contain diagonal moves. Everything except the last-resort
//! fallback has also been verified by the clearance checker.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::MargaConfig;
use crate::core::{segment_intersects_bounds, Bounds, Point2D};

use super::astar;
use super::clearance::{segment_blocked_by, Clearance};

/// Which strategy produced a leg.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LegStrategy {
    /// Direct elbow
    Direct,
    /// Reversed-order elbow
    Corner,
    /// Resolution-scanned intermediate path
    Refined,
    /// Detour around a single zone
    Wrap,
    /// Visibility-graph A*
    Graph,
    /// Unverified direct elbow; the leg could not be proven safe
    Fallback,
}

/// A planned single leg.
#[derive(Clone, Debug)]
pub struct LegPath {
    /// Waypoints including both endpoints; consecutive points are
    /// axis-aligned
    pub points: Vec<Point2D>,
    /// Manhattan length
    pub length: f32,
    /// False only for the last-resort fallback
    pub verified: bool,
    /// Strategy that produced the leg
    pub strategy: LegStrategy,
}

/// Repair a point list into a Manhattan path.
///
/// Inserts the `(next.x, prev.y)` corner wherever two consecutive points
/// differ on both axes and collapses consecutive duplicates. Guarantees
/// the no-diagonal invariant regardless of which strategy produced the
/// input.
pub fn rectify(points: &[Point2D]) -> Vec<Point2D> {
    let mut out: Vec<Point2D> = Vec::with_capacity(points.len());
    for &p in points {
        if let Some(&prev) = out.last() {
            if prev == p {
                continue;
            }
            if !prev.is_aligned_with(&p) {
                out.push(Point2D::new(p.x, prev.y));
            }
        }
        out.push(p);
    }
    out
}

/// Manhattan length of a path.
pub fn path_length(points: &[Point2D]) -> f32 {
    points
        .windows(2)
        .map(|w| w[0].manhattan_distance(&w[1]))
        .sum()
}

/// The horizontal-then-vertical elbow from a to b.
pub fn direct_elbow(a: Point2D, b: Point2D) -> Vec<Point2D> {
    rectify(&[a, b])
}

/// Both elbow orders between a and b.
fn corner_candidates(a: Point2D, b: Point2D) -> Vec<Vec<Point2D>> {
    vec![
        rectify(&[a, Point2D::new(b.x, a.y), b]),
        rectify(&[a, Point2D::new(a.x, b.y), b]),
    ]
}

/// Double elbows through every intermediate column and row at one scan
/// resolution, within the leg's bounding box expanded by that resolution.
///
/// A column equal to an endpoint's x collapses to the three-point elbow
/// through duplicate removal; same for rows.
fn refined_candidates(a: Point2D, b: Point2D, resolution: f32) -> Vec<Vec<Point2D>> {
    let resolution = resolution.max(0.5);
    let mut span = Bounds::empty();
    span.expand_to_include(a);
    span.expand_to_include(b);
    let scan = span.expand(resolution);

    let mut candidates = Vec::new();
    let mut x = scan.min.x;
    while x <= scan.max.x {
        candidates.push(rectify(&[a, Point2D::new(x, a.y), Point2D::new(x, b.y), b]));
        x += resolution;
    }
    let mut y = scan.min.y;
    while y <= scan.max.y {
        candidates.push(rectify(&[a, Point2D::new(a.x, y), Point2D::new(b.x, y), b]));
        y += resolution;
    }
    candidates
}

/// Does this zone make the leg worth wrapping around?
///
/// True when the direct elbow touches the zone, when the zone straddle
/// rule blocks either elbow half, or when the raw origin-goal line hits a
/// widely expanded copy of the zone.
fn is_wrap_relevant(
    a: Point2D,
    b: Point2D,
    elbow: &[Point2D],
    zone: &Bounds,
    probe_margin: f32,
) -> bool {
    elbow
        .windows(2)
        .any(|w| segment_intersects_bounds(w[0], w[1], zone))
        || elbow.windows(2).any(|w| segment_blocked_by(zone, w[0], w[1]))
        || segment_intersects_bounds(a, b, &zone.expand(probe_margin))
}

/// The twelve canonical detours around one zone rim: four side-channel
/// Z-paths aligned to the endpoints, four rim-hugging approaches entering
/// at the rim side nearest the origin and leaving nearest the goal, and
/// four corner L-detours.
fn wrap_candidates(a: Point2D, b: Point2D, rim: &Bounds) -> Vec<Vec<Point2D>> {
    let (l, r) = (rim.min.x, rim.max.x);
    let (t, bt) = (rim.min.y, rim.max.y);
    let center = rim.center();
    let enter_x = if a.x <= center.x { l } else { r };
    let exit_x = if b.x <= center.x { l } else { r };
    let enter_y = if a.y <= center.y { t } else { bt };
    let exit_y = if b.y <= center.y { t } else { bt };

    let mut shapes: Vec<Vec<Point2D>> = Vec::with_capacity(12);
    for yc in [t, bt] {
        shapes.push(vec![a, Point2D::new(a.x, yc), Point2D::new(b.x, yc), b]);
    }
    for xc in [l, r] {
        shapes.push(vec![a, Point2D::new(xc, a.y), Point2D::new(xc, b.y), b]);
    }
    for yc in [t, bt] {
        shapes.push(vec![
            a,
            Point2D::new(enter_x, a.y),
            Point2D::new(enter_x, yc),
            Point2D::new(exit_x, yc),
            Point2D::new(exit_x, b.y),
            b,
        ]);
    }
    for xc in [l, r] {
        shapes.push(vec![
            a,
            Point2D::new(a.x, enter_y),
            Point2D::new(xc, enter_y),
            Point2D::new(xc, exit_y),
            Point2D::new(b.x, exit_y),
            b,
        ]);
    }
    for corner in rim.corners() {
        shapes.push(vec![
            a,
            Point2D::new(corner.x, a.y),
            corner,
            Point2D::new(b.x, corner.y),
            b,
        ]);
    }

    shapes.iter().map(|s| rectify(s)).collect()
}

/// Shortest clear candidate by Manhattan length; ties keep the first.
fn shortest_clear(
    candidates: Vec<Vec<Point2D>>,
    clearance: &Clearance,
) -> Option<(Vec<Point2D>, f32)> {
    let mut best: Option<(Vec<Point2D>, f32)> = None;
    for candidate in candidates {
        if !clearance.is_path_clear(&candidate) {
            continue;
        }
        let length = path_length(&candidate);
        let better = match &best {
            None => true,
            Some((_, best_length)) => length < *best_length,
        };
        if better {
            best = Some((candidate, length));
        }
    }
    best
}

/// Plan one leg through the strategy cascade.
pub fn plan_leg(
    origin: Point2D,
    goal: Point2D,
    zones: &[Bounds],
    grid: &[Point2D],
    config: &MargaConfig,
) -> LegPath {
    let clearance = Clearance::new(zones);

    if origin == goal {
        return LegPath {
            points: vec![origin],
            length: 0.0,
            verified: true,
            strategy: LegStrategy::Direct,
        };
    }

    let direct = direct_elbow(origin, goal);
    if clearance.is_path_clear(&direct) {
        return LegPath {
            length: path_length(&direct),
            points: direct,
            verified: true,
            strategy: LegStrategy::Direct,
        };
    }

    if let Some((points, length)) = shortest_clear(corner_candidates(origin, goal), &clearance) {
        return LegPath {
            points,
            length,
            verified: true,
            strategy: LegStrategy::Corner,
        };
    }

    for &resolution in &config.local.refine_resolutions {
        if let Some((points, length)) =
            shortest_clear(refined_candidates(origin, goal, resolution), &clearance)
        {
            return LegPath {
                points,
                length,
                verified: true,
                strategy: LegStrategy::Refined,
            };
        }
    }

    let relevant: Vec<Bounds> = zones
        .iter()
        .copied()
        .filter(|zone| {
            is_wrap_relevant(origin, goal, &direct, zone, config.local.wrap_probe_margin)
        })
        .collect();
    let wrap_zones: Vec<Bounds> = if relevant.is_empty() {
        // No zone was flagged; retry against every zone unconditionally
        zones.to_vec()
    } else {
        relevant
    };
    let mut candidates = Vec::new();
    for zone in &wrap_zones {
        candidates.extend(wrap_candidates(
            origin,
            goal,
            &zone.expand(config.safety.margin),
        ));
    }
    if let Some((points, length)) = shortest_clear(candidates, &clearance) {
        return LegPath {
            points,
            length,
            verified: true,
            strategy: LegStrategy::Wrap,
        };
    }

    if let Some(points) = astar::search(grid, origin, goal, &clearance, config.astar.max_iterations)
    {
        debug!(
            "[Leg] graph search resolved ({:.1},{:.1}) -> ({:.1},{:.1})",
            origin.x, origin.y, goal.x, goal.y
        );
        return LegPath {
            length: path_length(&points),
            points,
            verified: true,
            strategy: LegStrategy::Graph,
        };
    }

    warn!(
        "[Leg] no verified path from ({:.1},{:.1}) to ({:.1},{:.1}); returning unverified direct elbow",
        origin.x, origin.y, goal.x, goal.y
    );
    LegPath {
        length: path_length(&direct),
        points: direct,
        verified: false,
        strategy: LegStrategy::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone() -> Vec<Bounds> {
        // Margin-expanded copy of a 20x40 aisle at the origin
        vec![Bounds::new(Point2D::new(-1.0, -1.0), Point2D::new(21.0, 41.0))]
    }

    fn assert_manhattan(points: &[Point2D]) {
        for w in points.windows(2) {
            assert!(
                w[0].is_aligned_with(&w[1]),
                "diagonal move {:?} -> {:?}",
                w[0],
                w[1]
            );
            assert_ne!(w[0], w[1], "duplicate point {:?}", w[0]);
        }
    }

    #[test]
    fn test_rectify_inserts_corner() {
        let fixed = rectify(&[Point2D::new(0.0, 0.0), Point2D::new(5.0, 7.0)]);
        assert_eq!(
            fixed,
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(5.0, 0.0),
                Point2D::new(5.0, 7.0),
            ]
        );
    }

    #[test]
    fn test_rectify_collapses_duplicates() {
        let p = Point2D::new(1.0, 1.0);
        let q = Point2D::new(1.0, 5.0);
        assert_eq!(rectify(&[p, p, q, q]), vec![p, q]);
    }

    #[test]
    fn test_rectify_arbitrary_input_is_manhattan() {
        let fixed = rectify(&[
            Point2D::new(0.0, 0.0),
            Point2D::new(3.0, 4.0),
            Point2D::new(-2.0, 4.0),
            Point2D::new(-2.0, -1.0),
            Point2D::new(7.0, 9.0),
        ]);
        assert_manhattan(&fixed);
        assert_eq!(fixed[0], Point2D::new(0.0, 0.0));
        assert_eq!(*fixed.last().unwrap(), Point2D::new(7.0, 9.0));
    }

    #[test]
    fn test_path_length() {
        let points = vec![
            Point2D::new(0.0, 0.0),
            Point2D::new(5.0, 0.0),
            Point2D::new(5.0, 3.0),
        ];
        assert_eq!(path_length(&points), 8.0);
    }

    #[test]
    fn test_direct_leg_when_unobstructed() {
        let zones = zone();
        let grid: Vec<Point2D> = Vec::new();
        let config = MargaConfig::default();
        let leg = plan_leg(
            Point2D::new(30.0, 50.0),
            Point2D::new(50.0, 60.0),
            &zones,
            &grid,
            &config,
        );
        assert!(leg.verified);
        assert_eq!(leg.strategy, LegStrategy::Direct);
        assert_eq!(leg.length, 30.0);
        assert_manhattan(&leg.points);
    }

    #[test]
    fn test_corner_leg_picks_clear_order() {
        let zones = zone();
        let grid: Vec<Point2D> = Vec::new();
        let config = MargaConfig::default();
        // Horizontal-first from (-10,20) crosses the zone row; vertical-first
        // goes up the clear left column and over the top
        let leg = plan_leg(
            Point2D::new(-10.0, 20.0),
            Point2D::new(30.0, 50.0),
            &zones,
            &grid,
            &config,
        );
        assert!(leg.verified);
        assert_eq!(leg.strategy, LegStrategy::Corner);
        assert_eq!(leg.length, 70.0);
        assert_manhattan(&leg.points);
    }

    #[test]
    fn test_blocked_leg_routes_around_zone() {
        let zones = zone();
        let grid: Vec<Point2D> = Vec::new();
        let config = MargaConfig::default();
        // Both elbows cross the zone: endpoints face each other through it
        let leg = plan_leg(
            Point2D::new(-10.0, 20.0),
            Point2D::new(30.0, 20.0),
            &zones,
            &grid,
            &config,
        );
        assert!(leg.verified);
        assert_manhattan(&leg.points);
        let clearance = Clearance::new(&zones);
        assert!(clearance.is_path_clear(&leg.points));
        // Any route must clear the zone: 40 across plus at least 2x21 vertical
        assert!(leg.length >= 82.0);
    }

    #[test]
    fn test_wrap_candidates_count_and_shape() {
        let rim = Bounds::new(Point2D::new(-2.0, -2.0), Point2D::new(22.0, 42.0));
        let shapes = wrap_candidates(Point2D::new(-10.0, 20.0), Point2D::new(30.0, 20.0), &rim);
        assert_eq!(shapes.len(), 12);
        for shape in &shapes {
            assert_manhattan(shape);
            assert_eq!(shape[0], Point2D::new(-10.0, 20.0));
            assert_eq!(*shape.last().unwrap(), Point2D::new(30.0, 20.0));
        }
    }

    #[test]
    fn test_fallback_leg_is_flagged() {
        // Goal sealed inside a ring of zones
        let zones = vec![
            Bounds::new(Point2D::new(-10.0, -10.0), Point2D::new(10.0, -5.0)),
            Bounds::new(Point2D::new(-10.0, 5.0), Point2D::new(10.0, 10.0)),
            Bounds::new(Point2D::new(-10.0, -10.0), Point2D::new(-5.0, 10.0)),
            Bounds::new(Point2D::new(5.0, -10.0), Point2D::new(10.0, 10.0)),
        ];
        let grid: Vec<Point2D> = Vec::new();
        let config = MargaConfig::default();
        let leg = plan_leg(
            Point2D::new(-50.0, 0.0),
            Point2D::new(0.0, 0.0),
            &zones,
            &grid,
            &config,
        );
        assert!(!leg.verified);
        assert_eq!(leg.strategy, LegStrategy::Fallback);
        assert_manhattan(&leg.points);
    }
}
