//! Multi-destination route planning.
//!
//! Resolves shelf ids to access points, orders the visits with a greedy
//! nearest-unvisited heuristic, plans every leg through the strategy
//! cascade, and stitches the legs into one annotated waypoint sequence
//! that starts and ends at the venue origin (its first boundary vertex).

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::MargaConfig;
use crate::core::{Bounds, Point2D};
use crate::error::{Result, RouteError};
use crate::venue::{expand_aisles, resolve_access, ShelfAccess, Venue};

use super::grid::build_nav_grid;
use super::local::{plan_leg, LegPath, LegStrategy};

/// Role of a waypoint within a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaypointKind {
    /// Route origin (exactly one, first)
    Start,
    /// Intermediate travel point
    Regular,
    /// A visited shelf, numbered 1-based in visitation order
    Destination(usize),
    /// Back at the origin (exactly one, last)
    End,
}

/// One point of a route.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Position in venue units
    pub point: Point2D,
    /// Role within the route
    pub kind: WaypointKind,
}

/// Per-leg diagnostics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegInfo {
    /// Shelf id this leg reaches, or `None` for the return leg
    pub destination: Option<String>,
    /// Strategy that produced the leg
    pub strategy: LegStrategy,
    /// Manhattan length of the leg
    pub length: f32,
    /// False when the leg is the unverified fallback
    pub verified: bool,
}

/// A planned route: the annotated waypoint sequence plus per-leg
/// diagnostics.
///
/// `verified` is true only when every leg passed the clearance checker;
/// a route with `verified == false` contains at least one leg that may
/// cross a keep-out zone and should be treated as degraded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Waypoints from `Start` to `End`
    pub waypoints: Vec<Waypoint>,
    /// One entry per destination leg plus the return leg
    pub legs: Vec<LegInfo>,
    /// Summed Manhattan length of all legs
    pub length: f32,
    /// True iff every leg is verified safe
    pub verified: bool,
}

impl Route {
    /// Number of destination waypoints
    pub fn destination_count(&self) -> usize {
        self.waypoints
            .iter()
            .filter(|w| matches!(w.kind, WaypointKind::Destination(_)))
            .count()
    }
}

/// Multi-destination route planner.
pub struct RoutePlanner {
    config: MargaConfig,
}

impl RoutePlanner {
    /// Create a planner with the given configuration
    pub fn new(config: MargaConfig) -> Self {
        Self { config }
    }

    /// Create a planner with default configuration
    pub fn with_defaults() -> Self {
        Self::new(MargaConfig::default())
    }

    /// The planner's configuration
    pub fn config(&self) -> &MargaConfig {
        &self.config
    }

    /// Plan a route visiting every requested shelf and returning to the
    /// origin.
    ///
    /// Fails without a partial route when the id list is empty, the venue
    /// has no boundary, or any id is unknown. The venue is never mutated.
    pub fn plan<S: AsRef<str>>(&self, venue: &Venue, shelf_ids: &[S]) -> Result<Route> {
        if shelf_ids.is_empty() {
            return Err(RouteError::NoDestinations);
        }
        let origin = *venue.boundary.first().ok_or(RouteError::EmptyVenue)?;

        let access_offset = self.config.safety.access_offset();
        let mut resolved = Vec::with_capacity(shelf_ids.len());
        for id in shelf_ids {
            let id = id.as_ref();
            let access = resolve_access(venue, id, access_offset)
                .ok_or_else(|| RouteError::ShelfNotFound(id.to_string()))?;
            resolved.push(access);
        }

        let zones = expand_aisles(&venue.aisles, self.config.safety.margin);
        let access_points: Vec<Point2D> = resolved.iter().map(|a| a.access_point).collect();
        let grid = build_nav_grid(&zones, venue.bounding_box(), &access_points, &self.config);
        debug!(
            "[Planner] routing to {} shelves over {} grid points",
            resolved.len(),
            grid.len()
        );

        let ordered = self.order_visits(origin, resolved, &zones, &grid);

        let mut waypoints = vec![Waypoint {
            point: origin,
            kind: WaypointKind::Start,
        }];
        let mut legs = Vec::with_capacity(ordered.len() + 1);
        let mut total = 0.0;
        let mut current = origin;

        for (index, (access, leg)) in ordered.into_iter().enumerate() {
            // The first leg starts at the Start waypoint itself; every later
            // leg starts at the access point the previous Destination stepped
            // aside from, which must reappear so consecutive waypoints stay
            // axis-aligned.
            let skip = usize::from(index == 0);
            for &p in leg.points.iter().skip(skip) {
                waypoints.push(Waypoint {
                    point: p,
                    kind: WaypointKind::Regular,
                });
            }
            waypoints.push(Waypoint {
                point: access.shelf_position,
                kind: WaypointKind::Destination(index + 1),
            });
            current = access.access_point;
            total += leg.length;
            legs.push(LegInfo {
                destination: Some(access.shelf_id),
                strategy: leg.strategy,
                length: leg.length,
                verified: leg.verified,
            });
        }

        let return_leg = plan_leg(current, origin, &zones, &grid, &self.config);
        let last = return_leg.points.len() - 1;
        for (i, &p) in return_leg.points.iter().enumerate() {
            let kind = if i == last {
                WaypointKind::End
            } else {
                WaypointKind::Regular
            };
            waypoints.push(Waypoint { point: p, kind });
        }
        total += return_leg.length;
        legs.push(LegInfo {
            destination: None,
            strategy: return_leg.strategy,
            length: return_leg.length,
            verified: return_leg.verified,
        });

        let verified = legs.iter().all(|l| l.verified);
        if !verified {
            debug!("[Planner] route contains unverified legs");
        }
        Ok(Route {
            waypoints,
            legs,
            length: total,
            verified,
        })
    }

    /// Greedy nearest-unvisited ordering.
    ///
    /// From the current position, plans a leg to every remaining access
    /// point and commits to the strictly shortest (ties keep the earliest
    /// input position). The winning leg is reused, not replanned.
    fn order_visits(
        &self,
        origin: Point2D,
        mut remaining: Vec<ShelfAccess>,
        zones: &[Bounds],
        grid: &[Point2D],
    ) -> Vec<(ShelfAccess, LegPath)> {
        let mut ordered = Vec::with_capacity(remaining.len());
        let mut current = origin;
        while !remaining.is_empty() {
            let mut best: Option<(usize, LegPath)> = None;
            for (i, access) in remaining.iter().enumerate() {
                let leg = plan_leg(current, access.access_point, zones, grid, &self.config);
                let better = match &best {
                    None => true,
                    Some((_, b)) => leg.length < b.length,
                };
                if better {
                    best = Some((i, leg));
                }
            }
            let Some((i, leg)) = best else { break };
            let access = remaining.remove(i);
            current = access.access_point;
            ordered.push((access, leg));
        }
        ordered
    }
}

/// Plan a route visiting the given shelves with default configuration.
pub fn find_route_to_shelves<S: AsRef<str>>(venue: &Venue, shelf_ids: &[S]) -> Result<Route> {
    RoutePlanner::with_defaults().plan(venue, shelf_ids)
}

/// Plan a route to a single shelf with default configuration.
pub fn find_route_to_shelf(venue: &Venue, shelf_id: &str) -> Result<Route> {
    find_route_to_shelves(venue, &[shelf_id])
}
