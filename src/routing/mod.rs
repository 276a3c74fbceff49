//! Route planning algorithms.
//!
//! This module turns a venue and a list of shelf ids into an annotated
//! Manhattan waypoint route:
//!
//! - **Clearance**: point/segment/path checks against keep-out zones
//! - **Grid**: candidate waypoint generation for the visibility graph
//! - **Local strategies**: cheap per-leg constructions tried first
//! - **A\***: visibility-graph search fallback
//! - **Planner**: visit ordering and waypoint assembly
//!
//! ## Planning a route
//!
//! ```rust,ignore
//! use marga_nav::routing::{RoutePlanner, WaypointKind};
//!
//! let planner = RoutePlanner::with_defaults();
//! let route = planner.plan(&venue, &["milk", "bread"])?;
//! for waypoint in &route.waypoints {
//!     println!("{:?} at ({}, {})", waypoint.kind, waypoint.point.x, waypoint.point.y);
//! }
//! ```

pub mod astar;
pub mod clearance;
pub mod grid;
pub mod local;
pub mod planner;

pub use clearance::Clearance;
pub use grid::build_nav_grid;
pub use local::{direct_elbow, path_length, plan_leg, rectify, LegPath, LegStrategy};
pub use planner::{
    find_route_to_shelf, find_route_to_shelves, LegInfo, Route, RoutePlanner, Waypoint,
    WaypointKind,
};
