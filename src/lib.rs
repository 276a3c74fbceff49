//! # Marga-Nav: Manhattan Route Planner for Aisle-Filled Venues
//!
//! A collision-free routing library for venues laid out as a polygonal
//! floor populated with rectangular aisles. Given an ordered list of shelf
//! ids, the planner produces an axis-aligned (Manhattan) waypoint route
//! that visits every shelf and returns to the origin, never crossing the
//! safety margin around any aisle.
//!
//! ## Features
//!
//! - **Margin-aware clearance**: every check runs against aisle rectangles
//!   grown by a configurable safety margin, never the raw geometry
//! - **Strategy cascade**: cheap elbow and detour constructions resolve
//!   most legs before the visibility-graph A* fallback is consulted
//! - **Greedy visit ordering**: destinations are sequenced
//!   nearest-unvisited-first, measured by planned leg length
//! - **Degradation is observable**: a leg that cannot be proven safe is
//!   returned flagged, never silently
//!
//! ## Quick Start
//!
//! ```rust
//! use marga_nav::{find_route_to_shelf, Aisle, Point2D, Shelf, Venue};
//!
//! let venue = Venue::new(vec![
//!     Point2D::new(-10.0, -10.0),
//!     Point2D::new(60.0, -10.0),
//!     Point2D::new(60.0, 60.0),
//!     Point2D::new(-10.0, 60.0),
//! ])
//! .with_aisles(vec![Aisle::new("a1", Point2D::new(0.0, 0.0), 20.0, 40.0)
//!     .with_side_a(vec![Shelf::new("milk", 1.0)])]);
//!
//! let route = find_route_to_shelf(&venue, "milk").unwrap();
//! assert!(route.verified);
//! assert_eq!(route.destination_count(), 1);
//! ```
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: Fundamental geometry (Point2D, Bounds, segment tests)
//! - [`config`]: Configuration types loaded from YAML
//! - [`venue`]: Venue model (aisles, shelves, access resolution)
//! - [`routing`]: Clearance checks, candidate grid, strategies, A*, planner
//!
//! ## Data Flow
//!
//! ```text
//!   Venue + shelf ids
//!         │ resolve ids, expand aisles by the safety margin
//!         ▼
//!   ShelfAccess list + keep-out zones
//!         │ build_nav_grid (shared per call)
//!         ▼
//!   Candidate waypoint set ──► per-leg strategy cascade
//!                                │ direct / corner / refined / wrap
//!                                │ └─ fallback: visibility-graph A*
//!                                ▼
//!                     greedy visit ordering + stitching
//!                                ▼
//!                 Route (Start, Regular*, Destination(n), …, End)
//! ```
//!
//! ## Concurrency
//!
//! A planning call is a pure synchronous computation: it borrows the venue
//! immutably, owns all intermediate state, and touches no globals. Callers
//! needing latency isolation run calls on their own threads; concurrent
//! calls need no coordination as long as the venue is not mutated
//! mid-call.

pub mod config;
pub mod core;
pub mod error;
pub mod routing;
pub mod venue;

// Re-export main types at crate root
pub use config::{ConfigLoadError, MargaConfig};
pub use core::{Bounds, Point2D};
pub use error::RouteError;
pub use routing::{
    find_route_to_shelf, find_route_to_shelves, LegInfo, LegStrategy, Route, RoutePlanner,
    Waypoint, WaypointKind,
};
pub use venue::{Aisle, AisleSide, Shelf, ShelfAccess, Venue};
