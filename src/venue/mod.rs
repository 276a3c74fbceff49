//! Venue model: aisles, shelves, and shelf access resolution.

mod access;
mod aisle;
mod floorplan;
mod shelf;

pub use access::{expand_aisles, resolve_access, ShelfAccess};
pub use aisle::{Aisle, AisleSide};
pub use floorplan::Venue;
pub use shelf::Shelf;
