//! Error types for route planning.

use thiserror::Error;

/// Route planning error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A requested shelf id matched no shelf on any aisle side.
    #[error("Shelf not found: {0}")]
    ShelfNotFound(String),

    /// The destination list was empty.
    #[error("No destinations requested")]
    NoDestinations,

    /// The venue has no boundary vertices, so there is no origin.
    #[error("Venue has no boundary")]
    EmptyVenue,
}

pub type Result<T> = std::result::Result<T, RouteError>;
