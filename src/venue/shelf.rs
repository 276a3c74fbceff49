//! Shelf: a named destination attached to one side of an aisle.

use serde::{Deserialize, Serialize};

/// A named shelf group on an aisle side.
///
/// The weight determines the fraction of the side's span the shelf
/// occupies; ids are unique across the whole venue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    /// Venue-unique shelf id
    pub id: String,
    /// Relative share of the side's span
    pub weight: f32,
}

impl Shelf {
    /// Create a new shelf
    pub fn new(id: impl Into<String>, weight: f32) -> Self {
        Self {
            id: id.into(),
            weight,
        }
    }
}
