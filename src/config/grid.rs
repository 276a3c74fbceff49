//! Navigation grid density configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Candidate waypoint density settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSection {
    /// Spacing of perimeter samples along a zone rim
    #[serde(default = "defaults::perimeter_spacing")]
    pub perimeter_spacing: f32,

    /// Denser spacing used near rim corners
    #[serde(default = "defaults::corner_spacing")]
    pub corner_spacing: f32,

    /// Distance from a corner within which the denser spacing applies
    #[serde(default = "defaults::corner_zone")]
    pub corner_zone: f32,

    /// Offset used for corner points, crossing neighbors and access neighbors
    #[serde(default = "defaults::offset_step")]
    pub offset_step: f32,

    /// Maximum box separation for corridor shortcut candidates
    #[serde(default = "defaults::corridor_range")]
    pub corridor_range: f32,

    /// Center alignment tolerance for the between-facing-edges candidate
    #[serde(default = "defaults::alignment_tolerance")]
    pub alignment_tolerance: f32,

    /// Evenly spaced samples per venue bounding box edge
    #[serde(default = "defaults::boundary_samples")]
    pub boundary_samples: usize,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            perimeter_spacing: 20.0,
            corner_spacing: 5.0,
            corner_zone: 20.0,
            offset_step: 10.0,
            corridor_range: 60.0,
            alignment_tolerance: 20.0,
            boundary_samples: 5,
        }
    }
}
