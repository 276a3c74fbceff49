//! Safety margin configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Clearance settings around aisles
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SafetySection {
    /// Margin added around every aisle rectangle to form its keep-out zone
    #[serde(default = "defaults::safety_margin")]
    pub margin: f32,

    /// Extra clearance beyond the margin for shelf access points
    #[serde(default = "defaults::access_clearance")]
    pub access_clearance: f32,
}

impl SafetySection {
    /// Outward offset from a shelf's edge position to its access point.
    ///
    /// Places the access point strictly outside the keep-out zone.
    #[inline]
    pub fn access_offset(&self) -> f32 {
        self.margin + self.access_clearance
    }
}

impl Default for SafetySection {
    fn default() -> Self {
        Self {
            margin: 1.0,
            access_clearance: 1.0,
        }
    }
}
