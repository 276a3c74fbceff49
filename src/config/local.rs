//! Local path strategy configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Settings for the local strategy cascade
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocalSection {
    /// Scan resolutions for refined intermediate paths, coarse to fine
    #[serde(default = "defaults::refine_resolutions")]
    pub refine_resolutions: Vec<f32>,

    /// Extra expansion for the wide wrap-around relevance probe
    #[serde(default = "defaults::wrap_probe_margin")]
    pub wrap_probe_margin: f32,
}

impl Default for LocalSection {
    fn default() -> Self {
        Self {
            refine_resolutions: defaults::refine_resolutions(),
            wrap_probe_margin: 50.0,
        }
    }
}
