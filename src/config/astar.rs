//! Visibility-graph search configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// A* search settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AStarSettings {
    /// Maximum nodes to expand before giving up
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,
}

impl Default for AStarSettings {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
        }
    }
}
