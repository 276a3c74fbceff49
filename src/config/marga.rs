//! Main MargaConfig loaded from YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::astar::AStarSettings;
use super::error::ConfigLoadError;
use super::grid::GridSection;
use super::local::LocalSection;
use super::safety::SafetySection;

/// Full planner configuration loaded from YAML
///
/// Every tuning literal of the planner lives here so behavior can be
/// exercised at multiple scales. All sections default sensibly for venues
/// measured in single-digit-to-hundreds of units.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Clearance settings
    #[serde(default)]
    pub safety: SafetySection,

    /// Candidate waypoint density settings
    #[serde(default)]
    pub grid: GridSection,

    /// Local strategy settings
    #[serde(default)]
    pub local: LocalSection,

    /// Graph search settings
    #[serde(default)]
    pub astar: AStarSettings,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }
}
