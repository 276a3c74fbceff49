//! Unified configuration loading for the planner.
//!
//! Loads all configuration from a single YAML file.

mod astar;
mod defaults;
mod error;
mod grid;
mod local;
mod marga;
mod safety;

// Re-export main types
pub use error::ConfigLoadError;
pub use marga::MargaConfig;

// Re-export section types
pub use astar::AStarSettings;
pub use grid::GridSection;
pub use local::LocalSection;
pub use safety::SafetySection;
