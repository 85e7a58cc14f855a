//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::algos::StrategyKind;

/// Top-level `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Relaxation settings
    #[serde(default)]
    pub engine: EngineSection,

    /// Human report settings
    #[serde(default)]
    pub report: ReportSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSection {
    /// Strategy used when `--strategy` is not given
    #[serde(default)]
    pub default_strategy: StrategyKind,

    /// Minimum improvement for an edge to relax
    #[serde(default)]
    pub tolerance: f64,
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            default_strategy: StrategyKind::default(),
            tolerance: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    /// Append the distance to every human path line
    #[serde(default)]
    pub show_distances: bool,
}
