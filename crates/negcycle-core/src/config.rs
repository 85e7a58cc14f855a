//! User configuration for negcycle
//!
//! Stored in `~/.config/negcycle/config.toml`, or under `NEGCYCLE_CONFIG_DIR`
//! when that is set. A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{NegCycleError, Result};
use crate::graph::algos::RelaxOptions;

pub use types::{EngineConfig, EngineSection, ReportSection};

const CONFIG_DIR: &str = "negcycle";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV_VAR: &str = "NEGCYCLE_CONFIG_DIR";

impl EngineConfig {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    NegCycleError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load and validate configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load from the default location, falling back to defaults if absent
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn validate(&self) -> Result<()> {
        let tolerance = self.engine.tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(NegCycleError::invalid_value("engine.tolerance", tolerance));
        }
        Ok(())
    }

    pub fn relax_options(&self) -> RelaxOptions {
        RelaxOptions::with_tolerance(self.engine.tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::algos::StrategyKind;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.engine.default_strategy, StrategyKind::CycleMembership);
        assert_eq!(config.engine.tolerance, 0.0);
        assert!(!config.report.show_distances);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_full_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = EngineConfig {
            engine: EngineSection {
                default_strategy: StrategyKind::Fifo,
                tolerance: 1e-9,
            },
            report: ReportSection {
                show_distances: true,
            },
        };
        fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.relax_options().tolerance, 1e-9);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[engine]\ndefault_strategy = \"early-exit\"\n").unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded.engine.default_strategy, StrategyKind::EarlyExit);
        assert_eq!(loaded.engine.tolerance, 0.0);
        assert!(!loaded.report.show_distances);
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[engine]\ntolerance = -0.5\n").unwrap();

        let err = EngineConfig::load(&path).unwrap_err();
        assert!(matches!(err, NegCycleError::InvalidValue { ref context, .. } if context == "engine.tolerance"));
    }

    #[test]
    fn test_unknown_strategy_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[engine]\ndefault_strategy = \"dijkstra\"\n").unwrap();

        assert!(matches!(
            EngineConfig::load(&path),
            Err(NegCycleError::Toml(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            EngineConfig::load(&dir.path().join("absent.toml")),
            Err(NegCycleError::Io(_))
        ));
    }
}
