//! Main DrishtiConfig and loading methods.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use super::error::ConfigLoadError;
use super::time::TimeSection;

/// Default config path, relative to the working directory
const DEFAULT_CONFIG_PATH: &str = "configs/drishti.yaml";

/// Full drishti-view configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct DrishtiConfig {
    /// Time display settings
    #[serde(default)]
    pub time: TimeSection,
}

impl DrishtiConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        let config = Self::from_yaml(&contents)?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from default config path (configs/drishti.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }
}
