//! Index Config - Load generation settings from a YAML file.
//!
//! ```yaml
//! description_budget: 130
//! parallel: true
//! output_format: js
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::description::DEFAULT_DESCRIPTION_BUDGET;
use crate::error::{Result, SearchIndexError};
use crate::output::OutputFormat;

/// Settings for one generation run. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Visible-character budget for entry descriptions.
    pub description_budget: usize,
    /// Run per-record stages on the rayon pool.
    pub parallel: bool,
    /// Artifact flavor.
    pub output_format: OutputFormat,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            description_budget: DEFAULT_DESCRIPTION_BUDGET,
            parallel: true,
            output_format: OutputFormat::default(),
        }
    }
}

impl IndexConfig {
    /// Parse settings from YAML text. Empty text yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SearchIndexError::Config`] for malformed YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load settings from a YAML file; a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SearchIndexError::Io`] if the file exists but cannot be read
    /// and [`SearchIndexError::Config`] if it is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::warn!("Config file not found: {}", path.display());
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| SearchIndexError::io(path, e))?;
        Self::from_yaml_str(&content)
    }
}
