//! Artifact rendering - JSON or an ES module wrapping the JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchIndexError};
use crate::types::SearchIndex;

/// Prefix of the ES module flavor.
const JS_MODULE_PREFIX: &str = "export default ";

/// Serialized form of the index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `export default {...}`, loadable with a dynamic `import()`.
    #[default]
    Js,
    /// Plain JSON.
    Json,
}

impl OutputFormat {
    /// Render the index.
    ///
    /// # Errors
    ///
    /// Returns [`SearchIndexError::Json`] if serialization fails.
    pub fn render(self, index: &SearchIndex) -> Result<String> {
        let json = serde_json::to_string(index)?;
        Ok(match self {
            Self::Js => format!("{JS_MODULE_PREFIX}{json}"),
            Self::Json => json,
        })
    }
}

/// Render the index and write it to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`SearchIndexError::Io`] on filesystem failures and
/// [`SearchIndexError::Json`] if serialization fails.
pub fn write_index(index: &SearchIndex, format: OutputFormat, path: &Path) -> Result<()> {
    let rendered = format.render(index)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| SearchIndexError::io(parent, e))?;
    }
    std::fs::write(path, rendered).map_err(|e| SearchIndexError::io(path, e))?;
    log::info!(
        "wrote {} entries to {}",
        index.entries.len(),
        path.display()
    );
    Ok(())
}
