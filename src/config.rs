//! Configuration file handling for dirbundle.
//!
//! The configuration lives in a small JSON file next to where the tool is run,
//! holding the output file name and the user's ignore globs. The config file
//! and the output file are always excluded from bundles, on top of whatever
//! patterns the user configured.

use crate::error::BundleError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the configuration file, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".dirbundle.json";

/// Output file name used when the configuration does not specify one.
pub const DEFAULT_OUTPUT_NAME: &str = "directorycontents.json";

/// On-disk configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// File the JSON bundle is written to, relative to the scan root.
    pub output_name: String,
    /// Glob patterns matched against root-relative paths; matches are skipped,
    /// matching directories are pruned whole.
    pub ignore_patterns: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_name: DEFAULT_OUTPUT_NAME.to_string(),
            ignore_patterns: Vec::new(),
        }
    }
}

impl Config {
    /// Reads and parses the configuration at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BundleError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| BundleError::io(path, e))?;
        serde_json::from_str(&raw).map_err(|e| BundleError::ConfigFormat {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Writes the configuration to `path` as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BundleError> {
        let path = path.as_ref();
        let mut data = serde_json::to_string_pretty(self)?;
        data.push('\n');
        fs::write(path, data).map_err(|e| BundleError::io(path, e))
    }

    /// The configured patterns plus the implicit exclusions for the config
    /// file and the output file.
    pub fn effective_ignore_patterns(&self) -> Vec<String> {
        let mut patterns = self.ignore_patterns.clone();
        patterns.push(CONFIG_FILE_NAME.to_string());
        patterns.push(self.output_name.clone());
        patterns
    }
}
