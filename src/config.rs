//! Configuration loading for the scan command.
//!
//! A `.relcheck.toml` in the scan root adjusts which subtrees are searched;
//! every field has a default, so no file is required at all.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".relcheck.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelcheckConfig {
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Root-relative directories to search for model files.
    #[serde(default = "default_search_paths")]
    pub paths: Vec<PathBuf>,

    /// File extension of declaration-bearing sources.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Glob patterns for paths to skip.
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            paths: default_search_paths(),
            extension: default_extension(),
            ignore: vec![],
        }
    }
}

fn default_search_paths() -> Vec<PathBuf> {
    vec![PathBuf::from("app/models"), PathBuf::from("lib")]
}

fn default_extension() -> String {
    "rb".to_string()
}

/// Load configuration for a scan rooted at `root`.
///
/// An explicit `--config` path must exist; the conventional file in the root
/// is optional and silently defaulted when absent.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<RelcheckConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let conventional = root.join(CONFIG_FILE_NAME);
            if !conventional.is_file() {
                return Ok(RelcheckConfig::default());
            }
            conventional
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    let config: RelcheckConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
    log::debug!("loaded configuration from '{}'", path.display());
    Ok(config)
}
