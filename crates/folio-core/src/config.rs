//! User configuration (`~/.folio/config.toml`)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::paths;

fn default_smooth_scroll() -> bool {
    true
}

/// Settings read from the config file; CLI flags take precedence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolioConfig {
    /// Theme name
    #[serde(default)]
    pub theme: Option<String>,
    /// Portfolio content file (built-in content when unset)
    #[serde(default)]
    pub content: Option<PathBuf>,
    /// Animate navigation jumps instead of snapping
    #[serde(default = "default_smooth_scroll")]
    pub smooth_scroll: bool,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            theme: None,
            content: None,
            smooth_scroll: default_smooth_scroll(),
        }
    }
}

impl FolioConfig {
    /// Load from the default location, falling back to defaults when absent
    pub fn load_default() -> Result<Self> {
        Self::load_or_default(&paths::config_file())
    }

    /// Load from `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load from `path`
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: FolioConfig = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        // Relative content paths are relative to the config file
        if let (Some(content), Some(dir)) = (config.content.as_ref(), path.parent()) {
            if content.is_relative() {
                config.content = Some(dir.join(content));
            }
        }

        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}
