//! Default render options, read from `~/.config/layertree/config.json`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::renderer::{DepthLimit, RenderOptions};

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub max_depth: Option<i64>,
    #[serde(default)]
    pub show_types: Option<bool>,
}

/// Get the default config file path
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("layertree")
        .join("config.json")
}

impl Config {
    /// Loads `path`, or the default location when `path` is `None`.
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = config_path();
                if !path.exists() {
                    debug!("no config file at {:?}, using defaults", path);
                    return Ok(Self::default());
                }
                Self::load_from(&path)
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        if contents.trim().is_empty() {
            debug!("config file {:?} is empty, using defaults", path);
            return Ok(Self::default());
        }

        let config: Config = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))?;
        debug!(?config, "loaded config from {:?}", path);
        Ok(config)
    }

    pub fn render_options(&self) -> Result<RenderOptions> {
        let max_depth = match self.max_depth {
            Some(depth) => DepthLimit::try_from(depth).context("Invalid maxDepth in config")?,
            None => DepthLimit::Unlimited,
        };
        Ok(RenderOptions {
            max_depth,
            show_types: self.show_types.unwrap_or(false),
        })
    }
}
