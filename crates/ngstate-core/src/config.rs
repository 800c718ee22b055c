use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::share_url::DEFAULT_VIEWER_PREFIX;
use crate::state::{BlendMode, Layout};

/// Defaults applied to image layers built from the CLI (optional `[image]` section).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageDefaults {
    /// Opacity in [0, 1]; the viewer uses 0.5 when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// "default" or "additive".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blend: Option<BlendMode>,
}

/// Global configuration loaded from `~/.config/ngstate/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NgConfig {
    /// Viewer deployment links point at (everything before `#!`).
    pub viewer_prefix: String,
    /// Layout used when a command does not pass `--layout`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_layout: Option<Layout>,
    #[serde(default)]
    pub image: ImageDefaults,
}

impl Default for NgConfig {
    fn default() -> Self {
        Self {
            viewer_prefix: DEFAULT_VIEWER_PREFIX.to_string(),
            default_layout: None,
            image: ImageDefaults::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ngstate")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NgConfig> {
    load_or_init_at(&config_path()?)
}

pub fn load_or_init_at(path: &Path) -> Result<NgConfig> {
    if !path.exists() {
        let default_cfg = NgConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir: {}", parent.display()))?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: NgConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
