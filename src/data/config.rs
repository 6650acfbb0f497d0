use crate::data::assets;
use crate::slider::SliderConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Input poll interval while idle.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Cells between the container edge and the slider track.
    #[serde(default = "default_padding")]
    pub padding: u16,

    /// Log destination. Empty turns logging off, since stderr sits under
    /// the alternate screen.
    #[serde(default)]
    pub log_file: String,

    #[serde(default = "SliderConfig::cells")]
    pub slider: SliderConfig,
}

fn default_theme() -> String {
    "classic".to_string()
}

fn default_tick_ms() -> u64 {
    250
}

fn default_padding() -> u16 {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            tick_ms: default_tick_ms(),
            padding: default_padding(),
            log_file: String::new(),
            slider: SliderConfig::cells(),
        }
    }
}

impl Config {
    /// Loads `config/default.toml` under `root`; defaults when there is no
    /// file yet. A file that does not parse is an error, never replaced.
    pub fn load_or_default(root: &Path) -> Result<Self> {
        let path = assets::config_path(root);
        if !path.is_file() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: Config = toml::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
        cfg.slider
            .validate()
            .with_context(|| format!("[slider] in {}", path.display()))?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = assets::config_path(root);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| format!("mkdir {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(self)?;
        fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }
}
