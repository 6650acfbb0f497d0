use crate::ui::theme::ThemeName;
use anyhow::{Context, Result};
use directories::BaseDirs;
use std::fs;
use std::path::{Path, PathBuf};

const ENV_ASSET_DIR: &str = "TOOLTIP_SLIDER_ASSET_DIR";

pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../config/default.toml");

const THEME_CLASSIC_TOML: &str = include_str!("../../themes/classic.toml");
const THEME_LATTE_TOML: &str = include_str!("../../themes/catppuccin_latte.toml");
const THEME_MOCHA_TOML: &str = include_str!("../../themes/catppuccin_mocha.toml");

pub fn resolve_asset_root() -> PathBuf {
    if let Some(p) = std::env::var_os(ENV_ASSET_DIR) {
        return PathBuf::from(p);
    }

    // Linux: $XDG_CONFIG_HOME/tooltip-slider
    // macOS: ~/Library/Application Support/tooltip-slider
    // Windows: %APPDATA%\tooltip-slider
    if let Some(sys) = BaseDirs::new().map(|d| d.config_dir().join("tooltip-slider")) {
        return sys;
    }

    // only when the OS config directory cannot be determined
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".config")
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join("config/default.toml")
}

pub fn theme_path(root: &Path, name: ThemeName) -> PathBuf {
    root.join("themes").join(theme_file(name))
}

/// Built-in copy of a theme, used when the on-disk file is missing.
pub fn embedded_theme(name: ThemeName) -> &'static str {
    match name {
        ThemeName::Classic => THEME_CLASSIC_TOML,
        ThemeName::Latte => THEME_LATTE_TOML,
        ThemeName::Mocha => THEME_MOCHA_TOML,
    }
}

fn theme_file(name: ThemeName) -> &'static str {
    match name {
        ThemeName::Classic => "classic.toml",
        ThemeName::Latte => "catppuccin_latte.toml",
        ThemeName::Mocha => "catppuccin_mocha.toml",
    }
}

/// Writes the default config and themes under `root` unless already present.
pub fn ensure_all_assets(root: &Path) -> Result<()> {
    write_if_missing(&config_path(root), DEFAULT_CONFIG_TOML)?;
    for name in [ThemeName::Classic, ThemeName::Latte, ThemeName::Mocha] {
        write_if_missing(&theme_path(root, name), embedded_theme(name))?;
    }
    Ok(())
}

fn ensure_dir(p: &Path) -> Result<()> {
    fs::create_dir_all(p).with_context(|| format!("mkdir {}", p.display()))
}

fn write_if_missing(path: &Path, contents: &str) -> Result<()> {
    if path.is_file() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
