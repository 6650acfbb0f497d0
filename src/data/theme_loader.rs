use crate::data::assets;
use crate::slider::parse_hex;
use crate::ui::theme::{detect_color_capability, ColorCapability, Theme, ThemeName, ThemePalette};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub struct ThemeLoader;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeToml {
    container: String,
    track: String,
    fill: String,
    tooltip: String,
    text: String,
    subtext: String,
}

impl ThemeLoader {
    pub fn load(root: &Path, name: &str) -> Result<Theme> {
        Self::load_with(root, name, detect_color_capability())
    }

    pub fn load_with(root: &Path, name: &str, capability: ColorCapability) -> Result<Theme> {
        let name = ThemeName::from_str_or_classic(name);
        let path = assets::theme_path(root, name);

        let raw = if path.is_file() {
            fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?
        } else {
            assets::embedded_theme(name).to_string()
        };

        let palette = parse_palette(&raw).with_context(|| format!("theme {}", name.as_label()))?;
        Ok(Theme { name, palette, capability })
    }
}

fn parse_palette(raw: &str) -> Result<ThemePalette> {
    let t: ThemeToml = toml::from_str(raw)?;
    Ok(ThemePalette {
        container: parse_hex(&t.container)?,
        track: parse_hex(&t.track)?,
        fill: parse_hex(&t.fill)?,
        tooltip: parse_hex(&t.tooltip)?,
        text: parse_hex(&t.text)?,
        subtext: parse_hex(&t.subtext)?,
    })
}
