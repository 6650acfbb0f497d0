use crate::slider::geometry::Rgb;
use crate::slider::SliderColors;
use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Ansi256,
    NoColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeName {
    Classic,
    Latte,
    Mocha,
}

impl ThemeName {
    pub fn from_str_or_classic(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "latte" => Self::Latte,
            "mocha" => Self::Mocha,
            _ => Self::Classic,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            ThemeName::Classic => "Classic",
            ThemeName::Latte => "Latte",
            ThemeName::Mocha => "Mocha",
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            ThemeName::Classic => "classic",
            ThemeName::Latte => "latte",
            ThemeName::Mocha => "mocha",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ThemeName::Classic => ThemeName::Latte,
            ThemeName::Latte => ThemeName::Mocha,
            ThemeName::Mocha => ThemeName::Classic,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub container: Rgb,
    pub track: Rgb,
    pub fill: Rgb,
    pub tooltip: Rgb,
    pub text: Rgb,
    pub subtext: Rgb,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: ThemeName,
    pub palette: ThemePalette,
    pub capability: ColorCapability,
}

impl Theme {
    pub fn color(&self, c: Rgb) -> Color {
        map_color(self.capability, c)
    }
    pub fn color_container(&self) -> Color {
        self.color(self.palette.container)
    }
    pub fn color_text(&self) -> Color {
        self.color(self.palette.text)
    }
    pub fn color_subtext(&self) -> Color {
        self.color(self.palette.subtext)
    }

    pub fn slider_colors(&self) -> SliderColors {
        SliderColors {
            track: self.palette.track,
            fill: self.palette.fill,
            tooltip: self.palette.tooltip,
            text: self.palette.text,
        }
    }
}

pub fn detect_color_capability() -> ColorCapability {
    let colorterm = std::env::var("COLORTERM").unwrap_or_default().to_lowercase();
    let term = std::env::var("TERM").unwrap_or_default().to_lowercase();
    capability_from(&colorterm, &term)
}

fn capability_from(colorterm: &str, term: &str) -> ColorCapability {
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        return ColorCapability::TrueColor;
    }
    if term.contains("256color") {
        return ColorCapability::Ansi256;
    }
    ColorCapability::NoColor
}

fn map_color(cap: ColorCapability, t: Rgb) -> Color {
    match cap {
        ColorCapability::TrueColor => Color::Rgb(t.0, t.1, t.2),
        ColorCapability::Ansi256 => Color::Indexed(rgb_to_ansi256(t.0, t.1, t.2)),
        ColorCapability::NoColor => Color::Reset,
    }
}

fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    // 6x6x6 color cube, 16..231
    let r6 = (r as u16 * 5 / 255) as u8;
    let g6 = (g as u16 * 5 / 255) as u8;
    let b6 = (b as u16 * 5 / 255) as u8;
    16 + 36 * r6 + 6 * g6 + b6
}
