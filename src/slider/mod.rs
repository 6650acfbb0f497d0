//! Thumb-less slider with a floating percentage tooltip.
//!
//! The host reports layout with [`Slider::on_layout`], forwards pointer
//! events with [`Slider::handle_pointer`], and repaints whenever
//! [`Slider::take_redraw`] returns true. Painting is a pure function of the
//! current state: [`Slider::scene`] returns the draw list for one frame.

pub mod geometry;
pub mod input;
pub mod layout;
pub mod tooltip;
pub mod track;

use geometry::{Rgb, Scene};
use input::{Handled, InputTracker, PointerEvent};
use layout::{LayoutProbe, TrackBounds};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tooltip::TooltipMetrics;

#[derive(Debug, Error, PartialEq)]
pub enum SliderError {
    #[error("{field} must be a finite, non-negative size (got {value})")]
    InvalidSize { field: &'static str, value: f32 },
    #[error("invalid colour {0:?}, expected #rrggbb")]
    InvalidColor(String),
}

/// Widget sizes and the optional track colour override.
///
/// `Default` carries the widget's native sizes; fields missing from a
/// config file fall back to the terminal-cell preset instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default = "SliderConfig::cells")]
pub struct SliderConfig {
    pub bar_height: f32,
    /// Overrides the palette's track colour when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_background_color: Option<String>,
    pub tooltip_width: f32,
    pub tooltip_height: f32,
    pub triangle_height: f32,
    pub tooltip_corner_radius: f32,
    pub triangle_half_base: f32,
    pub text_offset: f32,
    pub text_baseline_nudge: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            bar_height: 8.0,
            bar_background_color: None,
            tooltip_width: 100.0,
            tooltip_height: 50.0,
            triangle_height: 50.0,
            tooltip_corner_radius: 10.0,
            triangle_half_base: 4.0,
            text_offset: 12.0,
            text_baseline_nudge: 5.0,
        }
    }
}

impl SliderConfig {
    /// Sizes measured in terminal cells.
    pub fn cells() -> Self {
        Self {
            bar_height: 1.0,
            bar_background_color: None,
            tooltip_width: 9.0,
            tooltip_height: 3.0,
            triangle_height: 1.0,
            tooltip_corner_radius: 1.0,
            triangle_half_base: 0.5,
            text_offset: 1.5,
            text_baseline_nudge: 0.0,
        }
    }

    pub fn validate(&self) -> Result<(), SliderError> {
        let sizes = [
            ("bar_height", self.bar_height),
            ("tooltip_width", self.tooltip_width),
            ("tooltip_height", self.tooltip_height),
            ("triangle_height", self.triangle_height),
            ("tooltip_corner_radius", self.tooltip_corner_radius),
            ("triangle_half_base", self.triangle_half_base),
            ("text_offset", self.text_offset),
        ];
        for (field, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(SliderError::InvalidSize { field, value });
            }
        }
        // the nudge may point either way
        if !self.text_baseline_nudge.is_finite() {
            return Err(SliderError::InvalidSize {
                field: "text_baseline_nudge",
                value: self.text_baseline_nudge,
            });
        }
        if let Some(c) = &self.bar_background_color {
            parse_hex(c)?;
        }
        Ok(())
    }

    fn metrics(&self) -> TooltipMetrics {
        TooltipMetrics {
            width: self.tooltip_width,
            height: self.tooltip_height,
            triangle_height: self.triangle_height,
            corner_radius: self.tooltip_corner_radius,
            triangle_half_base: self.triangle_half_base,
            text_offset: self.text_offset,
            text_baseline_nudge: self.text_baseline_nudge,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderColors {
    pub track: Rgb,
    pub fill: Rgb,
    pub tooltip: Rgb,
    pub text: Rgb,
}

impl Default for SliderColors {
    fn default() -> Self {
        Self {
            track: Rgb(0, 0, 0),
            fill: Rgb(255, 255, 255),
            tooltip: Rgb(255, 255, 255),
            text: Rgb(0, 0, 0),
        }
    }
}

/// Parses `#rrggbb` (leading `#` optional).
pub fn parse_hex(s: &str) -> Result<Rgb, SliderError> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(SliderError::InvalidColor(s.to_string()));
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| SliderError::InvalidColor(s.to_string()));
    Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Read-only view of the slider state for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub touch_x: f32,
    pub pointer_down: bool,
    pub track_width: f32,
}

impl Snapshot {
    pub fn fill_ratio(&self) -> f32 {
        input::fill_ratio(self.touch_x, self.track_width)
    }

    pub fn percent(&self) -> u32 {
        input::percent(self.touch_x, self.track_width)
    }

    pub fn tooltip_visible(&self) -> bool {
        self.pointer_down && self.track_width > 0.0
    }
}

#[derive(Debug)]
pub struct Slider {
    config: SliderConfig,
    colors: SliderColors,
    probe: LayoutProbe,
    tracker: InputTracker,
    dirty: bool,
}

impl Slider {
    pub fn new(config: SliderConfig, mut colors: SliderColors) -> Result<Self, SliderError> {
        config.validate()?;
        if let Some(c) = &config.bar_background_color {
            colors.track = parse_hex(c)?;
        }
        Ok(Self {
            config,
            colors,
            probe: LayoutProbe::default(),
            tracker: InputTracker::default(),
            dirty: true,
        })
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn set_colors(&mut self, mut colors: SliderColors) {
        if let Some(c) = &self.config.bar_background_color {
            // validated in `new`
            colors.track = parse_hex(c).unwrap_or(colors.track);
        }
        if colors != self.colors {
            self.colors = colors;
            self.dirty = true;
        }
    }

    pub fn on_layout(&mut self, bounds: TrackBounds) {
        let before = self.probe.bounds();
        self.probe.report(bounds);
        let after = self.probe.bounds();
        if before != after {
            self.tracker.reclamp(after.width());
            self.dirty = true;
        }
    }

    pub fn bounds(&self) -> TrackBounds {
        self.probe.bounds()
    }

    pub fn handle_pointer(&mut self, ev: PointerEvent) -> Handled {
        let before = self.tracker;
        let handled = self.tracker.handle(ev, self.probe.bounds().width());
        if self.tracker != before {
            self.dirty = true;
        }
        handled
    }

    /// Returns true once after every state change.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            touch_x: self.tracker.touch_x(),
            pointer_down: self.tracker.pointer_down(),
            track_width: self.probe.bounds().width(),
        }
    }

    pub fn scene(&self) -> Scene {
        let snap = self.snapshot();
        let mut scene = track::track_scene(
            snap.track_width,
            self.config.bar_height,
            snap.touch_x,
            self.colors.track,
            self.colors.fill,
        );
        if snap.tooltip_visible() {
            scene.extend(tooltip::tooltip_scene(
                snap.touch_x,
                snap.track_width,
                &self.config.metrics(),
                self.colors.tooltip,
                self.colors.text,
            ));
        }
        scene
    }
}
