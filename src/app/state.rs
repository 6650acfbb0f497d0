use crate::data::config::Config;
use crate::slider::Slider;
use crate::ui::theme::Theme;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::{Duration, Instant};

const TOAST_TTL: Duration = Duration::from_millis(1500);

pub struct AppState {
    pub config: Config,
    pub theme: Theme,
    pub slider: Slider,
    pub asset_root: PathBuf,

    pub toast: Option<(String, Instant)>,
    pub should_quit: bool,

    /// Set by anything other than the slider that changes what is on screen.
    pub needs_redraw: bool,
}

impl AppState {
    pub fn new(config: Config, theme: Theme, asset_root: PathBuf) -> Result<Self> {
        let slider = Slider::new(config.slider.clone(), theme.slider_colors()).context("slider config")?;
        Ok(Self {
            config,
            theme,
            slider,
            asset_root,
            toast: None,
            should_quit: false,
            needs_redraw: true,
        })
    }

    pub fn set_toast(&mut self, msg: impl Into<String>) {
        self.toast = Some((msg.into(), Instant::now()));
        self.needs_redraw = true;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.slider.set_colors(theme.slider_colors());
        self.config.theme = theme.name.as_key().to_string();
        self.theme = theme;
        self.needs_redraw = true;
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some((_, at)) = &self.toast {
            if now.duration_since(*at) >= TOAST_TTL {
                self.toast = None;
                self.needs_redraw = true;
            }
        }
    }

    /// Consumes both redraw requests; true if a frame is due.
    pub fn take_redraw(&mut self) -> bool {
        let slider = self.slider.take_redraw();
        std::mem::take(&mut self.needs_redraw) || slider
    }
}
