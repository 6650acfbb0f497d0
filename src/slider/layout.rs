/// Absolute horizontal extent of the track, in window space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TrackBounds {
    pub left: f32,
    pub right: f32,
}

impl TrackBounds {
    /// Builds bounds from a layout report, swapping inverted edges.
    pub fn new(left: f32, right: f32) -> Self {
        if right < left {
            Self { left: right, right: left }
        } else {
            Self { left, right }
        }
    }

    pub fn width(&self) -> f32 {
        (self.right - self.left).max(0.0)
    }

    pub fn to_local(&self, window_x: f32) -> f32 {
        window_x - self.left
    }
}

/// Remembers where the track was last laid out.
#[derive(Debug, Default)]
pub struct LayoutProbe {
    bounds: TrackBounds,
}

impl LayoutProbe {
    pub fn report(&mut self, bounds: TrackBounds) {
        let bounds = TrackBounds::new(bounds.left, bounds.right);
        if bounds != self.bounds {
            log::debug!("track laid out at {}, {}", bounds.left, bounds.right);
        }
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> TrackBounds {
        self.bounds
    }
}
