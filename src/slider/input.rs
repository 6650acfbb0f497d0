/// Pointer action kinds the tracker understands. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    Press,
    Move,
    Release,
    Cancel,
    Other,
}

/// A pointer event in track-local space (`x = 0` at the track's left edge).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    pub action: PointerAction,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32, action: PointerAction) -> Self {
        Self { x, y, action }
    }
}

/// Whether an event was swallowed by the slider or left for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    Consumed,
    Ignored,
}

impl Handled {
    pub fn is_consumed(self) -> bool {
        self == Handled::Consumed
    }
}

/// Touch position and press state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputTracker {
    touch_x: f32,
    pointer_down: bool,
}

impl InputTracker {
    pub fn handle(&mut self, ev: PointerEvent, track_width: f32) -> Handled {
        if track_width <= 0.0 {
            return Handled::Ignored;
        }

        match ev.action {
            PointerAction::Other => return Handled::Ignored,
            PointerAction::Press => {
                if !self.pointer_down {
                    log::debug!("pointer down at {:.1}", ev.x);
                }
                self.pointer_down = true;
            }
            PointerAction::Release | PointerAction::Cancel => {
                if self.pointer_down {
                    log::debug!("pointer up ({:?}) at {:.1}", ev.action, ev.x);
                }
                self.pointer_down = false;
            }
            PointerAction::Move => {}
        }

        self.touch_x = clamp_touch(ev.x, track_width);
        Handled::Consumed
    }

    /// Keeps the retained position inside a track that was re-laid out.
    pub fn reclamp(&mut self, track_width: f32) {
        self.touch_x = clamp_touch(self.touch_x, track_width);
    }

    pub fn touch_x(&self) -> f32 {
        self.touch_x
    }

    pub fn pointer_down(&self) -> bool {
        self.pointer_down
    }
}

/// Clamps `x` into `[0, width]`; NaN lands on the left edge.
pub fn clamp_touch(x: f32, width: f32) -> f32 {
    let width = width.max(0.0);
    if x.is_nan() || x <= 0.0 {
        0.0
    } else if x >= width {
        width
    } else {
        x
    }
}

/// `touch_x / width` in `[0, 1]`, or `0` for a zero-width track.
pub fn fill_ratio(touch_x: f32, width: f32) -> f32 {
    if width <= 0.0 {
        return 0.0;
    }
    (clamp_touch(touch_x, width) / width).clamp(0.0, 1.0)
}

/// Rounded percentage shown in the tooltip.
pub fn percent(touch_x: f32, width: f32) -> u32 {
    (fill_ratio(touch_x, width) * 100.0).round() as u32
}
