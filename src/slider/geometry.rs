//! Draw primitives shared by the track and tooltip renderers.
//!
//! All coordinates are track-local: `x = 0` is the track's left edge, `y = 0`
//! its top edge, and negative `y` lies above the track.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub radius: f32,
}

impl RoundRect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32, radius: f32) -> Self {
        Self { left, top, right, bottom, radius }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    /// Inclusive point test against the rounded silhouette.
    ///
    /// The radius is capped at half the shorter side, matching how a
    /// fully-rounded pill is drawn when `radius == height / 2`.
    pub fn contains(&self, p: Point) -> bool {
        if self.is_empty() {
            return false;
        }
        if p.x < self.left || p.x > self.right || p.y < self.top || p.y > self.bottom {
            return false;
        }

        let r = self.radius.max(0.0).min(self.width() / 2.0).min(self.height() / 2.0);
        if r == 0.0 {
            return true;
        }

        // nearest corner circle centre, only relevant inside a corner box
        let cx = if p.x < self.left + r {
            self.left + r
        } else if p.x > self.right - r {
            self.right - r
        } else {
            return true;
        };
        let cy = if p.y < self.top + r {
            self.top + r
        } else if p.y > self.bottom - r {
            self.bottom - r
        } else {
            return true;
        };

        let dx = p.x - cx;
        let dy = p.y - cy;
        dx * dx + dy * dy <= r * r
    }
}

/// Isosceles triangle with a horizontal base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub apex: Point,
    pub base_y: f32,
    pub half_base: f32,
}

impl Triangle {
    /// Horizontal extent of the triangle at height `y`, if `y` crosses it.
    pub fn span_at(&self, y: f32) -> Option<(f32, f32)> {
        let height = self.base_y - self.apex.y;
        if height == 0.0 {
            return None;
        }
        let t = (y - self.apex.y) / height;
        if !(0.0..=1.0).contains(&t) {
            return None;
        }
        let half = self.half_base * t;
        Some((self.apex.x - half, self.apex.x + half))
    }
}

/// Opaque colour handle; resolved to a terminal colour at raster time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    RoundRect(RoundRect),
    Triangle(Triangle),
    /// Text with its left edge at `origin.x` and baseline at `origin.y`.
    Text { origin: Point, text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCmd {
    pub shape: Shape,
    pub color: Rgb,
    pub clip: Option<RoundRect>,
}

/// Ordered draw list; later commands paint over earlier ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub cmds: Vec<DrawCmd>,
}

impl Scene {
    pub fn push(&mut self, shape: Shape, color: Rgb) {
        self.cmds.push(DrawCmd { shape, color, clip: None });
    }

    pub fn push_clipped(&mut self, shape: Shape, color: Rgb, clip: RoundRect) {
        self.cmds.push(DrawCmd { shape, color, clip: Some(clip) });
    }

    pub fn extend(&mut self, other: Scene) {
        self.cmds.extend(other.cmds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pill_excludes_outer_corner() {
        let pill = RoundRect::new(0.0, 0.0, 100.0, 8.0, 4.0);
        assert!(pill.contains(Point::new(50.0, 4.0)));
        assert!(pill.contains(Point::new(4.0, 0.0)));
        assert!(!pill.contains(Point::new(0.2, 0.2)));
        assert!(!pill.contains(Point::new(99.8, 7.8)));
    }

    #[test]
    fn zero_width_rect_contains_nothing() {
        let r = RoundRect::new(10.0, 0.0, 10.0, 8.0, 4.0);
        assert!(!r.contains(Point::new(10.0, 4.0)));
    }

    #[test]
    fn triangle_span_narrows_toward_apex() {
        let tri = Triangle { apex: Point::new(10.0, 0.0), base_y: -50.0, half_base: 4.0 };
        assert_eq!(tri.span_at(0.0), Some((10.0, 10.0)));
        assert_eq!(tri.span_at(-50.0), Some((6.0, 14.0)));
        assert_eq!(tri.span_at(-25.0), Some((8.0, 12.0)));
        assert_eq!(tri.span_at(1.0), None);
        assert_eq!(tri.span_at(-51.0), None);
    }
}
