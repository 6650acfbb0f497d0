use crate::slider::geometry::{Point, RoundRect, Rgb, Scene, Shape, Triangle};
use crate::slider::input::percent;

/// Sizes the tooltip geometry depends on, in the same unit as the track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipMetrics {
    pub width: f32,
    pub height: f32,
    pub triangle_height: f32,
    pub corner_radius: f32,
    pub triangle_half_base: f32,
    pub text_offset: f32,
    pub text_baseline_nudge: f32,
}

/// Computed tooltip layout for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipLayout {
    pub bubble: RoundRect,
    pub triangle: Triangle,
    pub text_origin: Point,
    pub label: String,
}

/// Horizontal bubble extent: centred on `touch_x`, shifted (never shrunk)
/// to stay within `[0, track_width]`.
///
/// The right clamp is applied last, so on a track narrower than the bubble
/// the bubble sits flush with the right edge.
pub fn bubble_span(touch_x: f32, track_width: f32, tooltip_width: f32) -> (f32, f32) {
    let half = tooltip_width / 2.0;
    let (l0, r0) = (touch_x - half, touch_x + half);
    let (mut left, mut right) = (l0, r0);

    if l0 <= 0.0 {
        left = 0.0;
        right = left + tooltip_width;
    }
    if r0 >= track_width {
        right = track_width;
        left = right - tooltip_width;
    }

    (left, right)
}

pub fn layout(touch_x: f32, track_width: f32, m: &TooltipMetrics) -> TooltipLayout {
    let (left, right) = bubble_span(touch_x, track_width, m.width);
    let top = -(m.triangle_height + m.height);
    let bottom = -m.triangle_height;

    let bubble = RoundRect::new(left, top, right, bottom, m.corner_radius);

    // anchored to the touch point, not to the (possibly shifted) bubble
    let triangle = Triangle {
        apex: Point::new(touch_x, 0.0),
        base_y: -m.triangle_height,
        half_base: m.triangle_half_base,
    };

    let text_origin = Point::new(
        left + m.width / 2.0 - m.text_offset,
        -(m.triangle_height + m.height / 2.0) + m.text_baseline_nudge,
    );

    TooltipLayout {
        bubble,
        triangle,
        text_origin,
        label: format!("{}%", percent(touch_x, track_width)),
    }
}

pub fn tooltip_scene(touch_x: f32, track_width: f32, m: &TooltipMetrics, bubble: Rgb, text: Rgb) -> Scene {
    let l = layout(touch_x, track_width, m);
    let mut scene = Scene::default();
    scene.push(Shape::RoundRect(l.bubble), bubble);
    scene.push(Shape::Triangle(l.triangle), bubble);
    scene.push(Shape::Text { origin: l.text_origin, text: l.label }, text);
    scene
}
