use crate::slider::geometry::{RoundRect, Rgb, Scene, Shape};

/// Background pill plus the fill, clipped to the full-width pill so a
/// narrow fill never shows square corners outside the rounded ends.
pub fn track_scene(track_width: f32, bar_height: f32, touch_x: f32, background: Rgb, fill: Rgb) -> Scene {
    let mut scene = Scene::default();
    let width = track_width.max(0.0);
    let radius = bar_height / 2.0;

    let silhouette = RoundRect::new(0.0, 0.0, width, bar_height, radius);
    scene.push(Shape::RoundRect(silhouette), background);

    let fill_w = touch_x.clamp(0.0, width);
    let bar = RoundRect::new(0.0, 0.0, fill_w, bar_height, radius);
    scene.push_clipped(Shape::RoundRect(bar), fill, silhouette);

    scene
}
