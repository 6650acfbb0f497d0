use crate::app::state::AppState;
use crate::render::raster::{self, Origin};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Paints the slider with its local origin at the track's top-left cell.
/// The tooltip spills above `track` into the surrounding container.
pub fn render(f: &mut Frame, track: Rect, app: &AppState) {
    if track.width == 0 {
        return;
    }
    let origin = Origin {
        x: track.x as i32,
        y: track.y as i32,
    };
    let scene = app.slider.scene();
    raster::paint(&scene, origin, f.buffer_mut(), |c| app.theme.color(c));
}
