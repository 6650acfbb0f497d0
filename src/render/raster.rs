//! Paints a slider [`Scene`] into a ratatui buffer.
//!
//! One cell is one unit. Filled shapes are sampled at cell centres; the
//! tooltip pointer is too thin for that, so it paints every cell its span
//! touches on each row. Text keeps whatever background is under it.

use crate::slider::geometry::{DrawCmd, Point, RoundRect, Rgb, Scene, Shape, Triangle};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

/// Window cell holding the track's local origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub x: i32,
    pub y: i32,
}

pub fn paint(scene: &Scene, origin: Origin, buf: &mut Buffer, color: impl Fn(Rgb) -> Color) {
    for cmd in &scene.cmds {
        let c = color(cmd.color);
        match &cmd.shape {
            Shape::RoundRect(r) => paint_round_rect(cmd, r, origin, buf, c),
            Shape::Triangle(t) => paint_triangle(cmd, t, origin, buf, c),
            Shape::Text { origin: at, text } => paint_text(*at, text, origin, buf, c),
        }
    }
}

fn paint_round_rect(cmd: &DrawCmd, r: &RoundRect, origin: Origin, buf: &mut Buffer, c: Color) {
    if r.is_empty() {
        return;
    }
    let view = Visible::of(buf.area, origin);
    let cols = view.cols(r.left.floor(), r.right.ceil());
    let rows = view.rows(r.top.floor(), r.bottom.ceil());

    for row in rows {
        for col in cols.clone() {
            let centre = Point::new(col as f32 + 0.5, row as f32 + 0.5);
            if !r.contains(centre) || !clip_allows(cmd, centre) {
                continue;
            }
            if let Some(cell) = cell_mut(buf, origin, col, row) {
                cell.set_symbol(" ");
                cell.set_bg(c);
            }
        }
    }
}

fn paint_triangle(cmd: &DrawCmd, t: &Triangle, origin: Origin, buf: &mut Buffer, c: Color) {
    let (y0, y1) = if t.apex.y < t.base_y { (t.apex.y, t.base_y) } else { (t.base_y, t.apex.y) };
    let view = Visible::of(buf.area, origin);

    for row in view.rows(y0.floor(), y1.ceil()) {
        let y = row as f32 + 0.5;
        let Some((lo, hi)) = t.span_at(y) else { continue };
        for col in view.cols(lo.floor(), hi.floor() + 1.0) {
            // [col, col + 1) must touch [lo, hi]
            if !(lo < (col + 1) as f32 && hi >= col as f32) {
                continue;
            }
            if !clip_allows(cmd, Point::new(col as f32 + 0.5, y)) {
                continue;
            }
            if let Some(cell) = cell_mut(buf, origin, col, row) {
                cell.set_symbol(" ");
                cell.set_bg(c);
            }
        }
    }
}

fn paint_text(at: Point, text: &str, origin: Origin, buf: &mut Buffer, c: Color) {
    let view = Visible::of(buf.area, origin);
    // the glyph row sits directly on the baseline
    let row = at.y.ceil() as i32 - 1;
    let mut col = clamp_i32(at.x.round());
    let mut tmp = [0u8; 4];

    for ch in text.chars() {
        if col >= view.right {
            break;
        }
        let w = ch.width().unwrap_or(0) as i32;
        if w == 0 {
            continue;
        }
        if let Some(cell) = cell_mut(buf, origin, col, row) {
            cell.set_symbol(ch.encode_utf8(&mut tmp));
            cell.set_fg(c);
        }
        col += w;
    }
}

/// The buffer area in track-local cells. Shape extents are cut to it
/// before looping.
#[derive(Debug, Clone, Copy)]
struct Visible {
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
}

impl Visible {
    fn of(area: Rect, origin: Origin) -> Self {
        let left = area.x as i32 - origin.x;
        let top = area.y as i32 - origin.y;
        Self {
            left,
            right: left + area.width as i32,
            top,
            bottom: top + area.height as i32,
        }
    }

    fn cols(&self, from: f32, to: f32) -> Range<i32> {
        clamp_i32(from).max(self.left)..clamp_i32(to).min(self.right)
    }

    fn rows(&self, from: f32, to: f32) -> Range<i32> {
        clamp_i32(from).max(self.top)..clamp_i32(to).min(self.bottom)
    }
}

fn clamp_i32(v: f32) -> i32 {
    // `as` saturates and maps NaN to 0
    v as i32
}

fn clip_allows(cmd: &DrawCmd, p: Point) -> bool {
    cmd.clip.map_or(true, |clip| clip.contains(p))
}

fn cell_mut(buf: &mut Buffer, origin: Origin, col: i32, row: i32) -> Option<&mut ratatui::buffer::Cell> {
    let x = origin.x + col;
    let y = origin.y + row;
    if !inside(buf.area, x, y) {
        return None;
    }
    Some(buf.get_mut(x as u16, y as u16))
}

fn inside(area: Rect, x: i32, y: i32) -> bool {
    x >= area.x as i32
        && x < area.x as i32 + area.width as i32
        && y >= area.y as i32
        && y < area.y as i32 + area.height as i32
}
